//! Distribution Layer
//!
//! `TaskContext` 是指向唯一 TaskStore 的共享句柄。视图通过引用拿到它，
//! 不需要层层传递 tasks 和回调。

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{Task, TaskId};
use crate::store::{Snapshot, SubscriptionId, TaskStore};

/// 共享的 store 句柄，clone 只增加引用计数
#[derive(Clone)]
pub struct TaskContext {
    store: Rc<RefCell<TaskStore>>,
}

impl TaskContext {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// 当前快照
    pub fn tasks(&self) -> Snapshot {
        self.store.borrow().snapshot()
    }

    pub fn len(&self) -> usize {
        self.store.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// 按 id 查找，返回副本
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.store.borrow().get(id).cloned()
    }

    pub fn completed_count(&self) -> usize {
        self.store.borrow().completed_count()
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.store.borrow().position(id)
    }

    pub fn add(&self, text: impl Into<String>) -> TaskId {
        self.store.borrow_mut().add(text)
    }

    pub fn toggle(&self, id: TaskId) {
        self.store.borrow_mut().toggle(id);
    }

    pub fn delete(&self, id: TaskId) {
        self.store.borrow_mut().delete(id);
    }

    /// 订阅快照更新
    ///
    /// 回调在 store 借用期间同步执行，回调内不能再调用本句柄的方法。
    pub fn subscribe(&self, callback: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        self.store.borrow_mut().subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.borrow_mut().unsubscribe(id)
    }
}
