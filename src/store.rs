//! Task Store
//!
//! 任务列表的唯一持有者。每次变更都构造新的不可变快照并整体替换旧快照，
//! 然后同步通知所有订阅者。

use std::rc::Rc;

use tracing::debug;

use crate::model::{Task, TaskId, SEED_TASKS};

/// 任务列表快照（不可变，可廉价共享）
pub type Snapshot = Rc<[Task]>;

/// 订阅句柄，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Snapshot)>;

/// 任务存储
pub struct TaskStore {
    /// 当前发布的快照
    tasks: Snapshot,
    /// 下一个分配的 id（单调递增）
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl TaskStore {
    /// 创建空的 store
    pub fn new() -> Self {
        Self {
            tasks: Rc::from(Vec::new()),
            next_id: 1,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// 创建带示例任务的 store
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let tasks: Vec<Task> = SEED_TASKS
            .iter()
            .map(|(text, completed)| Task {
                completed: *completed,
                ..Task::new(store.allocate_id(), *text)
            })
            .collect();
        store.tasks = Rc::from(tasks);
        store
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }

    // ========== 读取 ==========

    /// 当前快照
    pub fn snapshot(&self) -> Snapshot {
        Rc::clone(&self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    // ========== 变更 ==========

    /// 追加新任务，返回新 id
    ///
    /// 调用方负责 trim 和长度校验，store 不做检查。
    pub fn add(&mut self, text: impl Into<String>) -> TaskId {
        let id = self.allocate_id();
        let task = Task::new(id, text);
        debug!(%id, text = %task.text, "add task");

        let next: Snapshot = self
            .tasks
            .iter()
            .cloned()
            .chain(std::iter::once(task))
            .collect();
        self.publish(next);
        id
    }

    /// 翻转 completed；id 不存在时原样重新发布
    pub fn toggle(&mut self, id: TaskId) {
        let Some(index) = self.position(id) else {
            debug!(%id, "toggle: no such task");
            self.publish(self.snapshot());
            return;
        };

        let next: Snapshot = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, t)| if i == index { t.toggled() } else { t.clone() })
            .collect();
        debug!(%id, completed = next[index].completed, "toggle task");
        self.publish(next);
    }

    /// 删除任务，保持其余元素相对顺序；id 不存在时原样重新发布
    pub fn delete(&mut self, id: TaskId) {
        if self.position(id).is_none() {
            debug!(%id, "delete: no such task");
            self.publish(self.snapshot());
            return;
        }

        let next: Snapshot = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        debug!(%id, remaining = next.len(), "delete task");
        self.publish(next);
    }

    // ========== 订阅 ==========

    /// 注册订阅者，每次发布快照后同步调用
    pub fn subscribe(&mut self, callback: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// 取消订阅，返回是否存在
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// 整体替换快照并通知订阅者
    fn publish(&mut self, next: Snapshot) {
        self.tasks = next;
        let snapshot = self.snapshot();
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&snapshot);
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn texts(store: &TaskStore) -> Vec<String> {
        store.snapshot().iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn test_seeded_store() {
        let store = TaskStore::seeded();
        assert_eq!(store.len(), 4);
        assert_eq!(store.completed_count(), 1);
    }

    #[test]
    fn test_add_appends_uncompleted_task() {
        let mut store = TaskStore::seeded();
        let id = store.add("Buy milk");

        assert_eq!(store.len(), 5);
        let last = store.snapshot().last().cloned().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "Buy milk");
        assert!(!last.completed);
    }

    #[test]
    fn test_ids_are_unique_for_rapid_adds() {
        let mut store = TaskStore::new();
        let ids: Vec<TaskId> = (0..100).map(|i| store.add(format!("task {i}"))).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut store = TaskStore::seeded();
        let before = store.snapshot();
        let target = before[2].id;

        store.toggle(target);
        let after = store.snapshot();

        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after.iter()) {
            assert_eq!(old.id, new.id);
            assert_eq!(old.text, new.text);
            if old.id == target {
                assert_eq!(new.completed, !old.completed);
            } else {
                assert_eq!(new.completed, old.completed);
            }
        }
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut store = TaskStore::seeded();
        let before = store.snapshot();
        let target = before[0].id;

        store.toggle(target);
        store.toggle(target);

        assert_eq!(&*store.snapshot(), &*before);
    }

    #[test]
    fn test_toggle_absent_id_is_noop() {
        let mut store = TaskStore::seeded();
        let before = store.snapshot();

        store.toggle(TaskId::new(999));

        assert!(Rc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = TaskStore::new();
        store.add("alpha");
        store.add("bravo");
        store.add("charlie");

        let b = store.snapshot()[1].id;
        store.delete(b);

        assert_eq!(texts(&store), vec!["alpha", "charlie"]);
        assert!(store.get(b).is_none());
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mut store = TaskStore::seeded();
        let before = store.snapshot();

        store.delete(TaskId::new(999));

        assert!(Rc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_mutation_builds_new_snapshot() {
        let mut store = TaskStore::seeded();
        let before = store.snapshot();
        store.add("Something new");

        // 旧快照不受影响
        assert_eq!(before.len(), 4);
        assert!(!Rc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_subscribers_receive_every_publish() {
        let mut store = TaskStore::seeded();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.len()));

        let id = store.add("Buy milk");
        store.toggle(id);
        store.delete(id);
        store.delete(id);

        assert_eq!(*seen.borrow(), vec![5, 5, 4, 4]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = TaskStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let sub = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add("first task");
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add("second task");

        assert_eq!(*count.borrow(), 1);
    }
}
