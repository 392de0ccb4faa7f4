use std::fmt;

/// Task 唯一标识
///
/// 由 TaskStore 内部的单调计数器分配，创建后不再变化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 单个任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// 创建时已 trim，之后不可变
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// 返回 completed 取反后的副本（toggle 用，不原地修改）
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// 复选框文字
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// 启动时的示例任务 (text, completed)
pub const SEED_TASKS: &[(&str, bool)] = &[
    ("Learn how ownership works", true),
    ("Build a terminal task list", false),
    ("Write tests for the store", false),
    ("Review the pull request", false),
];
