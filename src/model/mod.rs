pub mod task;

pub use task::{Task, TaskId, SEED_TASKS};
