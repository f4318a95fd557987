//! Task repository trait
//!
//! Defines the interface for task storage operations.

use super::model::Task;

/// Storage interface for task records
///
/// Implementations own the records; every read hands back a copy.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// All tasks in insertion order
    fn list(&self) -> Vec<Task>;

    /// Get a task by ID
    fn find(&self, id: &str) -> Option<Task>;

    /// Append a task. The caller guarantees the ID is not already stored.
    fn insert(&self, task: Task);

    /// Overwrite the task with the same ID in place
    ///
    /// Returns `None` when no such task is stored.
    fn replace(&self, task: Task) -> Option<Task>;

    /// Delete a task by ID, reporting whether anything was removed
    fn remove(&self, id: &str) -> bool;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
