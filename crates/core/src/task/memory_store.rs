//! In-memory task storage implementation
//!
//! Tasks live only for the lifetime of the process.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::model::Task;
use super::repository::TaskRepository;

#[derive(Default)]
struct Inner {
    /// Tasks keyed by ID
    tasks: HashMap<String, Task>,
    /// IDs in insertion order
    order: Vec<String>,
}

/// Process-local task store
#[derive(Default)]
pub struct InMemoryTaskStore {
    inner: RwLock<Inner>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every write leaves `Inner` consistent, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TaskRepository for InMemoryTaskStore {
    fn list(&self) -> Vec<Task> {
        let inner = self.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.tasks.get(id))
            .cloned()
            .collect()
    }

    fn find(&self, id: &str) -> Option<Task> {
        self.read().tasks.get(id).cloned()
    }

    fn insert(&self, task: Task) {
        let mut inner = self.write();
        if inner.tasks.insert(task.id.clone(), task.clone()).is_none() {
            inner.order.push(task.id);
        }
    }

    fn replace(&self, task: Task) -> Option<Task> {
        let mut inner = self.write();
        let slot = inner.tasks.get_mut(&task.id)?;
        *slot = task.clone();
        Some(task)
    }

    fn remove(&self, id: &str) -> bool {
        let mut inner = self.write();
        if inner.tasks.remove(id).is_none() {
            return false;
        }
        inner.order.retain(|stored| stored != id);
        true
    }

    fn len(&self) -> usize {
        self.read().tasks.len()
    }
}
