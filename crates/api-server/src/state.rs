//! Application state

use std::sync::Arc;

use tasks_core::task::{InMemoryTaskStore, TaskRepository, TaskService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_service: TaskService,
}

impl AppState {
    /// Create state backed by a fresh in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryTaskStore::new()))
    }

    pub fn with_store(store: Arc<dyn TaskRepository>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                task_service: TaskService::new(store),
            }),
        }
    }

    /// Get reference to the task service
    pub fn task_service(&self) -> &TaskService {
        &self.inner.task_service
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
