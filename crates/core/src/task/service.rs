//! Task lifecycle service
//!
//! Orchestrates validation and storage for create, read, status update and
//! delete. Every check runs before the store is touched, so a failed call
//! leaves storage unchanged.

use std::sync::Arc;

use tracing::{debug, info};

use super::model::{CreateTask, Task};
use super::repository::TaskRepository;
use super::validation::{validate_id, validate_status, validate_title};
use crate::clock::{Clock, SystemClock};
use crate::{Result, TaskError};

/// Task lifecycle operations over an injected store
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock>,
}

impl TaskService {
    /// Create a service stamping times from the system clock
    pub fn new(store: Arc<dyn TaskRepository>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn TaskRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// All tasks in insertion order
    pub fn list_all(&self) -> Vec<Task> {
        self.store.list()
    }

    /// Get a task by ID
    pub fn get_by_id(&self, id: &str) -> Result<Task> {
        self.store.find(id).ok_or_else(|| {
            debug!(task_id = %id, "Task lookup missed");
            TaskError::NotFound(id.to_string())
        })
    }

    /// Create a pending task from validated input
    pub fn create(&self, input: CreateTask) -> Result<Task> {
        let title = validate_title(input.title.as_deref()).inspect_err(|e| {
            debug!(error = %e, "Rejected task creation");
        })?;

        let mut task = Task::new(title, self.clock.now());
        task.description = input.description;

        self.store.insert(task.clone());
        info!(task_id = %task.id, title = %task.title, "Task created");
        Ok(task)
    }

    /// Set the status of an existing task
    ///
    /// The ID is checked before the status so that a request with both
    /// malformed always reports the missing ID.
    pub fn update_status(&self, id: Option<&str>, new_status: Option<&str>) -> Result<Task> {
        let (id, status) = validate_id(id)
            .and_then(|id| Ok((id, validate_status(new_status)?)))
            .inspect_err(|e| debug!(error = %e, "Rejected status update"))?;

        let mut task = self.get_by_id(id)?;
        let previous = task.status;
        task.status = status;
        task.updated_at = self.clock.now().max(task.updated_at);

        let updated = self
            .store
            .replace(task)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))?;

        info!(task_id = %id, from = %previous, to = %status, "Task status updated");
        Ok(updated)
    }

    /// Remove a task, reporting whether one was actually deleted
    ///
    /// A well-formed ID that matches nothing is not an error.
    pub fn remove(&self, id: Option<&str>) -> Result<bool> {
        let id = validate_id(id).inspect_err(|e| debug!(error = %e, "Rejected task removal"))?;

        let removed = self.store.remove(id);
        if removed {
            info!(task_id = %id, "Task removed");
        } else {
            debug!(task_id = %id, "Removal matched no task");
        }
        Ok(removed)
    }
}
