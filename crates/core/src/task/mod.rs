//! Task module
//!
//! This module contains task-related types and logic.

mod memory_store;
mod model;
mod repository;
mod service;
pub mod validation;

pub use memory_store::InMemoryTaskStore;
pub use model::*;
pub use repository::TaskRepository;
pub use service::TaskService;
