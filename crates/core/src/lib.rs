//! Core library for the task service
//!
//! This crate contains the core business logic, including:
//! - The task model and status enumeration
//! - Task storage behind the `TaskRepository` seam
//! - Input validation and the task lifecycle service

pub mod clock;
pub mod error;
pub mod task;

pub use error::TaskError;
pub type Result<T> = std::result::Result<T, TaskError>;
