//! Input guards for the lifecycle service
//!
//! Each check is pure and fails with its own error kind.

use super::model::TaskStatus;
use crate::{Result, TaskError};

pub const TITLE_REQUIRED: &str = "Task title is required.";
pub const ID_REQUIRED: &str = "Task ID is required.";
pub const INVALID_STATUS: &str = "Invalid or empty status value.";

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reject an absent, empty or whitespace-only title
pub fn validate_title(title: Option<&str>) -> Result<&str> {
    non_blank(title).ok_or_else(|| TaskError::InvalidCreation(TITLE_REQUIRED.to_string()))
}

/// Reject an absent, empty or whitespace-only identifier
pub fn validate_id(id: Option<&str>) -> Result<&str> {
    non_blank(id).ok_or_else(|| TaskError::InvalidUpdate(ID_REQUIRED.to_string()))
}

/// Parse a raw status, rejecting anything outside the enumeration
pub fn validate_status(status: Option<&str>) -> Result<TaskStatus> {
    status
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| TaskError::InvalidUpdate(INVALID_STATUS.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title(Some("Test")), Ok("Test"));
        assert_eq!(validate_title(Some("  padded  ")), Ok("  padded  "));

        for bad in [None, Some(""), Some("   "), Some("\t\n")] {
            assert_eq!(
                validate_title(bad),
                Err(TaskError::InvalidCreation(TITLE_REQUIRED.to_string()))
            );
        }
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id(Some("x")), Ok("x"));

        for bad in [None, Some(""), Some(" ")] {
            assert_eq!(
                validate_id(bad),
                Err(TaskError::InvalidUpdate(ID_REQUIRED.to_string()))
            );
        }
    }

    #[test]
    fn test_validate_status() {
        assert_eq!(validate_status(Some("COMPLETED")), Ok(TaskStatus::Completed));
        assert_eq!(validate_status(Some("IN_PROGRESS")), Ok(TaskStatus::InProgress));

        for bad in [None, Some(""), Some("BAD"), Some("completed")] {
            let err = validate_status(bad).unwrap_err();
            assert_eq!(err.to_string(), "Invalid task. Invalid or empty status value.");
        }
    }
}
