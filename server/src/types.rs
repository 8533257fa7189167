//! Wire-level request and response types for the task API.
//!
//! The wire format is camelCase (`isCompleted`); internal records stay
//! snake_case. `TaskResponse` is the only shape clients ever see — internal
//! `TaskRecord` values are mapped through it on the way out.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::store::TaskRecord;

/// Longest accepted task name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Body of POST and PUT requests. `isCompleted` may be omitted and defaults
/// to `false`; a present but non-boolean value is rejected during
/// deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub name: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl TaskRequest {
    /// Enforce the name contract: non-empty, at most [`MAX_NAME_LEN`]
    /// characters.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() {
            return Err(ApiError::Validation("name must not be empty".to_string()));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ApiError::Validation(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// External representation of a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub name: String,
    pub is_completed: bool,
}

impl From<&TaskRecord> for TaskResponse {
    fn from(record: &TaskRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            is_completed: record.completed,
        }
    }
}
