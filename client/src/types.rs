//! Domain DTOs for the task API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined independently
//! of the server crate; the integration suite catches any drift between the
//! two. The wire format is camelCase (`isCompleted`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub is_completed: bool,
}

/// Request payload for creating or updating a task. The completion flag may
/// be omitted on the wire; the server defaults it to `false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub name: String,
    #[serde(default)]
    pub is_completed: bool,
}
