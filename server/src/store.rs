//! In-memory task collection shared between request handlers.
//!
//! # Design
//! The store is an explicit value handed to the router through axum state
//! rather than a process-global static, so a persistence layer could be
//! substituted at this boundary without touching the handlers. A `Vec` keeps
//! list order equal to insertion order. Concurrent writes to the same id are
//! last-write-wins under the `RwLock`; the API makes no isolation guarantee.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Internal task record. Ids are generated by the store on insert and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: Uuid,
    pub name: String,
    pub completed: bool,
}

/// Handle to the shared in-memory task collection. Cheap to clone; all
/// clones see the same data. Nothing survives a process restart.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Arc<RwLock<Vec<TaskRecord>>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all tasks in insertion order.
    pub async fn list(&self) -> Vec<TaskRecord> {
        self.tasks.read().await.clone()
    }

    /// Append a new task with a freshly generated id and return it.
    pub async fn insert(&self, name: String, completed: bool) -> TaskRecord {
        let record = TaskRecord {
            id: Uuid::new_v4(),
            name,
            completed,
        };
        self.tasks.write().await.push(record.clone());
        record
    }

    /// Overwrite name and completion flag of the task with `id`, in place.
    /// Returns `None` when no task has that id.
    pub async fn update(&self, id: Uuid, name: String, completed: bool) -> Option<TaskRecord> {
        let mut tasks = self.tasks.write().await;
        let record = tasks.iter_mut().find(|t| t.id == id)?;
        record.name = name;
        record.completed = completed;
        Some(record.clone())
    }

    /// Remove the task with `id` and return it, or `None` when absent.
    pub async fn remove(&self, id: Uuid) -> Option<TaskRecord> {
        let mut tasks = self.tasks.write().await;
        let position = tasks.iter().position(|t| t.id == id)?;
        Some(tasks.remove(position))
    }
}
