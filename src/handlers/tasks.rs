//! Sandbox task store and task endpoint handlers.

use crate::models::{TaskRecord, TaskRequest, TaskStatus};
use actix_web::{HttpResponse, web};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// Polls the sandbox serves before it marks a task completed, so client
/// polling loops have something to iterate on
const POLLS_UNTIL_COMPLETE: u32 = 3;

struct StoredTask {
    record: TaskRecord,
    polls: u32,
}

/// In-memory task store backing the sandbox broker
pub struct SandboxState {
    tasks: Mutex<HashMap<Uuid, StoredTask>>,
}

impl SandboxState {
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for SandboxState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a task in the sandbox store
///
/// Mirrors the production broker's `POST /v1/tasks`: accepts a task request
/// and returns the pending record.
pub async fn create_task(
    state: web::Data<SandboxState>,
    payload: web::Json<TaskRequest>,
) -> HttpResponse {
    let request = payload.into_inner();

    let record = TaskRecord {
        id: Uuid::new_v4(),
        status: TaskStatus::Pending,
        description: request.description,
        reward_sats: request.reward_sats,
        created_at: Utc::now(),
        result: None,
    };

    info!(task_id = %record.id, "sandbox task created");

    let mut tasks = match state.tasks.lock() {
        Ok(tasks) => tasks,
        Err(poisoned) => poisoned.into_inner(),
    };
    tasks.insert(
        record.id,
        StoredTask {
            record: record.clone(),
            polls: 0,
        },
    );

    HttpResponse::Created().json(record)
}

/// Fetch a task from the sandbox store
///
/// Each poll advances the task's mock lifecycle: pending, then in progress,
/// then completed once it has been polled enough times.
pub async fn get_task(state: web::Data<SandboxState>, path: web::Path<Uuid>) -> HttpResponse {
    let task_id = path.into_inner();

    let mut tasks = match state.tasks.lock() {
        Ok(tasks) => tasks,
        Err(poisoned) => poisoned.into_inner(),
    };

    let Some(stored) = tasks.get_mut(&task_id) else {
        return HttpResponse::NotFound().json(serde_json::json!({
            "error": "Not Found",
            "message": "No such task"
        }));
    };

    stored.polls += 1;
    if !stored.record.status.is_terminal() {
        stored.record.status = if stored.polls >= POLLS_UNTIL_COMPLETE {
            stored.record.result = Some("completed in sandbox".to_string());
            TaskStatus::Completed
        } else {
            TaskStatus::InProgress
        };
    }

    HttpResponse::Ok().json(stored.record.clone())
}
