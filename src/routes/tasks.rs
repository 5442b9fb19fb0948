use crate::{
    auth::Identity,
    error::AppError,
    models::{TaskInput, TaskUpdateInput},
    state::AppState,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Retrieves the tasks owned by the authenticated user, ascending by id.
///
/// ## Responses:
/// - `200 OK`: JSON array of tasks; empty if the caller owns none.
/// - `401 Unauthorized`: missing or invalid token.
#[get("")]
pub async fn get_tasks(
    state: web::Data<AppState>,
    identity: Identity,
) -> Result<impl Responder, AppError> {
    let tasks = state.tasks.list_tasks(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task for the authenticated user.
///
/// The owner is always the caller, whatever the body says. New tasks are incomplete.
///
/// ## Responses:
/// - `201 Created`: the created task.
/// - `400 Bad Request`: missing or blank `title`.
/// - `401 Unauthorized`: missing or invalid token.
#[post("")]
pub async fn create_task(
    state: web::Data<AppState>,
    identity: Identity,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = state
        .tasks
        .create_task(identity.user_id, task_data.into_inner().into())
        .await?;
    log::debug!("User {} created task {}", identity.user_id, task.id);

    Ok(HttpResponse::Created().json(task))
}

/// Retrieves one task owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: the task.
/// - `404 Not Found`: no such task, or it belongs to someone else.
#[get("/{id}")]
pub async fn get_task(
    state: web::Data<AppState>,
    identity: Identity,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task = state
        .tasks
        .find_task(identity.user_id, task_id.into_inner())
        .await?
        .ok_or_else(task_not_found)?;
    Ok(HttpResponse::Ok().json(task))
}

/// Updates a task owned by the authenticated user.
///
/// `title` is required; `description` replaces the stored one (absent clears it);
/// `isComplete` is only changed when present.
///
/// ## Responses:
/// - `200 OK`: the updated task.
/// - `400 Bad Request`: missing or blank `title`.
/// - `404 Not Found`: no such task, or it belongs to someone else.
#[put("/{id}")]
pub async fn update_task(
    state: web::Data<AppState>,
    identity: Identity,
    task_id: web::Path<i32>,
    task_data: web::Json<TaskUpdateInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let task_id = task_id.into_inner();

    // Ownership check first; the update itself is owner-filtered as well, so a task
    // deleted in between still ends up as 404.
    state
        .tasks
        .find_task(identity.user_id, task_id)
        .await?
        .ok_or_else(task_not_found)?;

    let updated = state
        .tasks
        .update_task(identity.user_id, task_id, task_data.into_inner().into())
        .await?
        .ok_or_else(task_not_found)?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Deletes a task owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: `{"message": "Task deleted successfully"}`.
/// - `404 Not Found`: no such task, or it belongs to someone else.
#[delete("/{id}")]
pub async fn delete_task(
    state: web::Data<AppState>,
    identity: Identity,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task_id = task_id.into_inner();

    state
        .tasks
        .find_task(identity.user_id, task_id)
        .await?
        .ok_or_else(task_not_found)?;

    if !state.tasks.delete_task(identity.user_id, task_id).await? {
        return Err(task_not_found());
    }
    log::debug!("User {} deleted task {}", identity.user_id, task_id);

    Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted successfully" })))
}

fn task_not_found() -> AppError {
    AppError::NotFound("Task not found".into())
}
