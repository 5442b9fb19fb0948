use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// Health check endpoint
///
/// Reports `ok` with the current timestamp once the task store answers a ping.
#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    state.tasks.ping().await?;
    Ok(HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    })))
}
