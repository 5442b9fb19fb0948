pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::{error, web, HttpRequest};

use crate::auth::AuthMiddleware;
use crate::error::AppError;
use crate::state::AppState;

/// Registers the shared state and mounts every route.
///
/// `/auth` and `/health` are public; `/tasks` sits behind the authorization gate.
pub fn config(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let tokens = state.tokens.clone();
        cfg.app_data(web::Data::new(state))
            .app_data(json_config())
            .app_data(path_config())
            .service(health::health)
            .service(
                web::scope("/auth")
                    .service(auth::register)
                    .service(auth::login),
            )
            .service(
                web::scope("/tasks")
                    .wrap(AuthMiddleware::new(tokens))
                    .service(tasks::get_tasks)
                    .service(tasks::create_task)
                    .service(tasks::get_task)
                    .service(tasks::update_task)
                    .service(tasks::delete_task),
            );
    }
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::BadRequest(format!("Invalid JSON body: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        // A non-numeric id names no task; answer like any other unknown id.
        log::debug!("Unparseable path segment: {}", err);
        AppError::NotFound("Task not found".into()).into()
    })
}
