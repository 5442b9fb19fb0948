//! Shared setup for the HTTP-level tests.
//!
//! Apps are assembled the same way `main.rs` does it, but over a `MemoryStore`
//! and with the cheapest bcrypt cost so the suite stays fast.
#![allow(dead_code)]

use std::sync::Arc;

use actix_cors::Cors;
use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::middleware::Logger;
use actix_web::{test, App};
use chrono::Duration;
use serde_json::{json, Value};

use taskpad::auth::{PasswordHasher, TokenService};
use taskpad::routes;
use taskpad::state::AppState;
use taskpad::store::MemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_state() -> AppState {
    let store = Arc::new(MemoryStore::new());
    AppState::new(
        store.clone(),
        store,
        TokenService::new(TEST_SECRET, Duration::hours(1)),
        PasswordHasher::new(TEST_BCRYPT_COST),
    )
}

pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config(state)),
    )
    .await
}

/// Sends a request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send<S, B>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!("non-JSON body: {:?}", String::from_utf8_lossy(&body))
        })
    };
    (status, json)
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub async fn register<S, B>(app: &S, username: &str, password: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    send(app, req).await
}

pub async fn login<S, B>(app: &S, username: &str, password: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    send(app, req).await
}

/// A registered, logged-in user.
pub struct TestUser {
    pub id: i64,
    pub token: String,
}

pub async fn register_and_login<S, B>(app: &S, username: &str, password: &str) -> TestUser
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = register(app, username, password).await;
    assert_eq!(status, StatusCode::CREATED, "register {}: {}", username, body);
    let id = body["id"].as_i64().expect("registration returns an id");

    let (status, body) = login(app, username, password).await;
    assert_eq!(status, StatusCode::OK, "login {}: {}", username, body);
    let token = body["token"]
        .as_str()
        .expect("login returns a token")
        .to_string();

    TestUser { id, token }
}

pub async fn create_task<S, B>(app: &S, token: &str, payload: Value) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/tasks")
        .insert_header(bearer(token))
        .set_json(payload)
        .to_request();
    send(app, req).await
}

pub async fn list_tasks<S, B>(app: &S, token: &str) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get()
        .uri("/tasks")
        .insert_header(bearer(token))
        .to_request();
    send(app, req).await
}
