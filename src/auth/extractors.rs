use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;

/// The verified identity of the caller.
///
/// Produced by the authorization gate from a valid token and handed to handlers by value.
/// Handlers take it as an argument; there is no other way to learn who is calling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub username: String,
}

impl FromRequest for Identity {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Identity>().cloned() {
            Some(identity) => ready(Ok(identity)),
            None => {
                // Only reachable if a handler is mounted outside the gate.
                log::error!("Identity requested on unguarded path {}", req.path());
                ready(Err(AppError::Unauthorized("Missing token".into()).into()))
            }
        }
    }
}
