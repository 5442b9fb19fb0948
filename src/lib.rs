#![doc = "The `taskpad` library crate."]
#![doc = ""]
#![doc = "A task-management REST backend: registration and login issue signed, expiring"]
#![doc = "tokens; every task operation is gated on a valid token and scoped to the caller."]
#![doc = "The binary (`main.rs`) loads configuration, connects the store and serves `routes::config`."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use crate::error::AppError;
pub use crate::state::AppState;
