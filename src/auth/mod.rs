pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use extractors::Identity;
pub use middleware::AuthMiddleware;
pub use password::PasswordHasher;
pub use token::{Claims, TokenError, TokenService};

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(custom = "crate::models::not_blank")]
    pub username: String,
    #[serde(default)]
    #[validate(custom = "crate::models::not_blank")]
    pub password: String,
}

/// Represents the payload for a new user registration request.
///
/// Only presence is checked; any non-blank username and password are accepted.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom = "crate::models::not_blank")]
    pub username: String,
    #[serde(default)]
    #[validate(custom = "crate::models::not_blank")]
    pub password: String,
}

/// Response body of a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
