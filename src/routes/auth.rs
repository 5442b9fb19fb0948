use crate::{
    auth::{LoginRequest, RegisterRequest, TokenResponse},
    error::AppError,
    models::user::PublicUser,
    state::AppState,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Stores the username with a salted hash of the password and returns `{id, username}`.
/// A taken username answers 400, the same as missing fields.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;
    let RegisterRequest { username, password } = register_data.into_inner();

    let hasher = state.hasher;
    let password_hash = web::block(move || hasher.hash(&password)).await??;

    let user = state.users.create_user(&username, &password_hash).await?;
    log::info!("Registered user {} (id {})", user.username, user.id);

    Ok(HttpResponse::Created().json(PublicUser::from(user)))
}

/// Login user
///
/// Exchanges a username and password for a signed, expiring token.
/// An unknown username and a wrong password are indistinguishable to the caller.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;
    let LoginRequest { username, password } = login_data.into_inner();

    let hasher = state.hasher;
    let user = match state.users.find_by_username(&username).await? {
        Some(user) => user,
        None => {
            // Unknown accounts pay the same bcrypt cost as a wrong password.
            web::block(move || hasher.verify_absent(&password)).await?;
            log::debug!("Login failed: unknown username");
            return Err(invalid_credentials());
        }
    };

    let stored_hash = user.password_hash.clone();
    let matches = web::block(move || hasher.verify(&password, &stored_hash)).await?;
    if !matches {
        log::debug!("Login failed: wrong password for user id {}", user.id);
        return Err(invalid_credentials());
    }

    let token = state
        .tokens
        .issue(user.id, &user.username, state.tokens.ttl())?;
    log::info!("User {} logged in", user.id);

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials".into())
}
