//! The authorization gate.
//!
//! Wraps every protected scope. A request only reaches the inner service if it carries
//! `Authorization: Bearer <token>` with a token that verifies; the verified [`Identity`]
//! is then placed in the request extensions for the [`Identity`] extractor to hand out.
//! Anything else is answered with 401 without calling the inner service.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::extractors::Identity;
use crate::auth::token::TokenService;
use crate::error::AppError;

pub struct AuthMiddleware {
    tokens: TokenService,
}

impl AuthMiddleware {
    pub fn new(tokens: TokenService) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            tokens: self.tokens.clone(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    tokens: TokenService,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = match bearer_token(&req) {
            Some(token) => token,
            None => {
                log::debug!("Rejected {} {}: missing bearer token", req.method(), req.path());
                return reject(req, AppError::Unauthorized("Missing token".into()));
            }
        };

        match self.tokens.verify(&token) {
            Ok(identity) => {
                req.extensions_mut().insert::<Identity>(identity);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(reason) => {
                log::debug!("Rejected {} {}: {}", req.method(), req.path(), reason);
                reject(req, reason.into())
            }
        }
    }
}

/// Answers the request directly; the inner service is never called.
fn reject<B: 'static>(
    req: ServiceRequest,
    app_err: AppError,
) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
    let response = app_err.error_response().map_into_right_body();
    let (req, _payload) = req.into_parts();
    Box::pin(async move { Ok(ServiceResponse::new(req, response)) })
}

/// Pulls the token out of `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively; a missing or empty token yields `None`.
fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
