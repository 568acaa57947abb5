use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{entities::token::Claims, errors::AuthError, AppState};

/// Extractor gating the admin routes: requires a valid, unexpired admin
/// bearer token. Returns 401 otherwise.
///
/// Usage: add `_claims: AdminClaims` as a handler parameter.
#[derive(Debug)]
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(admin_claims_from_request(req).map(AdminClaims).map_err(Into::into))
    }
}

fn admin_claims_from_request(req: &HttpRequest) -> Result<Claims, AuthError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or(AuthError::MissingCredentials)?;

    let token = extract_bearer_token(req).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        AuthError::MissingCredentials
    })?;

    let decoded = state.auth_handler.token_service.decode_jwt(&token)?;
    Ok(decoded.claims)
}

fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}
