use actix_web::{web, HttpResponse, Responder, ResponseError};
use tracing::instrument;

use crate::{entities::token::LoginRequest, use_cases::extractors::AdminClaims, AppState};

#[instrument(skip(state, credentials))]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginRequest>,
) -> impl Responder {
    match state.auth_handler.login(credentials.into_inner()).await {
        Ok(auth_response) => HttpResponse::Ok().json(auth_response),
        Err(e) => {
            tracing::warn!("Admin login failed: {}", e);
            e.error_response()
        }
    }
}

/// Lets the admin UI confirm a stored token is still valid.
#[instrument(skip(claims))]
pub async fn session(claims: AdminClaims) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "subject": claims.0.sub,
        "expires_at": claims.0.exp,
    }))
}
