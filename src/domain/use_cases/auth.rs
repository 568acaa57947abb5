use crate::{
    auth::password::verify_password,
    entities::token::{AuthResponse, LoginRequest},
    errors::AuthError,
    infrastructure::auth::jwt::JwtService,
};

/// Single-operator login: one configured argon2 credential, a short-lived
/// token on success. No accounts, no refresh tokens, no sessions to revoke.
pub struct AuthHandler {
    pub token_service: JwtService,
    admin_password_hash: String,
}

impl AuthHandler {
    pub fn new(token_service: JwtService, admin_password_hash: String) -> Self {
        AuthHandler {
            token_service,
            admin_password_hash,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        if !verify_password(&request.password, &self.admin_password_hash)? {
            return Err(AuthError::WrongCredentials);
        }

        let access_token = self.token_service.create_admin_jwt()?;

        Ok(AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in_minutes: self.token_service.expiration_minutes(),
        })
    }
}
