use portfolio_cms::auth::jwt::{JwtService, ADMIN_SUBJECT};
use portfolio_cms::auth::password::{hash_password, verify_password};
use portfolio_cms::entities::token::LoginRequest;
use portfolio_cms::errors::AuthError;
use portfolio_cms::settings::{AppConfig, AppEnvironment};
use portfolio_cms::use_cases::auth::AuthHandler;

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio CMS Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "postgres://localhost:5432/portfolio_test".to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".to_string(),
        jwt_expiration_minutes: 15,
        admin_password_hash: String::new(),
    }
}

fn auth_handler(password: &str) -> AuthHandler {
    let config = test_config();
    let hash = hash_password(password).expect("hashing should succeed");
    AuthHandler::new(JwtService::new(&config), hash)
}

#[tokio::test]
async fn login_with_correct_password_issues_decodable_token() {
    let handler = auth_handler("correct horse battery staple");

    let response = handler
        .login(LoginRequest {
            password: "correct horse battery staple".to_string(),
        })
        .await
        .expect("login should succeed");

    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.expires_in_minutes, 15);

    let decoded = JwtService::new(&test_config())
        .decode_jwt(&response.access_token)
        .expect("issued token should decode");
    assert_eq!(decoded.claims.sub, ADMIN_SUBJECT);
    assert!(decoded.claims.exp > decoded.claims.iat);
}

#[tokio::test]
async fn login_with_wrong_password_issues_no_token() {
    let handler = auth_handler("correct horse battery staple");

    let result = handler
        .login(LoginRequest {
            password: "hunter2".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[tokio::test]
async fn malformed_configured_hash_is_a_server_fault_not_wrong_credentials() {
    let config = test_config();
    let handler = AuthHandler::new(JwtService::new(&config), "not-a-phc-string".to_string());

    let result = handler
        .login(LoginRequest {
            password: "anything".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::BadPasswordHash)));
}

#[test]
fn tampered_token_is_rejected() {
    let service = JwtService::new(&test_config());
    let token = service.create_admin_jwt().unwrap();

    let mut tampered = token.clone();
    tampered.push('x');

    assert!(matches!(
        service.decode_jwt(&tampered),
        Err(AuthError::InvalidToken)
    ));
}

#[test]
fn token_from_other_secret_is_rejected() {
    let service = JwtService::new(&test_config());

    let mut other_config = test_config();
    other_config.jwt_secret =
        "another_secret_that_is_also_long_enough_0987654321".to_string();
    let other = JwtService::new(&other_config);

    let token = other.create_admin_jwt().unwrap();
    assert!(service.decode_jwt(&token).is_err());
}

#[test]
fn password_verify_distinguishes_candidates() {
    let hash = hash_password("s3cret-Adm1n").unwrap();

    assert!(verify_password("s3cret-Adm1n", &hash).unwrap());
    assert!(!verify_password("s3cret-adm1n", &hash).unwrap());
}
