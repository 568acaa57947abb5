mod domain;
mod infrastructure;
mod interfaces;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, list_edit, search, use_cases};
pub use infrastructure::{auth, db};
pub use interfaces::{handlers, repositories, routes};

use infrastructure::auth::jwt::JwtService;
use repositories::sqlx_repo::{SqlxProjectRepo, SqlxSettingsRepo, SqlxTestimonialRepo};
use use_cases::auth::AuthHandler;
use use_cases::projects::ProjectHandler;
use use_cases::settings::SettingsHandler;
use use_cases::testimonials::TestimonialHandler;

pub struct AppState {
    pub project_handler: ProjectHandler<SqlxProjectRepo>,
    pub testimonial_handler: TestimonialHandler<SqlxTestimonialRepo>,
    pub settings_handler: SettingsHandler<SqlxSettingsRepo>,
    pub auth_handler: AuthHandler,
    pub db_pool: sqlx::PgPool,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);

        AppState {
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool.clone())),
            testimonial_handler: TestimonialHandler::new(SqlxTestimonialRepo::new(pool.clone())),
            settings_handler: SettingsHandler::new(SqlxSettingsRepo::new(pool.clone())),
            auth_handler: AuthHandler::new(jwt_service, config.admin_password_hash.clone()),
            db_pool: pool,
        }
    }
}
