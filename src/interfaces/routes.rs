use actix_web::web;

use crate::handlers::home::{home, not_found};
use crate::handlers::json_error;

mod admin;
mod auth;
mod public;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(web::scope("/auth").configure(auth::config_routes));
    cfg.service(web::scope("/api").configure(public::config_routes));
    cfg.service(web::scope("/admin").configure(admin::config_routes));

    cfg.configure(json_error::config_routes);
    cfg.default_service(web::route().to(not_found));
}
