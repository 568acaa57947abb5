use actix_web::web;

use crate::handlers::auth;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::post().to(auth::login));
    cfg.route("/session", web::get().to(auth::session));
}
