use actix_web::web;

use crate::handlers::{projects, settings, testimonials};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(projects::get_projects))
            .route("/featured", web::get().to(projects::get_featured_projects))
            .route("/{id}", web::get().to(projects::get_project_by_id)),
    );

    cfg.service(
        web::scope("/testimonials")
            .route("", web::get().to(testimonials::get_testimonials))
            .route(
                "/featured",
                web::get().to(testimonials::get_featured_testimonials),
            ),
    );

    cfg.route("/profile", web::get().to(settings::get_profile));
    cfg.route(
        "/contact-settings",
        web::get().to(settings::get_contact_settings),
    );
    cfg.route(
        "/contact/messages",
        web::post().to(settings::submit_contact_form),
    );
}
