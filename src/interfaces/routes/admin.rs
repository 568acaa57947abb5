use actix_web::web;

use crate::handlers::{projects, settings, system, testimonials};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(system::admin_health_check));

    cfg.service(
        web::scope("/projects")
            .route("", web::get().to(projects::admin_list_projects))
            .route("", web::post().to(projects::create_project))
            .route("/{id}", web::get().to(projects::admin_get_project))
            .route("/{id}", web::put().to(projects::update_project))
            .route("/{id}", web::delete().to(projects::delete_project))
            .route(
                "/{id}/toggle/{flag}",
                web::post().to(projects::toggle_project_flag),
            ),
    );

    cfg.service(
        web::scope("/testimonials")
            .route("", web::get().to(testimonials::admin_list_testimonials))
            .route("", web::post().to(testimonials::create_testimonial))
            .route("/{id}", web::get().to(testimonials::admin_get_testimonial))
            .route("/{id}", web::put().to(testimonials::update_testimonial))
            .route("/{id}", web::delete().to(testimonials::delete_testimonial))
            .route(
                "/{id}/toggle/{flag}",
                web::post().to(testimonials::toggle_testimonial_flag),
            ),
    );

    cfg.service(
        web::scope("/profile")
            .route("", web::get().to(settings::admin_get_profile))
            .route("", web::post().to(settings::create_profile))
            .route("", web::put().to(settings::update_profile)),
    );

    cfg.service(
        web::scope("/contact-settings")
            .route("", web::get().to(settings::admin_get_contact_settings))
            .route("", web::post().to(settings::create_contact_settings))
            .route("", web::put().to(settings::update_contact_settings)),
    );
}
