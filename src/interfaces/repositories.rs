pub mod project;
pub mod settings;
pub mod sqlx_repo;
pub mod testimonial;
