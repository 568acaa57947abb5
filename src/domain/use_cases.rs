pub mod auth;
pub mod extractors;
pub mod projects;
pub mod settings;
pub mod testimonials;
