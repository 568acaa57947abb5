pub mod contact;
pub mod patch_field;
pub mod profile;
pub mod project;
pub mod social_links;
pub mod testimonial;
pub mod token;
