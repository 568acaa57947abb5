use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::patch_field::PatchField;
use crate::domain::search;

/// A client testimonial. `project_id` is a weak back-reference: no foreign
/// key is enforced, a dangling id simply renders without a project link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub client_name: String,
    pub client_title: String,
    pub client_company: String,
    pub client_image: Option<String>,
    pub testimonial_text: String,
    pub rating: Option<i32>,
    pub project_id: Option<Uuid>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn matches_search(&self, term: &str) -> bool {
        search::matches_any(
            term,
            [
                self.client_name.as_str(),
                self.client_company.as_str(),
                self.testimonial_text.as_str(),
            ],
        )
    }
}

fn default_rating() -> Option<i32> {
    Some(5)
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTestimonialRequest {
    #[validate(length(min = 1, max = 100))]
    pub client_name: String,

    #[serde(default)]
    pub client_title: String,

    #[serde(default)]
    pub client_company: String,

    pub client_image: Option<String>,

    #[validate(length(min = 1, max = 2000))]
    pub testimonial_text: String,

    /// 1-5. Defaults to 5 here in the request layer; the column itself stays
    /// nullable and unconstrained.
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,

    pub project_id: Option<Uuid>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub published: bool,
}

impl NewTestimonialRequest {
    pub fn into_record(self, now: DateTime<Utc>) -> Testimonial {
        Testimonial {
            id: Uuid::new_v4(),
            client_name: self.client_name,
            client_title: self.client_title,
            client_company: self.client_company,
            client_image: self.client_image,
            testimonial_text: self.testimonial_text,
            rating: self.rating,
            project_id: self.project_id,
            featured: self.featured,
            published: self.published,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTestimonialRequest {
    #[validate(length(min = 1, max = 100))]
    pub client_name: Option<String>,

    pub client_title: Option<String>,
    pub client_company: Option<String>,

    #[serde(default)]
    pub client_image: PatchField<String>,

    #[validate(length(min = 1, max = 2000))]
    pub testimonial_text: Option<String>,

    /// Range-checked in the use case; `validator` has no tri-state support.
    #[serde(default)]
    pub rating: PatchField<i32>,

    #[serde(default)]
    pub project_id: PatchField<Uuid>,

    pub featured: Option<bool>,
    pub published: Option<bool>,
}
