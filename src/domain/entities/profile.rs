use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::patch_field::PatchField;
use crate::domain::entities::social_links::SocialLinks;
use crate::domain::list_edit;

/// Site-owner profile. Singleton record: at most one row is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfileSettings {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub profile_image: String,
    pub hero_image: Option<String>,
    pub location: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub resume: Option<String>,
    pub social_links: Json<SocialLinks>,
    pub skills: Vec<String>,
    pub experience: String,
    pub availability: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 5000))]
    pub bio: String,

    #[serde(default)]
    pub profile_image: String,

    pub hero_image: Option<String>,
    pub location: Option<String>,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(url)]
    pub website: Option<String>,

    pub resume: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub social_links: SocialLinks,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub experience: String,

    #[serde(default)]
    pub availability: String,
}

impl NewProfileRequest {
    pub fn into_record(self, now: DateTime<Utc>) -> ProfileSettings {
        ProfileSettings {
            id: Uuid::new_v4(),
            name: self.name,
            title: self.title,
            bio: self.bio,
            profile_image: self.profile_image,
            hero_image: self.hero_image,
            location: self.location,
            email: self.email,
            phone: self.phone,
            website: self.website,
            resume: self.resume,
            social_links: Json(self.social_links),
            skills: list_edit::normalize_unique(self.skills),
            experience: self.experience,
            availability: self.availability,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub bio: Option<String>,

    pub profile_image: Option<String>,

    #[serde(default)]
    pub hero_image: PatchField<String>,

    #[serde(default)]
    pub location: PatchField<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: PatchField<String>,

    #[serde(default)]
    pub website: PatchField<String>,

    #[serde(default)]
    pub resume: PatchField<String>,

    #[validate(nested)]
    pub social_links: Option<SocialLinks>,

    pub skills: Option<Vec<String>>,
    pub experience: Option<String>,
    pub availability: Option<String>,
}
