use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::patch_field::PatchField;
use crate::domain::entities::social_links::SocialLinks;

/// Contact page settings. Singleton record, same shape of social links as the
/// profile. The webhook receives contact-form submissions when configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactSettings {
    pub id: Uuid,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub social_links: Json<SocialLinks>,
    pub contact_form_webhook: Option<String>,
    pub auto_reply_enabled: bool,
    pub auto_reply_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewContactSettingsRequest {
    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,
    pub address: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub social_links: SocialLinks,

    #[validate(url)]
    pub contact_form_webhook: Option<String>,

    #[serde(default)]
    pub auto_reply_enabled: bool,

    #[validate(length(max = 2000))]
    pub auto_reply_message: Option<String>,
}

impl NewContactSettingsRequest {
    pub fn into_record(self, now: DateTime<Utc>) -> ContactSettings {
        ContactSettings {
            id: Uuid::new_v4(),
            email: self.email,
            phone: self.phone,
            address: self.address,
            social_links: Json(self.social_links),
            contact_form_webhook: self.contact_form_webhook,
            auto_reply_enabled: self.auto_reply_enabled,
            auto_reply_message: self.auto_reply_message,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateContactSettingsRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: PatchField<String>,

    #[serde(default)]
    pub address: PatchField<String>,

    #[validate(nested)]
    pub social_links: Option<SocialLinks>,

    #[serde(default)]
    pub contact_form_webhook: PatchField<String>,

    pub auto_reply_enabled: Option<bool>,

    #[serde(default)]
    pub auto_reply_message: PatchField<String>,
}

/// A visitor submission from the public contact form. Not persisted here:
/// forwarded to the configured webhook, if any.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactFormMessage {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 200))]
    pub subject: Option<String>,

    #[validate(length(min = 5, max = 2000))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactFormResponse {
    pub message: String,
    pub auto_reply: Option<String>,
}
