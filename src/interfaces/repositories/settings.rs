use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;

use crate::{
    entities::contact::{ContactSettings, UpdateContactSettingsRequest},
    entities::profile::{ProfileSettings, UpdateProfileRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxSettingsRepo,
};

/// Profile and contact settings are singleton records: fetched without a
/// filter and updated without an id, mirroring the single-row expectation of
/// the original store.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get_profile(&self) -> Result<Option<ProfileSettings>, AppError>;
    async fn insert_profile(&self, profile: &ProfileSettings) -> Result<ProfileSettings, AppError>;
    async fn update_profile(
        &self,
        patch: &UpdateProfileRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<ProfileSettings, AppError>;

    async fn get_contact_settings(&self) -> Result<Option<ContactSettings>, AppError>;
    async fn insert_contact_settings(
        &self,
        settings: &ContactSettings,
    ) -> Result<ContactSettings, AppError>;
    async fn update_contact_settings(
        &self,
        patch: &UpdateContactSettingsRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<ContactSettings, AppError>;
}

impl SqlxSettingsRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSettingsRepo { pool }
    }
}

#[async_trait]
impl SettingsRepository for SqlxSettingsRepo {
    async fn get_profile(&self) -> Result<Option<ProfileSettings>, AppError> {
        let profile = sqlx::query_as::<_, ProfileSettings>(r#"SELECT * FROM profile_settings"#)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    async fn insert_profile(&self, profile: &ProfileSettings) -> Result<ProfileSettings, AppError> {
        let stored = sqlx::query_as::<_, ProfileSettings>(
            r#"
            INSERT INTO profile_settings (
                id, name, title, bio, profile_image, hero_image, location,
                email, phone, website, resume, social_links, skills,
                experience, availability, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(&profile.title)
        .bind(&profile.bio)
        .bind(&profile.profile_image)
        .bind(&profile.hero_image)
        .bind(&profile.location)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.website)
        .bind(&profile.resume)
        .bind(&profile.social_links)
        .bind(&profile.skills)
        .bind(&profile.experience)
        .bind(&profile.availability)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn update_profile(
        &self,
        patch: &UpdateProfileRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<ProfileSettings, AppError> {
        let updated = sqlx::query_as::<_, ProfileSettings>(
            r#"
            UPDATE profile_settings SET
                name          = COALESCE($1, name),
                title         = COALESCE($2, title),
                bio           = COALESCE($3, bio),
                profile_image = COALESCE($4, profile_image),
                hero_image    = CASE WHEN $5 THEN $6 ELSE hero_image END,
                location      = CASE WHEN $7 THEN $8 ELSE location END,
                email         = COALESCE($9, email),
                phone         = CASE WHEN $10 THEN $11 ELSE phone END,
                website       = CASE WHEN $12 THEN $13 ELSE website END,
                resume        = CASE WHEN $14 THEN $15 ELSE resume END,
                social_links  = COALESCE($16, social_links),
                skills        = COALESCE($17, skills),
                experience    = COALESCE($18, experience),
                availability  = COALESCE($19, availability),
                updated_at    = $20
            RETURNING *
            "#,
        )
        .bind(&patch.name)
        .bind(&patch.title)
        .bind(&patch.bio)
        .bind(&patch.profile_image)
        .bind(patch.hero_image.is_set())
        .bind(patch.hero_image.write_str())
        .bind(patch.location.is_set())
        .bind(patch.location.write_str())
        .bind(&patch.email)
        .bind(patch.phone.is_set())
        .bind(patch.phone.write_str())
        .bind(patch.website.is_set())
        .bind(patch.website.write_str())
        .bind(patch.resume.is_set())
        .bind(patch.resume.write_str())
        .bind(patch.social_links.clone().map(Json))
        .bind(&patch.skills)
        .bind(&patch.experience)
        .bind(&patch.availability)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".into()))?;

        Ok(updated)
    }

    async fn get_contact_settings(&self) -> Result<Option<ContactSettings>, AppError> {
        let settings = sqlx::query_as::<_, ContactSettings>(r#"SELECT * FROM contact_settings"#)
            .fetch_optional(&self.pool)
            .await?;

        Ok(settings)
    }

    async fn insert_contact_settings(
        &self,
        settings: &ContactSettings,
    ) -> Result<ContactSettings, AppError> {
        let stored = sqlx::query_as::<_, ContactSettings>(
            r#"
            INSERT INTO contact_settings (
                id, email, phone, address, social_links, contact_form_webhook,
                auto_reply_enabled, auto_reply_message, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(settings.id)
        .bind(&settings.email)
        .bind(&settings.phone)
        .bind(&settings.address)
        .bind(&settings.social_links)
        .bind(&settings.contact_form_webhook)
        .bind(settings.auto_reply_enabled)
        .bind(&settings.auto_reply_message)
        .bind(settings.created_at)
        .bind(settings.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn update_contact_settings(
        &self,
        patch: &UpdateContactSettingsRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<ContactSettings, AppError> {
        let updated = sqlx::query_as::<_, ContactSettings>(
            r#"
            UPDATE contact_settings SET
                email                = COALESCE($1, email),
                phone                = CASE WHEN $2 THEN $3 ELSE phone END,
                address              = CASE WHEN $4 THEN $5 ELSE address END,
                social_links         = COALESCE($6, social_links),
                contact_form_webhook = CASE WHEN $7 THEN $8 ELSE contact_form_webhook END,
                auto_reply_enabled   = COALESCE($9, auto_reply_enabled),
                auto_reply_message   = CASE WHEN $10 THEN $11 ELSE auto_reply_message END,
                updated_at           = $12
            RETURNING *
            "#,
        )
        .bind(&patch.email)
        .bind(patch.phone.is_set())
        .bind(patch.phone.write_str())
        .bind(patch.address.is_set())
        .bind(patch.address.write_str())
        .bind(patch.social_links.clone().map(Json))
        .bind(patch.contact_form_webhook.is_set())
        .bind(patch.contact_form_webhook.write_str())
        .bind(patch.auto_reply_enabled)
        .bind(patch.auto_reply_message.is_set())
        .bind(patch.auto_reply_message.write_str())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact settings not found".into()))?;

        Ok(updated)
    }
}
