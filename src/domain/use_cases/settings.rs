use chrono::Utc;
use validator::Validate;

use crate::{
    entities::contact::{
        ContactFormMessage, ContactFormResponse, ContactSettings, NewContactSettingsRequest,
        UpdateContactSettingsRequest,
    },
    entities::profile::{NewProfileRequest, ProfileSettings, UpdateProfileRequest},
    errors::AppError,
    repositories::settings::SettingsRepository,
};

/// Profile and contact settings operations, plus the public contact-form
/// submission path (forwarded to the configured webhook).
pub struct SettingsHandler<R>
where
    R: SettingsRepository,
{
    pub settings_repo: R,
    http_client: reqwest::Client,
}

impl<R> SettingsHandler<R>
where
    R: SettingsRepository,
{
    pub fn new(settings_repo: R) -> Self {
        SettingsHandler {
            settings_repo,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn get_profile(&self) -> Result<Option<ProfileSettings>, AppError> {
        self.settings_repo.get_profile().await
    }

    /// Creates the singleton profile row. A second create is a conflict, not
    /// a second row.
    pub async fn create_profile(
        &self,
        request: NewProfileRequest,
    ) -> Result<ProfileSettings, AppError> {
        request.validate()?;

        if self.settings_repo.get_profile().await?.is_some() {
            return Err(AppError::Conflict("Profile already exists".into()));
        }

        let record = request.into_record(Utc::now());
        self.settings_repo.insert_profile(&record).await
    }

    pub async fn update_profile(
        &self,
        patch: UpdateProfileRequest,
    ) -> Result<ProfileSettings, AppError> {
        patch.validate()?;

        self.settings_repo.update_profile(&patch, Utc::now()).await
    }

    pub async fn get_contact_settings(&self) -> Result<Option<ContactSettings>, AppError> {
        self.settings_repo.get_contact_settings().await
    }

    pub async fn create_contact_settings(
        &self,
        request: NewContactSettingsRequest,
    ) -> Result<ContactSettings, AppError> {
        request.validate()?;

        if self.settings_repo.get_contact_settings().await?.is_some() {
            return Err(AppError::Conflict("Contact settings already exist".into()));
        }

        let record = request.into_record(Utc::now());
        self.settings_repo.insert_contact_settings(&record).await
    }

    pub async fn update_contact_settings(
        &self,
        patch: UpdateContactSettingsRequest,
    ) -> Result<ContactSettings, AppError> {
        patch.validate()?;

        self.settings_repo
            .update_contact_settings(&patch, Utc::now())
            .await
    }

    /// Accepts a visitor message. When a webhook is configured the message is
    /// forwarded as JSON; a forwarding failure surfaces to the caller, there
    /// is no queueing or retry. The auto-reply text is echoed back when
    /// enabled so the page can show it.
    pub async fn submit_contact_form(
        &self,
        message: ContactFormMessage,
    ) -> Result<ContactFormResponse, AppError> {
        message.validate()?;

        let settings = self.settings_repo.get_contact_settings().await?;

        if let Some(webhook) = settings
            .as_ref()
            .and_then(|s| s.contact_form_webhook.as_deref())
        {
            self.http_client
                .post(webhook)
                .json(&message)
                .send()
                .await
                .and_then(|response| response.error_for_status())
                .map_err(|e| {
                    AppError::InternalError(format!("Contact webhook delivery failed: {}", e))
                })?;
        }

        let auto_reply = settings
            .filter(|s| s.auto_reply_enabled)
            .and_then(|s| s.auto_reply_message);

        Ok(ContactFormResponse {
            message: "Your message has been received.".to_string(),
            auto_reply,
        })
    }
}
