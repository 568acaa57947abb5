mod common;

use common::InMemorySettingsRepo;
use portfolio_cms::entities::contact::{ContactFormMessage, NewContactSettingsRequest, UpdateContactSettingsRequest};
use portfolio_cms::entities::patch_field::PatchField;
use portfolio_cms::entities::profile::{NewProfileRequest, UpdateProfileRequest};
use portfolio_cms::entities::social_links::SocialLinks;
use portfolio_cms::errors::AppError;
use portfolio_cms::use_cases::settings::SettingsHandler;

fn profile_request() -> NewProfileRequest {
    NewProfileRequest {
        name: "Ada".to_string(),
        title: "Product Designer".to_string(),
        bio: "Designing things.".to_string(),
        profile_image: String::new(),
        hero_image: None,
        location: Some("Berlin".to_string()),
        email: "ada@example.com".to_string(),
        phone: None,
        website: None,
        resume: None,
        social_links: SocialLinks::default(),
        skills: vec!["Figma".to_string(), "Figma".to_string(), "UX".to_string()],
        experience: "10 years".to_string(),
        availability: "Open".to_string(),
    }
}

fn contact_request() -> NewContactSettingsRequest {
    NewContactSettingsRequest {
        email: "hello@example.com".to_string(),
        phone: None,
        address: None,
        social_links: SocialLinks::default(),
        contact_form_webhook: None,
        auto_reply_enabled: true,
        auto_reply_message: Some("Thanks, I will get back to you soon.".to_string()),
    }
}

fn handler() -> SettingsHandler<InMemorySettingsRepo> {
    SettingsHandler::new(InMemorySettingsRepo::default())
}

#[tokio::test]
async fn profile_is_absent_until_created() {
    let handler = handler();

    assert!(handler.get_profile().await.unwrap().is_none());

    let created = handler.create_profile(profile_request()).await.unwrap();
    assert_eq!(created.created_at, created.updated_at);
    // Skills chips go through the same duplicate-free add rule as tags.
    assert_eq!(created.skills, vec!["Figma".to_string(), "UX".to_string()]);

    let fetched = handler.get_profile().await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn second_profile_create_is_a_conflict() {
    let handler = handler();
    handler.create_profile(profile_request()).await.unwrap();

    let result = handler.create_profile(profile_request()).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn profile_update_merges_and_clears_nullable_fields() {
    let handler = handler();
    let created = handler.create_profile(profile_request()).await.unwrap();

    let patch = UpdateProfileRequest {
        title: Some("Design Lead".to_string()),
        location: PatchField::Null,
        ..Default::default()
    };
    let updated = handler.update_profile(patch).await.unwrap();

    assert_eq!(updated.title, "Design Lead");
    assert_eq!(updated.name, created.name);
    assert!(updated.location.is_none());
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn profile_update_without_row_is_not_found() {
    let handler = handler();

    let patch = UpdateProfileRequest {
        title: Some("Design Lead".to_string()),
        ..Default::default()
    };
    let result = handler.update_profile(patch).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn contact_settings_roundtrip_and_webhook_patch() {
    let handler = handler();
    let created = handler
        .create_contact_settings(contact_request())
        .await
        .unwrap();
    assert!(created.contact_form_webhook.is_none());

    let patch = UpdateContactSettingsRequest {
        contact_form_webhook: PatchField::Value("https://hooks.example.com/contact".to_string()),
        ..Default::default()
    };
    let updated = handler.update_contact_settings(patch).await.unwrap();
    assert_eq!(
        updated.contact_form_webhook.as_deref(),
        Some("https://hooks.example.com/contact")
    );

    let cleared = handler
        .update_contact_settings(UpdateContactSettingsRequest {
            contact_form_webhook: PatchField::Null,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(cleared.contact_form_webhook.is_none());
}

#[tokio::test]
async fn contact_form_returns_auto_reply_when_enabled() {
    let handler = handler();
    handler
        .create_contact_settings(contact_request())
        .await
        .unwrap();

    let response = handler
        .submit_contact_form(ContactFormMessage {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: None,
            message: "I would like to work with you.".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(
        response.auto_reply.as_deref(),
        Some("Thanks, I will get back to you soon.")
    );
}

#[tokio::test]
async fn contact_form_without_settings_still_accepts_message() {
    let handler = handler();

    let response = handler
        .submit_contact_form(ContactFormMessage {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: Some("Hello".to_string()),
            message: "No settings configured yet.".to_string(),
        })
        .await
        .unwrap();

    assert!(response.auto_reply.is_none());
}

#[tokio::test]
async fn contact_form_rejects_invalid_email() {
    let handler = handler();

    let result = handler
        .submit_contact_form(ContactFormMessage {
            name: "Visitor".to_string(),
            email: "not-an-email".to_string(),
            subject: None,
            message: "Hello there".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
