use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact::{ContactFormMessage, NewContactSettingsRequest, UpdateContactSettingsRequest},
    entities::profile::{NewProfileRequest, UpdateProfileRequest},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_profile(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let profile = state
        .settings_handler
        .get_profile()
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".into()))?;

    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(_claims, state))]
pub async fn admin_get_profile(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    // 404 here means "not created yet"; the admin client offers the create
    // form instead of the edit form.
    let profile = state
        .settings_handler
        .get_profile()
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".into()))?;

    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_profile(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .settings_handler
        .create_profile(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(profile))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_profile(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<UpdateProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .settings_handler
        .update_profile(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(state))]
pub async fn get_contact_settings(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let settings = state
        .settings_handler
        .get_contact_settings()
        .await?
        .ok_or_else(|| AppError::NotFound("Contact settings not found".into()))?;

    Ok(HttpResponse::Ok().json(settings))
}

#[instrument(skip(_claims, state))]
pub async fn admin_get_contact_settings(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let settings = state
        .settings_handler
        .get_contact_settings()
        .await?
        .ok_or_else(|| AppError::NotFound("Contact settings not found".into()))?;

    Ok(HttpResponse::Ok().json(settings))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_contact_settings(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewContactSettingsRequest>,
) -> Result<impl Responder, AppError> {
    let settings = state
        .settings_handler
        .create_contact_settings(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(settings))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_contact_settings(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<UpdateContactSettingsRequest>,
) -> Result<impl Responder, AppError> {
    let settings = state
        .settings_handler
        .update_contact_settings(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(settings))
}

#[instrument(skip(state, form))]
pub async fn submit_contact_form(
    state: web::Data<AppState>,
    form: web::Json<ContactFormMessage>,
) -> Result<impl Responder, AppError> {
    let response = state
        .settings_handler
        .submit_contact_form(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}
