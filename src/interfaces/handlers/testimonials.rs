use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::project::ToggleFlag,
    entities::testimonial::{NewTestimonialRequest, UpdateTestimonialRequest},
    errors::AppError,
    handlers::projects::AdminListQuery,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_testimonials(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let testimonials = state
        .testimonial_handler
        .list_testimonials(false, None)
        .await?;

    Ok(HttpResponse::Ok().json(testimonials))
}

#[instrument(skip(state))]
pub async fn get_featured_testimonials(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let testimonials = state.testimonial_handler.list_featured_testimonials().await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

#[instrument(skip(_claims, state, query))]
pub async fn admin_list_testimonials(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    query: web::Query<AdminListQuery>,
) -> Result<impl Responder, AppError> {
    let testimonials = state
        .testimonial_handler
        .list_testimonials(true, query.q.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(testimonials))
}

#[instrument(skip(_claims, state))]
pub async fn admin_get_testimonial(
    _claims: AdminClaims,
    testimonial_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let testimonial = state
        .testimonial_handler
        .get_testimonial(&testimonial_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Testimonial not found".into()))?;

    Ok(HttpResponse::Ok().json(testimonial))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_testimonial(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewTestimonialRequest>,
) -> Result<impl Responder, AppError> {
    let testimonial = state
        .testimonial_handler
        .create_testimonial(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(testimonial))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_testimonial(
    _claims: AdminClaims,
    testimonial_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<UpdateTestimonialRequest>,
) -> Result<impl Responder, AppError> {
    let testimonial = state
        .testimonial_handler
        .update_testimonial(&testimonial_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(testimonial))
}

#[instrument(skip(_claims, state))]
pub async fn delete_testimonial(
    _claims: AdminClaims,
    testimonial_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .testimonial_handler
        .delete_testimonial(&testimonial_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, state))]
pub async fn toggle_testimonial_flag(
    _claims: AdminClaims,
    path: web::Path<(Uuid, ToggleFlag)>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (testimonial_id, flag) = path.into_inner();

    let testimonial = state
        .testimonial_handler
        .toggle_flag(&testimonial_id, flag)
        .await?;

    Ok(HttpResponse::Ok().json(testimonial))
}
