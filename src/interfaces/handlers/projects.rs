use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::project::{NewProjectRequest, ToggleFlag, UpdateProjectRequest},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct AdminListQuery {
    /// In-memory substring filter over the fixed search fields.
    pub q: Option<String>,
}

#[instrument(skip(state))]
pub async fn get_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects(false, None).await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_featured_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_featured_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_project_by_id(
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .get_project(&project_id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_claims, state, query))]
pub async fn admin_list_projects(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    query: web::Query<AdminListQuery>,
) -> Result<impl Responder, AppError> {
    let projects = state
        .project_handler
        .list_projects(true, query.q.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(_claims, state))]
pub async fn admin_get_project(
    _claims: AdminClaims,
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .get_project(&project_id, false)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_project(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .create_project(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(project))
}

#[instrument(skip(_claims, state, data))]
pub async fn update_project(
    _claims: AdminClaims,
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
    data: web::Json<UpdateProjectRequest>,
) -> Result<impl Responder, AppError> {
    let project = state
        .project_handler
        .update_project(&project_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(project))
}

#[instrument(skip(_claims, state))]
pub async fn delete_project(
    _claims: AdminClaims,
    project_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.project_handler.delete_project(&project_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(_claims, state))]
pub async fn toggle_project_flag(
    _claims: AdminClaims,
    path: web::Path<(Uuid, ToggleFlag)>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let (project_id, flag) = path.into_inner();

    let project = state.project_handler.toggle_flag(&project_id, flag).await?;
    Ok(HttpResponse::Ok().json(project))
}
