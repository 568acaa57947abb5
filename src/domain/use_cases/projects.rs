use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::search,
    entities::project::{NewProjectRequest, Project, ToggleFlag, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
};

/// Stateless façade over the project table: one backend round trip per
/// operation, no retries, failures propagate on first occurrence.
pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects newest-first. The optional `search` term is applied in
    /// memory over the fetched list (title, description, category, tags).
    pub async fn list_projects(
        &self,
        include_unpublished: bool,
        search_term: Option<&str>,
    ) -> Result<Vec<Project>, AppError> {
        let mut projects = self.project_repo.list_projects(include_unpublished).await?;

        if let Some(term) = search_term {
            search::filter_in_place(&mut projects, term, Project::matches_search);
        }

        Ok(projects)
    }

    pub async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_featured_projects().await
    }

    /// `None` when no row matches; `published_only` hides drafts from the
    /// public case-study page.
    pub async fn get_project(
        &self,
        id: &Uuid,
        published_only: bool,
    ) -> Result<Option<Project>, AppError> {
        self.project_repo.get_project_by_id(id, published_only).await
    }

    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        request.validate()?;

        let record = request.into_record(Utc::now());
        self.project_repo.insert_project(&record).await
    }

    pub async fn update_project(
        &self,
        id: &Uuid,
        patch: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        patch.validate()?;

        self.project_repo
            .update_project(id, &patch, Utc::now())
            .await
    }

    pub async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        self.project_repo.delete_project(id).await
    }

    pub async fn toggle_flag(&self, id: &Uuid, flag: ToggleFlag) -> Result<Project, AppError> {
        self.project_repo.toggle_project_flag(id, flag).await
    }
}
