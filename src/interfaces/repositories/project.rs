use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    entities::project::{Project, ToggleFlag, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Rows ordered `created_at DESC`; `include_unpublished = false` adds the
    /// `published = true` filter. Empty result is an empty vec, never an error.
    async fn list_projects(&self, include_unpublished: bool) -> Result<Vec<Project>, AppError>;
    async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError>;
    /// `None` for zero rows; `published_only` hides drafts from the public fetch.
    async fn get_project_by_id(
        &self,
        id: &Uuid,
        published_only: bool,
    ) -> Result<Option<Project>, AppError>;
    async fn insert_project(&self, project: &Project) -> Result<Project, AppError>;
    async fn update_project(
        &self,
        id: &Uuid,
        patch: &UpdateProjectRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Project, AppError>;
    /// Hard delete; deleting zero rows is not distinguished from deleting one.
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
    /// Atomic flag flip: single `UPDATE ... SET f = NOT f` round trip, no
    /// read-then-write window.
    async fn toggle_project_flag(&self, id: &Uuid, flag: ToggleFlag)
        -> Result<Project, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, include_unpublished: bool) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE ($1 OR published = TRUE)
            ORDER BY created_at DESC
            "#,
        )
        .bind(include_unpublished)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE featured = TRUE AND published = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_id(
        &self,
        id: &Uuid,
        published_only: bool,
    ) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE id = $1 AND (NOT $2 OR published = TRUE)
            "#,
        )
        .bind(id)
        .bind(published_only)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn insert_project(&self, project: &Project) -> Result<Project, AppError> {
        let stored = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                id, title, subtitle, description, category, image, hero_image,
                images, tags, overview, problem, solution, process, results,
                duration, team, impact, live_url, github_url, featured,
                published, created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23
            )
            RETURNING *
            "#,
        )
        .bind(project.id)
        .bind(&project.title)
        .bind(&project.subtitle)
        .bind(&project.description)
        .bind(&project.category)
        .bind(&project.image)
        .bind(&project.hero_image)
        .bind(&project.images)
        .bind(&project.tags)
        .bind(&project.overview)
        .bind(&project.problem)
        .bind(&project.solution)
        .bind(&project.process)
        .bind(&project.results)
        .bind(&project.duration)
        .bind(&project.team)
        .bind(&project.impact)
        .bind(&project.live_url)
        .bind(&project.github_url)
        .bind(project.featured)
        .bind(project.published)
        .bind(project.created_at)
        .bind(project.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn update_project(
        &self,
        id: &Uuid,
        patch: &UpdateProjectRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Project, AppError> {
        // COALESCE keeps stored values for absent fields; the CASE pairs give
        // tri-state semantics to the nullable columns.
        let updated = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                title       = COALESCE($2, title),
                subtitle    = CASE WHEN $3 THEN $4 ELSE subtitle END,
                description = COALESCE($5, description),
                category    = COALESCE($6, category),
                image       = COALESCE($7, image),
                hero_image  = COALESCE($8, hero_image),
                images      = COALESCE($9, images),
                tags        = COALESCE($10, tags),
                overview    = COALESCE($11, overview),
                problem     = COALESCE($12, problem),
                solution    = COALESCE($13, solution),
                process     = COALESCE($14, process),
                results     = COALESCE($15, results),
                duration    = COALESCE($16, duration),
                team        = COALESCE($17, team),
                impact      = COALESCE($18, impact),
                live_url    = CASE WHEN $19 THEN $20 ELSE live_url END,
                github_url  = CASE WHEN $21 THEN $22 ELSE github_url END,
                featured    = COALESCE($23, featured),
                published   = COALESCE($24, published),
                updated_at  = $25
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(patch.subtitle.is_set())
        .bind(patch.subtitle.write_str())
        .bind(&patch.description)
        .bind(&patch.category)
        .bind(&patch.image)
        .bind(&patch.hero_image)
        .bind(&patch.images)
        .bind(&patch.tags)
        .bind(&patch.overview)
        .bind(&patch.problem)
        .bind(&patch.solution)
        .bind(&patch.process)
        .bind(&patch.results)
        .bind(&patch.duration)
        .bind(&patch.team)
        .bind(&patch.impact)
        .bind(patch.live_url.is_set())
        .bind(patch.live_url.write_str())
        .bind(patch.github_url.is_set())
        .bind(patch.github_url.write_str())
        .bind(patch.featured)
        .bind(patch.published)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        Ok(updated)
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query(r#"DELETE FROM projects WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn toggle_project_flag(
        &self,
        id: &Uuid,
        flag: ToggleFlag,
    ) -> Result<Project, AppError> {
        let sql = match flag {
            ToggleFlag::Featured => {
                r#"
                UPDATE projects
                SET featured = NOT featured, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#
            }
            ToggleFlag::Published => {
                r#"
                UPDATE projects
                SET published = NOT published, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#
            }
        };

        let project = sqlx::query_as::<_, Project>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        Ok(project)
    }
}
