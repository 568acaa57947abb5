use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    entities::project::ToggleFlag,
    entities::testimonial::{Testimonial, UpdateTestimonialRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxTestimonialRepo,
};

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list_testimonials(
        &self,
        include_unpublished: bool,
    ) -> Result<Vec<Testimonial>, AppError>;
    async fn list_featured_testimonials(&self) -> Result<Vec<Testimonial>, AppError>;
    async fn get_testimonial_by_id(&self, id: &Uuid) -> Result<Option<Testimonial>, AppError>;
    async fn insert_testimonial(&self, testimonial: &Testimonial)
        -> Result<Testimonial, AppError>;
    async fn update_testimonial(
        &self,
        id: &Uuid,
        patch: &UpdateTestimonialRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Testimonial, AppError>;
    async fn delete_testimonial(&self, id: &Uuid) -> Result<(), AppError>;
    async fn toggle_testimonial_flag(
        &self,
        id: &Uuid,
        flag: ToggleFlag,
    ) -> Result<Testimonial, AppError>;
}

impl SqlxTestimonialRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxTestimonialRepo { pool }
    }
}

#[async_trait]
impl TestimonialRepository for SqlxTestimonialRepo {
    async fn list_testimonials(
        &self,
        include_unpublished: bool,
    ) -> Result<Vec<Testimonial>, AppError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT * FROM testimonials
            WHERE ($1 OR published = TRUE)
            ORDER BY created_at DESC
            "#,
        )
        .bind(include_unpublished)
        .fetch_all(&self.pool)
        .await?;

        Ok(testimonials)
    }

    async fn list_featured_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT * FROM testimonials
            WHERE featured = TRUE AND published = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(testimonials)
    }

    async fn get_testimonial_by_id(&self, id: &Uuid) -> Result<Option<Testimonial>, AppError> {
        let testimonial =
            sqlx::query_as::<_, Testimonial>(r#"SELECT * FROM testimonials WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(testimonial)
    }

    async fn insert_testimonial(
        &self,
        testimonial: &Testimonial,
    ) -> Result<Testimonial, AppError> {
        let stored = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (
                id, client_name, client_title, client_company, client_image,
                testimonial_text, rating, project_id, featured, published,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(testimonial.id)
        .bind(&testimonial.client_name)
        .bind(&testimonial.client_title)
        .bind(&testimonial.client_company)
        .bind(&testimonial.client_image)
        .bind(&testimonial.testimonial_text)
        .bind(testimonial.rating)
        .bind(testimonial.project_id)
        .bind(testimonial.featured)
        .bind(testimonial.published)
        .bind(testimonial.created_at)
        .bind(testimonial.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn update_testimonial(
        &self,
        id: &Uuid,
        patch: &UpdateTestimonialRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Testimonial, AppError> {
        let updated = sqlx::query_as::<_, Testimonial>(
            r#"
            UPDATE testimonials SET
                client_name      = COALESCE($2, client_name),
                client_title     = COALESCE($3, client_title),
                client_company   = COALESCE($4, client_company),
                client_image     = CASE WHEN $5 THEN $6 ELSE client_image END,
                testimonial_text = COALESCE($7, testimonial_text),
                rating           = CASE WHEN $8 THEN $9 ELSE rating END,
                project_id       = CASE WHEN $10 THEN $11 ELSE project_id END,
                featured         = COALESCE($12, featured),
                published        = COALESCE($13, published),
                updated_at       = $14
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.client_name)
        .bind(&patch.client_title)
        .bind(&patch.client_company)
        .bind(patch.client_image.is_set())
        .bind(patch.client_image.write_str())
        .bind(&patch.testimonial_text)
        .bind(patch.rating.is_set())
        .bind(patch.rating.write_value().copied())
        .bind(patch.project_id.is_set())
        .bind(patch.project_id.write_value().copied())
        .bind(patch.featured)
        .bind(patch.published)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Testimonial not found".into()))?;

        Ok(updated)
    }

    async fn delete_testimonial(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query(r#"DELETE FROM testimonials WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn toggle_testimonial_flag(
        &self,
        id: &Uuid,
        flag: ToggleFlag,
    ) -> Result<Testimonial, AppError> {
        let sql = match flag {
            ToggleFlag::Featured => {
                r#"
                UPDATE testimonials
                SET featured = NOT featured, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#
            }
            ToggleFlag::Published => {
                r#"
                UPDATE testimonials
                SET published = NOT published, updated_at = NOW()
                WHERE id = $1
                RETURNING *
                "#
            }
        };

        let testimonial = sqlx::query_as::<_, Testimonial>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Testimonial not found".into()))?;

        Ok(testimonial)
    }
}
