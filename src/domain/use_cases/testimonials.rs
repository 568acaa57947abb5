use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::entities::patch_field::PatchField,
    domain::search,
    entities::project::ToggleFlag,
    entities::testimonial::{NewTestimonialRequest, Testimonial, UpdateTestimonialRequest},
    errors::AppError,
    repositories::testimonial::TestimonialRepository,
};

pub struct TestimonialHandler<R>
where
    R: TestimonialRepository,
{
    pub testimonial_repo: R,
}

impl<R> TestimonialHandler<R>
where
    R: TestimonialRepository,
{
    pub fn new(testimonial_repo: R) -> Self {
        TestimonialHandler { testimonial_repo }
    }

    pub async fn list_testimonials(
        &self,
        include_unpublished: bool,
        search_term: Option<&str>,
    ) -> Result<Vec<Testimonial>, AppError> {
        let mut testimonials = self
            .testimonial_repo
            .list_testimonials(include_unpublished)
            .await?;

        if let Some(term) = search_term {
            search::filter_in_place(&mut testimonials, term, Testimonial::matches_search);
        }

        Ok(testimonials)
    }

    pub async fn list_featured_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        self.testimonial_repo.list_featured_testimonials().await
    }

    pub async fn get_testimonial(&self, id: &Uuid) -> Result<Option<Testimonial>, AppError> {
        self.testimonial_repo.get_testimonial_by_id(id).await
    }

    pub async fn create_testimonial(
        &self,
        request: NewTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        request.validate()?;

        let record = request.into_record(Utc::now());
        self.testimonial_repo.insert_testimonial(&record).await
    }

    pub async fn update_testimonial(
        &self,
        id: &Uuid,
        patch: UpdateTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        patch.validate()?;

        if let PatchField::Value(rating) = &patch.rating {
            if !(1..=5).contains(rating) {
                return Err(AppError::InvalidInput(
                    "rating must be between 1 and 5".into(),
                ));
            }
        }

        self.testimonial_repo
            .update_testimonial(id, &patch, Utc::now())
            .await
    }

    pub async fn delete_testimonial(&self, id: &Uuid) -> Result<(), AppError> {
        self.testimonial_repo.delete_testimonial(id).await
    }

    pub async fn toggle_flag(&self, id: &Uuid, flag: ToggleFlag) -> Result<Testimonial, AppError> {
        self.testimonial_repo.toggle_testimonial_flag(id, flag).await
    }
}
