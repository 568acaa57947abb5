#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use portfolio_cms::entities::contact::{ContactSettings, UpdateContactSettingsRequest};
use portfolio_cms::entities::profile::{ProfileSettings, UpdateProfileRequest};
use portfolio_cms::entities::project::{
    NewProjectRequest, Project, ToggleFlag, UpdateProjectRequest,
};
use portfolio_cms::entities::testimonial::{
    NewTestimonialRequest, Testimonial, UpdateTestimonialRequest,
};
use portfolio_cms::errors::AppError;
use portfolio_cms::repositories::project::ProjectRepository;
use portfolio_cms::repositories::settings::SettingsRepository;
use portfolio_cms::repositories::testimonial::TestimonialRepository;

/// In-memory stand-ins for the Postgres repositories, mirroring the SQL
/// semantics (newest-first ordering, published filter, partial merge,
/// atomic flag flip) so the use-case properties can be checked without a
/// database.
#[derive(Default)]
pub struct InMemoryProjectRepo {
    rows: Mutex<Vec<Project>>,
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepo {
    async fn list_projects(&self, include_unpublished: bool) -> Result<Vec<Project>, AppError> {
        let mut rows: Vec<Project> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| include_unpublished || p.published)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_featured_projects(&self) -> Result<Vec<Project>, AppError> {
        let mut rows: Vec<Project> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.featured && p.published)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_project_by_id(
        &self,
        id: &Uuid,
        published_only: bool,
    ) -> Result<Option<Project>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == *id && (!published_only || p.published))
            .cloned())
    }

    async fn insert_project(&self, project: &Project) -> Result<Project, AppError> {
        self.rows.lock().unwrap().push(project.clone());
        Ok(project.clone())
    }

    async fn update_project(
        &self,
        id: &Uuid,
        patch: &UpdateProjectRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Project, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let project = rows
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        apply_project_patch(project, patch.clone());
        project.updated_at = updated_at;
        Ok(project.clone())
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        self.rows.lock().unwrap().retain(|p| p.id != *id);
        Ok(())
    }

    async fn toggle_project_flag(
        &self,
        id: &Uuid,
        flag: ToggleFlag,
    ) -> Result<Project, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let project = rows
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        match flag {
            ToggleFlag::Featured => project.featured = !project.featured,
            ToggleFlag::Published => project.published = !project.published,
        }
        project.updated_at = Utc::now();
        Ok(project.clone())
    }
}

fn apply_project_patch(project: &mut Project, patch: UpdateProjectRequest) {
    if let Some(v) = patch.title {
        project.title = v;
    }
    patch.subtitle.apply_to(&mut project.subtitle);
    if let Some(v) = patch.description {
        project.description = v;
    }
    if let Some(v) = patch.category {
        project.category = v;
    }
    if let Some(v) = patch.image {
        project.image = v;
    }
    if let Some(v) = patch.hero_image {
        project.hero_image = v;
    }
    if let Some(v) = patch.images {
        project.images = v;
    }
    if let Some(v) = patch.tags {
        project.tags = v;
    }
    if let Some(v) = patch.overview {
        project.overview = v;
    }
    if let Some(v) = patch.problem {
        project.problem = v;
    }
    if let Some(v) = patch.solution {
        project.solution = v;
    }
    if let Some(v) = patch.process {
        project.process = v;
    }
    if let Some(v) = patch.results {
        project.results = v;
    }
    if let Some(v) = patch.duration {
        project.duration = v;
    }
    if let Some(v) = patch.team {
        project.team = v;
    }
    if let Some(v) = patch.impact {
        project.impact = v;
    }
    patch.live_url.apply_to(&mut project.live_url);
    patch.github_url.apply_to(&mut project.github_url);
    if let Some(v) = patch.featured {
        project.featured = v;
    }
    if let Some(v) = patch.published {
        project.published = v;
    }
}

#[derive(Default)]
pub struct InMemoryTestimonialRepo {
    rows: Mutex<Vec<Testimonial>>,
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonialRepo {
    async fn list_testimonials(
        &self,
        include_unpublished: bool,
    ) -> Result<Vec<Testimonial>, AppError> {
        let mut rows: Vec<Testimonial> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| include_unpublished || t.published)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_featured_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        let mut rows: Vec<Testimonial> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.featured && t.published)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_testimonial_by_id(&self, id: &Uuid) -> Result<Option<Testimonial>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == *id)
            .cloned())
    }

    async fn insert_testimonial(
        &self,
        testimonial: &Testimonial,
    ) -> Result<Testimonial, AppError> {
        self.rows.lock().unwrap().push(testimonial.clone());
        Ok(testimonial.clone())
    }

    async fn update_testimonial(
        &self,
        id: &Uuid,
        patch: &UpdateTestimonialRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Testimonial, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let testimonial = rows
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| AppError::NotFound("Testimonial not found".into()))?;

        let patch = patch.clone();
        if let Some(v) = patch.client_name {
            testimonial.client_name = v;
        }
        if let Some(v) = patch.client_title {
            testimonial.client_title = v;
        }
        if let Some(v) = patch.client_company {
            testimonial.client_company = v;
        }
        patch.client_image.apply_to(&mut testimonial.client_image);
        if let Some(v) = patch.testimonial_text {
            testimonial.testimonial_text = v;
        }
        patch.rating.apply_to(&mut testimonial.rating);
        patch.project_id.apply_to(&mut testimonial.project_id);
        if let Some(v) = patch.featured {
            testimonial.featured = v;
        }
        if let Some(v) = patch.published {
            testimonial.published = v;
        }
        testimonial.updated_at = updated_at;
        Ok(testimonial.clone())
    }

    async fn delete_testimonial(&self, id: &Uuid) -> Result<(), AppError> {
        self.rows.lock().unwrap().retain(|t| t.id != *id);
        Ok(())
    }

    async fn toggle_testimonial_flag(
        &self,
        id: &Uuid,
        flag: ToggleFlag,
    ) -> Result<Testimonial, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let testimonial = rows
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| AppError::NotFound("Testimonial not found".into()))?;

        match flag {
            ToggleFlag::Featured => testimonial.featured = !testimonial.featured,
            ToggleFlag::Published => testimonial.published = !testimonial.published,
        }
        testimonial.updated_at = Utc::now();
        Ok(testimonial.clone())
    }
}

#[derive(Default)]
pub struct InMemorySettingsRepo {
    profile: Mutex<Option<ProfileSettings>>,
    contact: Mutex<Option<ContactSettings>>,
}

impl InMemorySettingsRepo {
    pub fn with_contact(contact: ContactSettings) -> Self {
        InMemorySettingsRepo {
            profile: Mutex::new(None),
            contact: Mutex::new(Some(contact)),
        }
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepo {
    async fn get_profile(&self) -> Result<Option<ProfileSettings>, AppError> {
        Ok(self.profile.lock().unwrap().clone())
    }

    async fn insert_profile(&self, profile: &ProfileSettings) -> Result<ProfileSettings, AppError> {
        *self.profile.lock().unwrap() = Some(profile.clone());
        Ok(profile.clone())
    }

    async fn update_profile(
        &self,
        patch: &UpdateProfileRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<ProfileSettings, AppError> {
        let mut guard = self.profile.lock().unwrap();
        let profile = guard
            .as_mut()
            .ok_or_else(|| AppError::NotFound("Profile not found".into()))?;

        let patch = patch.clone();
        if let Some(v) = patch.name {
            profile.name = v;
        }
        if let Some(v) = patch.title {
            profile.title = v;
        }
        if let Some(v) = patch.bio {
            profile.bio = v;
        }
        if let Some(v) = patch.profile_image {
            profile.profile_image = v;
        }
        patch.hero_image.apply_to(&mut profile.hero_image);
        patch.location.apply_to(&mut profile.location);
        if let Some(v) = patch.email {
            profile.email = v;
        }
        patch.phone.apply_to(&mut profile.phone);
        patch.website.apply_to(&mut profile.website);
        patch.resume.apply_to(&mut profile.resume);
        if let Some(v) = patch.social_links {
            profile.social_links = sqlx::types::Json(v);
        }
        if let Some(v) = patch.skills {
            profile.skills = v;
        }
        if let Some(v) = patch.experience {
            profile.experience = v;
        }
        if let Some(v) = patch.availability {
            profile.availability = v;
        }
        profile.updated_at = updated_at;
        Ok(profile.clone())
    }

    async fn get_contact_settings(&self) -> Result<Option<ContactSettings>, AppError> {
        Ok(self.contact.lock().unwrap().clone())
    }

    async fn insert_contact_settings(
        &self,
        settings: &ContactSettings,
    ) -> Result<ContactSettings, AppError> {
        *self.contact.lock().unwrap() = Some(settings.clone());
        Ok(settings.clone())
    }

    async fn update_contact_settings(
        &self,
        patch: &UpdateContactSettingsRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<ContactSettings, AppError> {
        let mut guard = self.contact.lock().unwrap();
        let settings = guard
            .as_mut()
            .ok_or_else(|| AppError::NotFound("Contact settings not found".into()))?;

        let patch = patch.clone();
        if let Some(v) = patch.email {
            settings.email = v;
        }
        patch.phone.apply_to(&mut settings.phone);
        patch.address.apply_to(&mut settings.address);
        if let Some(v) = patch.social_links {
            settings.social_links = sqlx::types::Json(v);
        }
        patch
            .contact_form_webhook
            .apply_to(&mut settings.contact_form_webhook);
        if let Some(v) = patch.auto_reply_enabled {
            settings.auto_reply_enabled = v;
        }
        patch
            .auto_reply_message
            .apply_to(&mut settings.auto_reply_message);
        settings.updated_at = updated_at;
        Ok(settings.clone())
    }
}

// ---------------------- request builders ----------------------

pub fn new_project_request(title: &str, published: bool) -> NewProjectRequest {
    NewProjectRequest {
        title: title.to_string(),
        subtitle: None,
        description: format!("{} description", title),
        category: "Web".to_string(),
        image: String::new(),
        hero_image: String::new(),
        images: vec![],
        tags: vec![],
        overview: String::new(),
        problem: String::new(),
        solution: String::new(),
        process: vec![],
        results: vec![],
        duration: String::new(),
        team: String::new(),
        impact: String::new(),
        live_url: None,
        github_url: None,
        featured: false,
        published,
    }
}

pub fn new_testimonial_request(client_name: &str, published: bool) -> NewTestimonialRequest {
    NewTestimonialRequest {
        client_name: client_name.to_string(),
        client_title: "CTO".to_string(),
        client_company: format!("{} Inc", client_name),
        client_image: None,
        testimonial_text: "Great work from start to finish.".to_string(),
        rating: Some(5),
        project_id: None,
        featured: false,
        published,
    }
}
