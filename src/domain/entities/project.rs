use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::patch_field::PatchField;
use crate::domain::list_edit;
use crate::domain::search;

/// A portfolio case study. `featured` and `published` are independent flags
/// with no invariant linking them to any other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub category: String,
    pub image: String,
    pub hero_image: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub overview: String,
    pub problem: String,
    pub solution: String,
    pub process: Vec<String>,
    pub results: Vec<String>,
    pub duration: String,
    pub team: String,
    pub impact: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Case-insensitive substring match over the fixed admin search fields.
    pub fn matches_search(&self, term: &str) -> bool {
        search::matches_any(
            term,
            [
                self.title.as_str(),
                self.description.as_str(),
                self.category.as_str(),
            ]
            .into_iter()
            .chain(self.tags.iter().map(|t| t.as_str())),
        )
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 200))]
    pub subtitle: Option<String>,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub hero_image: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub overview: String,

    #[serde(default)]
    pub problem: String,

    #[serde(default)]
    pub solution: String,

    #[serde(default)]
    pub process: Vec<String>,

    #[serde(default)]
    pub results: Vec<String>,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub team: String,

    #[serde(default)]
    pub impact: String,

    #[validate(url)]
    pub live_url: Option<String>,

    #[validate(url)]
    pub github_url: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub published: bool,
}

impl NewProjectRequest {
    /// Builds the stored record: fresh id, both timestamps stamped to `now`,
    /// list fields normalized through the shared add rule (no empties, no
    /// duplicates in `tags`).
    pub fn into_record(self, now: DateTime<Utc>) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            category: self.category,
            image: self.image,
            hero_image: self.hero_image,
            images: list_edit::normalize(self.images),
            tags: list_edit::normalize_unique(self.tags),
            overview: self.overview,
            problem: self.problem,
            solution: self.solution,
            process: list_edit::normalize(self.process),
            results: list_edit::normalize(self.results),
            duration: self.duration,
            team: self.team,
            impact: self.impact,
            live_url: self.live_url,
            github_url: self.github_url,
            featured: self.featured,
            published: self.published,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update: absent fields stay untouched, explicit `null` clears the
/// nullable ones.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[serde(default)]
    pub subtitle: PatchField<String>,

    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,

    pub image: Option<String>,
    pub hero_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub overview: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub process: Option<Vec<String>>,
    pub results: Option<Vec<String>>,
    pub duration: Option<String>,
    pub team: Option<String>,
    pub impact: Option<String>,

    #[serde(default)]
    pub live_url: PatchField<String>,

    #[serde(default)]
    pub github_url: PatchField<String>,

    pub featured: Option<bool>,
    pub published: Option<bool>,
}

/// The two independently togglable project/testimonial flags. Restricting the
/// toggle operation to this set keeps the column name out of user control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleFlag {
    Featured,
    Published,
}

impl ToggleFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleFlag::Featured => "featured",
            ToggleFlag::Published => "published",
        }
    }
}
