use serde::{Deserialize, Serialize};
use validator::Validate;

/// Social profile URLs shared by the profile and contact settings records.
/// Stored as a single JSONB column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SocialLinks {
    #[validate(url)]
    pub linkedin: Option<String>,

    #[validate(url)]
    pub github: Option<String>,

    #[validate(url)]
    pub twitter: Option<String>,

    #[validate(url)]
    pub dribbble: Option<String>,

    #[validate(url)]
    pub behance: Option<String>,

    #[validate(url)]
    pub instagram: Option<String>,
}
