//! Page title, description, and social-preview fields.
use serde::Serialize;

use crate::{error::AppError, models::Profile, resolver::ProfileResolver};

#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub image: String,
    pub og_type: &'static str,
    pub twitter_card: &'static str,
}

impl PageMeta {
    pub fn not_found() -> Self {
        Self {
            title: "Page not found - Dev Hunt".to_string(),
            description: "The page you are looking for does not exist.".to_string(),
            image: String::new(),
            og_type: "website",
            twitter_card: "summary",
        }
    }

    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            title: format!("{}'s profile on Dev Hunt - Dev Hunt", profile.full_name),
            description: profile.headline.clone().unwrap_or_default(),
            image: profile.avatar_url.clone().unwrap_or_default(),
            og_type: "article",
            twitter_card: "summary_large_image",
        }
    }
}

/// Resolves through the shared request-scoped resolver, so the fields here
/// always match what the page body rendered.
pub async fn generate(resolver: &ProfileResolver, username: &str) -> Result<PageMeta, AppError> {
    match resolver.resolve(username).await? {
        Some(profile) => Ok(PageMeta::for_profile(&profile)),
        None => Ok(PageMeta::not_found()),
    }
}
