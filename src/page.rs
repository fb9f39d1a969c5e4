//! Profile page assembly.
//!
//! Resolves the username, then gathers everything the page renders. The
//! launches, upvotes, and activity fetches have no ordering dependency on
//! one another, so they are joined concurrently. Trending tools are
//! best-effort and never fail the page.
use tracing::warn;

use crate::{
    error::AppError,
    models::{Activity, Product, Profile},
    resolver::ProfileResolver,
    services::ProductsData,
};

pub struct ProfilePage {
    pub profile: Profile,
    pub tools: Vec<Product>,
    pub voted_tools: Vec<Product>,
    pub activity: Vec<Activity>,
    pub trending: Vec<Product>,
}

/// A route segment names a profile only when it carries the `@` sigil.
pub fn strip_sigil(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('@')
        .filter(|username| !username.is_empty())
}

/// `Ok(None)` is the not-found terminal state: no further fetches happen.
///
/// Votes and activity are read through the resolver's own service, so they
/// cannot come from a different backend than the profile did.
pub async fn load(
    resolver: &ProfileResolver,
    products: &dyn ProductsData,
    trending_limit: usize,
    username: &str,
) -> Result<Option<ProfilePage>, AppError> {
    let Some(profile) = resolver.resolve(username).await? else {
        return Ok(None);
    };

    let profiles = resolver.profiles();

    let (tools, voted_tools, activity) = tokio::try_join!(
        products.get_user_products_by_id(profile.id),
        profiles.get_user_vote_tools(profile.id),
        profiles.get_user_activity_by_id(profile.id),
    )?;

    let trending = match products.get_trending_tools(trending_limit).await {
        Ok(trending) => trending,
        Err(e) => {
            warn!("Trending tools unavailable, omitting section: {e}");
            Vec::new()
        }
    };

    Ok(Some(ProfilePage {
        profile,
        tools,
        voted_tools,
        activity,
        trending,
    }))
}
