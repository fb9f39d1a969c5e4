use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{error::AppError, models::Profile, services::ProfileData};

/// Request-scoped profile lookup, memoized by username.
///
/// The page body and the metadata generator both resolve the profile for a
/// request. Routing them through one resolver guarantees a single backend
/// lookup per username and an identical snapshot for both consumers.
pub struct ProfileResolver {
    profiles: Arc<dyn ProfileData>,
    cache: Mutex<HashMap<String, Option<Profile>>>,
}

impl ProfileResolver {
    pub fn new(profiles: Arc<dyn ProfileData>) -> Self {
        Self {
            profiles,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The service behind this resolver, for the per-profile reads that
    /// are not memoized. Keeps every lookup in a request on one backend.
    pub fn profiles(&self) -> &dyn ProfileData {
        self.profiles.as_ref()
    }

    /// `Ok(None)` means the username has no matching profile. A negative
    /// result is memoized too, so repeat lookups stay local.
    pub async fn resolve(&self, username: &str) -> Result<Option<Profile>, AppError> {
        if let Some(hit) = self.cache.lock().await.get(username) {
            return Ok(hit.clone());
        }

        let fetched = self.profiles.get_by_username(username).await?;

        self.cache
            .lock()
            .await
            .insert(username.to_string(), fetched.clone());

        Ok(fetched)
    }
}
