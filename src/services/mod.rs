//! Clients for the backend data service.
//!
//! The backend speaks PostgREST-style REST: one endpoint per table, filters
//! and embedded resources passed as query parameters, JSON arrays back. The
//! traits exist so page assembly can run against in-memory fakes in tests.
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    error::AppError,
    models::{Activity, Product, Profile},
};

pub mod products;
pub mod profile;

/// Product columns plus the embedded pricing and category relations.
pub(crate) const PRODUCT_COLUMNS: &str =
    "*,product_pricing_types(title),product_category_product(name)";

#[async_trait]
pub trait ProfileData: Send + Sync {
    async fn get_by_username(&self, username: &str) -> Result<Option<Profile>, AppError>;
    async fn get_user_activity_by_id(&self, id: i64) -> Result<Vec<Activity>, AppError>;
    async fn get_user_vote_tools(&self, id: i64) -> Result<Vec<Product>, AppError>;
}

#[async_trait]
pub trait ProductsData: Send + Sync {
    async fn get_user_products_by_id(&self, id: i64) -> Result<Vec<Product>, AppError>;
    async fn get_trending_tools(&self, limit: usize) -> Result<Vec<Product>, AppError>;
}

#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    key: String,
}

impl RestClient {
    pub fn new(base_url: &str, key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) async fn select<T>(&self, table: &str, query: &[(&str, &str)]) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/rest/v1/{table}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .send()
            .await?
            .error_for_status()?;

        #[cfg(feature = "verbose")]
        tracing::info!("GET {url} -> {}", response.status());

        Ok(response.json::<T>().await?)
    }
}
