use async_trait::async_trait;
use serde::Deserialize;

use super::{PRODUCT_COLUMNS, ProfileData, RestClient};
use crate::{
    error::AppError,
    models::{Activity, Product, Profile},
};

pub struct ProfileService {
    rest: RestClient,
}

impl ProfileService {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

/// Vote rows carry no data of their own here, only the embedded product.
#[derive(Deserialize)]
struct VotedTool {
    products: Product,
}

#[async_trait]
impl ProfileData for ProfileService {
    async fn get_by_username(&self, username: &str) -> Result<Option<Profile>, AppError> {
        let filter = format!("eq.{username}");

        let mut rows: Vec<Profile> = self
            .rest
            .select(
                "profiles",
                &[("select", "*"), ("username", &filter), ("limit", "1")],
            )
            .await?;

        Ok(rows.pop())
    }

    async fn get_user_activity_by_id(&self, id: i64) -> Result<Vec<Activity>, AppError> {
        let filter = format!("eq.{id}");
        let select = format!("*,profiles(*),products({PRODUCT_COLUMNS})");

        self.rest
            .select(
                "comments",
                &[
                    ("select", &select),
                    ("user_id", &filter),
                    ("order", "created_at.desc"),
                ],
            )
            .await
    }

    async fn get_user_vote_tools(&self, id: i64) -> Result<Vec<Product>, AppError> {
        let filter = format!("eq.{id}");
        let select = format!("products({PRODUCT_COLUMNS})");

        let rows: Vec<VotedTool> = self
            .rest
            .select(
                "product_votes",
                &[("select", &select), ("user_id", &filter)],
            )
            .await?;

        Ok(rows.into_iter().map(|row| row.products).collect())
    }
}
