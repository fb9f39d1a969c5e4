use async_trait::async_trait;

use super::{PRODUCT_COLUMNS, ProductsData, RestClient};
use crate::{error::AppError, models::Product};

pub struct ProductsService {
    rest: RestClient,
}

impl ProductsService {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl ProductsData for ProductsService {
    async fn get_user_products_by_id(&self, id: i64) -> Result<Vec<Product>, AppError> {
        let filter = format!("eq.{id}");

        self.rest
            .select(
                "products",
                &[
                    ("select", PRODUCT_COLUMNS),
                    ("owner_id", &filter),
                    ("order", "launch_date.desc"),
                ],
            )
            .await
    }

    async fn get_trending_tools(&self, limit: usize) -> Result<Vec<Product>, AppError> {
        let limit = limit.to_string();

        self.rest
            .select(
                "products",
                &[
                    ("select", PRODUCT_COLUMNS),
                    ("order", "votes_count.desc"),
                    ("limit", &limit),
                ],
            )
            .await
    }
}
