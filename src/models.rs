//! Row shapes returned by the backend data service.
//!
//! Everything here is deserialized once at the service boundary. The
//! embedded field names (`product_pricing_types`, `product_category_product`,
//! `profiles`, `products`) mirror the backend's relation names, so a `select`
//! with embedded resources maps straight onto these structs.
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingType {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub slogan: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub votes_count: u32,
    pub launch_date: NaiveDate,
    #[serde(default, rename = "product_pricing_types")]
    pub pricing: Option<PricingType>,
    #[serde(default, rename = "product_category_product")]
    pub categories: Vec<Category>,
}

/// A comment joined with its author and target product.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "profiles")]
    pub author: Profile,
    #[serde(rename = "products")]
    pub product: Product,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_row() {
        let row = r#"{
            "id": 7,
            "slug": "cargo-lens",
            "name": "Cargo Lens",
            "slogan": "See inside your build",
            "logo_url": null,
            "votes_count": 42,
            "launch_date": "2024-03-05",
            "product_pricing_types": { "title": "Pro" },
            "product_category_product": [{ "name": "AI" }, { "name": "DevOps" }]
        }"#;

        let product: Product = serde_json::from_str(row).unwrap();

        assert_eq!(product.slug, "cargo-lens");
        assert_eq!(product.votes_count, 42);
        assert!(product.logo_url.is_none());
        assert_eq!(product.pricing.unwrap().title, "Pro");
        assert_eq!(product.categories.len(), 2);
    }

    #[test]
    fn test_product_row_missing_embeds() {
        let row = r#"{
            "id": 8,
            "slug": "minimal",
            "name": "Minimal",
            "slogan": "Bare bones",
            "votes_count": 0,
            "launch_date": "2024-01-01"
        }"#;

        let product: Product = serde_json::from_str(row).unwrap();

        assert!(product.pricing.is_none());
        assert!(product.categories.is_empty());
    }

    #[test]
    fn test_activity_row() {
        let row = r#"{
            "id": 91,
            "content": "Great tool!",
            "created_at": "2024-03-05T12:30:00Z",
            "profiles": {
                "id": 1,
                "username": "alice",
                "full_name": "Alice Doe",
                "headline": "Rustacean",
                "avatar_url": "https://cdn.devhunt.org/a.png"
            },
            "products": {
                "id": 7,
                "slug": "cargo-lens",
                "name": "Cargo Lens",
                "slogan": "See inside your build",
                "votes_count": 42,
                "launch_date": "2024-03-05"
            }
        }"#;

        let activity: Activity = serde_json::from_str(row).unwrap();

        assert_eq!(activity.author.username, "alice");
        assert_eq!(activity.product.slug, "cargo-lens");
    }
}
