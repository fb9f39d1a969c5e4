//! View models handed to the templates.
//!
//! All conditional-section and fallback logic lives here, so the templates
//! only loop and print. Absent optional fields become empty strings, and a
//! section with no items serializes as an empty list, which the template
//! skips entirely.
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::{Activity, Product, Profile},
    page::ProfilePage,
};

#[derive(Debug, Serialize)]
pub struct ProfileHeaderView {
    pub full_name: String,
    pub username: String,
    pub headline: String,
    pub avatar_url: String,
}

#[derive(Debug, Serialize)]
pub struct ToolCardView {
    pub href: String,
    pub name: String,
    pub slogan: String,
    pub logo_url: String,
    pub votes_count: u32,
    pub launch_date: String,
    pub product_id: i64,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ActivityView {
    pub comment_href: String,
    pub author_name: String,
    pub author_avatar: String,
    pub commented_on: String,
    pub content: String,
    pub product: ToolCardView,
}

#[derive(Debug, Serialize)]
pub struct ProfilePageView {
    pub header: ProfileHeaderView,
    pub launches: Vec<ToolCardView>,
    pub upvotes_heading: String,
    pub upvotes: Vec<ToolCardView>,
    pub activity: Vec<ActivityView>,
    pub trending: Vec<ToolCardView>,
}

impl ProfileHeaderView {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            username: profile.username.clone(),
            headline: profile.headline.clone().unwrap_or_default(),
            avatar_url: profile.avatar_url.clone().unwrap_or_default(),
        }
    }
}

impl ToolCardView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            href: format!("/tool/{}", product.slug),
            name: product.name.clone(),
            slogan: product.slogan.clone(),
            logo_url: product.logo_url.clone().unwrap_or_default(),
            votes_count: product.votes_count,
            launch_date: product.launch_date.to_string(),
            product_id: product.id,
            tags: tags_for(product),
        }
    }
}

impl ActivityView {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            comment_href: format!("/tool/{}#{}", activity.product.slug, activity.id),
            author_name: activity.author.full_name.clone(),
            author_avatar: activity.author.avatar_url.clone().unwrap_or_default(),
            commented_on: commented_on(&activity.created_at),
            content: activity.content.clone(),
            product: ToolCardView::from_product(&activity.product),
        }
    }
}

impl ProfilePageView {
    pub fn from_page(page: &ProfilePage) -> Self {
        Self {
            header: ProfileHeaderView::from_profile(&page.profile),
            launches: page.tools.iter().map(ToolCardView::from_product).collect(),
            upvotes_heading: format!("{} Upvotes", page.voted_tools.len()),
            upvotes: page
                .voted_tools
                .iter()
                .map(ToolCardView::from_product)
                .collect(),
            activity: page
                .activity
                .iter()
                .map(ActivityView::from_activity)
                .collect(),
            trending: page
                .trending
                .iter()
                .map(ToolCardView::from_product)
                .collect(),
        }
    }
}

/// Pricing tag first, `"Free"` when absent or blank, then the categories.
pub fn tags_for(product: &Product) -> Vec<String> {
    let mut tags = Vec::with_capacity(product.categories.len() + 1);

    tags.push(
        product
            .pricing
            .as_ref()
            .map(|pricing| pricing.title.clone())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| "Free".to_string()),
    );
    tags.extend(product.categories.iter().map(|c| c.name.clone()));

    tags
}

pub fn commented_on(created_at: &DateTime<Utc>) -> String {
    format!("Commented {}", created_at.format("%B %-d, %Y"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::{Category, PricingType};
    use crate::page::tests::{product, profile};

    #[test]
    fn test_tags_with_pricing_and_categories() {
        let mut pro = product("cargo-lens", 42);
        pro.pricing = Some(PricingType {
            title: "Pro".to_string(),
        });
        pro.categories = vec![
            Category {
                name: "AI".to_string(),
            },
            Category {
                name: "DevOps".to_string(),
            },
        ];

        assert_eq!(tags_for(&pro), vec!["Pro", "AI", "DevOps"]);
    }

    #[test]
    fn test_tags_default_to_free() {
        let mut untagged = product("hexdump", 12);
        untagged.categories = vec![Category {
            name: "CLI".to_string(),
        }];

        assert_eq!(tags_for(&untagged), vec!["Free", "CLI"]);
    }

    #[test]
    fn test_blank_pricing_title_defaults_to_free() {
        let mut blank = product("hexdump", 12);
        blank.pricing = Some(PricingType {
            title: String::new(),
        });

        assert_eq!(tags_for(&blank), vec!["Free"]);
    }

    #[test]
    fn test_upvotes_heading_counts_items() {
        let page = ProfilePage {
            profile: profile(),
            tools: Vec::new(),
            voted_tools: vec![product("a", 1), product("b", 2), product("c", 3)],
            activity: Vec::new(),
            trending: Vec::new(),
        };

        let view = ProfilePageView::from_page(&page);

        assert_eq!(view.upvotes_heading, "3 Upvotes");
        assert_eq!(view.upvotes.len(), 3);
    }

    #[test]
    fn test_commented_on_format() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap();

        assert_eq!(commented_on(&date), "Commented March 5, 2024");
    }

    #[test]
    fn test_tool_card_links_by_slug() {
        let card = ToolCardView::from_product(&product("cargo-lens", 42));

        assert_eq!(card.href, "/tool/cargo-lens");
        assert_eq!(card.logo_url, "");
    }
}
