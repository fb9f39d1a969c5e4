use minijinja::{Environment, context};

use crate::{error::AppError, meta::PageMeta, page::ProfilePage};

pub mod view;

use view::ProfilePageView;

/// Templates ship inside the binary. Registration failures are programmer
/// errors caught at startup.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();

    env.add_template("layout.html", include_str!("../../templates/layout.html"))
        .unwrap();
    env.add_template("profile.html", include_str!("../../templates/profile.html"))
        .unwrap();
    env.add_template(
        "not_found.html",
        include_str!("../../templates/not_found.html"),
    )
    .unwrap();

    env
}

pub fn profile_page(
    env: &Environment,
    meta: &PageMeta,
    page: &ProfilePage,
) -> Result<String, AppError> {
    let view = ProfilePageView::from_page(page);
    let template = env.get_template("profile.html")?;

    Ok(template.render(context! { meta, view })?)
}

pub fn not_found_page(env: &Environment) -> Result<String, AppError> {
    let template = env.get_template("not_found.html")?;

    Ok(template.render(context! { meta => PageMeta::not_found() })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::PageMeta;
    use crate::page::tests::{product, profile};

    fn empty_page() -> ProfilePage {
        ProfilePage {
            profile: profile(),
            tools: Vec::new(),
            voted_tools: Vec::new(),
            activity: Vec::new(),
            trending: Vec::new(),
        }
    }

    fn render(page: &ProfilePage) -> String {
        let env = environment();
        let meta = PageMeta::for_profile(&page.profile);

        profile_page(&env, &meta, page).unwrap()
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let html = render(&empty_page());

        assert!(html.contains("Alice Doe"));
        assert!(!html.contains("Launches"));
        assert!(!html.contains("Upvotes"));
        assert!(!html.contains("Activity"));
        // the trending heading always renders, even with no items yet
        assert!(html.contains("Trending tools"));
    }

    #[test]
    fn test_launches_render_per_product() {
        let mut page = empty_page();
        page.tools = vec![product("cargo-lens", 42)];

        let html = render(&page);

        assert!(html.contains("Launches"));
        assert!(html.contains("/tool/cargo-lens"));
        assert!(html.contains("42"));
    }

    #[test]
    fn test_upvotes_heading_is_literal_count() {
        let mut page = empty_page();
        page.voted_tools = vec![product("a", 1), product("b", 2)];

        let html = render(&page);

        assert!(html.contains("2 Upvotes"));
    }

    #[test]
    fn test_metadata_lands_in_head() {
        let html = render(&empty_page());

        assert!(html.contains("<title>Alice Doe&#x27;s profile on Dev Hunt - Dev Hunt</title>"));
    }

    #[test]
    fn test_not_found_page() {
        let env = environment();
        let html = not_found_page(&env).unwrap();

        assert!(html.contains("404"));
        assert!(html.contains("Page not found"));
    }
}
