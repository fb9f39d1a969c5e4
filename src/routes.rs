use std::sync::Arc;

use axum::{
    extract::{Path, State as AppState},
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::{error::AppError, meta, page, render, resolver::ProfileResolver, state::State};

pub async fn health_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// `GET /{user}` where the segment is a sigil-prefixed username like
/// `@alice`. Axum percent-decodes the segment before it lands here.
pub async fn profile_handler(
    AppState(state): AppState<Arc<State>>,
    Path(user): Path<String>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let Some(username) = page::strip_sigil(&user) else {
        return not_found(&state);
    };

    let resolver = ProfileResolver::new(state.profiles.clone());

    let meta = meta::generate(&resolver, username).await?;

    let Some(page) = page::load(
        &resolver,
        state.products.as_ref(),
        state.config.trending_limit,
        username,
    )
    .await?
    else {
        return not_found(&state);
    };

    let html = render::profile_page(&state.templates, &meta, &page)?;

    Ok((StatusCode::OK, Html(html)))
}

fn not_found(state: &State) -> Result<(StatusCode, Html<String>), AppError> {
    let html = render::not_found_page(&state.templates)?;

    Ok((StatusCode::NOT_FOUND, Html(html)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        page::tests::{FakeProducts, FakeProfiles, profile},
    };

    fn test_state() -> Arc<State> {
        Arc::new(State {
            config: Config {
                port: 0,
                backend_url: String::new(),
                backend_key: String::new(),
                trending_limit: 9,
            },
            profiles: Arc::new(FakeProfiles {
                profile: Some(profile()),
                ..Default::default()
            }),
            products: Arc::new(FakeProducts::default()),
            templates: render::environment(),
        })
    }

    #[tokio::test]
    async fn test_unknown_profile_renders_not_found_view() {
        let (status, Html(body)) =
            profile_handler(AppState(test_state()), Path("@nobody".to_string()))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_sigilless_segment_renders_not_found_view() {
        let (status, Html(body)) =
            profile_handler(AppState(test_state()), Path("alice".to_string()))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_known_profile_renders_page() {
        let (status, Html(body)) =
            profile_handler(AppState(test_state()), Path("@alice".to_string()))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Alice Doe"));
    }
}
