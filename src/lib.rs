//! Documentation of the Dev Hunt page server.
//!
//! Server-rendered profile pages for Dev Hunt, a directory of developer
//! tools where users launch products, vote on them, and comment.
//!
//!
//!
//! # General Infrastructure
//! - User requests `/@username` on this server
//! - Server resolves the profile against the backend data service (PostgREST
//!   style REST over the relational store)
//! - Launches, upvotes, and activity are fetched per request and rendered
//!   into one HTML document, metadata included
//! - No state is held between requests; the backend owns all data
//!
//!
//!
//! # Notes
//!
//! ## Why one resolver
//! The page body and the social metadata both need the profile. Instead of
//! two independent lookups per request, both go through a request-scoped
//! resolver memoized by username, so they always see the same snapshot.
//!
//! ## Failure policy
//! A missing profile renders the 404 view and stops there. A failing
//! backend call for the main sections renders the generic error view. The
//! trending widget is auxiliary, so its failure only drops that section.
//!
//!
//!
//! # Setup
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
//!
//! Run against a local backend.
//! ```sh
//! BACKEND_URL=http://localhost:54321 cargo run
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod meta;
pub mod models;
pub mod page;
pub mod render;
pub mod resolver;
pub mod routes;
pub mod services;
pub mod state;
pub mod ui;

use routes::{health_handler, profile_handler};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/{user}", get(profile_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
