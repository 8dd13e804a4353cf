//! Studio library - the AI photo studio front end.
//!
//! The server renders the page, accepts the browser's form posts, forwards
//! each one as a single multipart request to the processing service and
//! renders the outcome into the page region it belongs to.
//!
//! - `config`: environment configuration
//! - `models`: template catalog and service envelopes
//! - `features`: the fixed set of processing features
//! - `tabs`, `selection`: panel switching and the swap readiness gate
//! - `submit`: generic submitter and processing-service client
//! - `loading`: the shared loading indicator
//! - `gallery`, `render`: gallery and result rendering
//! - `templates`: HTML/CSS/JS
//! - `handlers`: HTTP route handlers

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod features;
pub mod gallery;
pub mod handlers;
pub mod loading;
pub mod models;
pub mod render;
pub mod selection;
pub mod submit;
pub mod tabs;
pub mod templates;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: UpstreamClient,
    pub loading: LoadingIndicator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = UpstreamClient::new(config.api_base.clone());
        Self {
            config,
            client,
            loading: LoadingIndicator::new(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Page
        .route("/", get(handlers::index))
        // Fragments
        .route("/gallery", get(handlers::gallery))
        .route("/readiness", get(handlers::readiness))
        .route(
            "/submit/{feature}",
            post(handlers::submit).layer(DefaultBodyLimit::max(handlers::MAX_UPLOAD_BYTES)),
        )
        // Status
        .route("/api/loading", get(handlers::loading_status))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use features::{Feature, FileField, ParamKind, ParamSpec};
pub use gallery::{load_templates, render_gallery, GalleryView};
pub use loading::{LoadingGuard, LoadingIndicator};
pub use models::{Category, ErrorEnvelope, ListEnvelope, Template, TemplateCatalog};
pub use render::{display_result, html_escape, ImageData, Outcome, RegionUpdate, ResultPayload};
pub use selection::{check_swap_ready, Selection};
pub use submit::{CatalogError, FilePart, SubmitError, Submission, UpstreamClient, UNKNOWN_ERROR};
pub use tabs::{switch_tab, Tab, TabSwitch};
