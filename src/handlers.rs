//! HTTP route handlers for the studio.
//!
//! Page routes render full HTML; fragment routes (`/gallery`, `/readiness`,
//! `/submit/{feature}`) answer with the replacement content of one page
//! region so the browser only swaps `innerHTML`.

use crate::features::Feature;
use crate::gallery::{load_templates, render_gallery};
use crate::render::{display_result, Outcome, ResultPayload};
use crate::selection::Selection;
use crate::submit::{FilePart, SubmitError, Submission};
use crate::tabs::{switch_tab, Tab};
use crate::templates::{render_page, swap_button};
use crate::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// Index Handler
// ============================================================================

#[derive(Deserialize)]
pub struct IndexQuery {
    pub tab: Option<String>,
    pub selected: Option<String>,
}

pub async fn index(Query(query): Query<IndexQuery>, State(state): State<Arc<AppState>>) -> Html<String> {
    let tab = query.tab.as_deref().map(Tab::from_name).unwrap_or_default();
    let switch = switch_tab(tab);
    let selection = Selection::new(query.selected, false);

    let gallery = if switch.load_gallery {
        Some(load_templates(&state.client).await)
    } else {
        None
    };

    Html(render_page(&switch, &selection, gallery.as_ref()))
}

// ============================================================================
// Gallery & Readiness Fragments
// ============================================================================

#[derive(Deserialize)]
pub struct GalleryQuery {
    pub selected: Option<String>,
}

pub async fn gallery(Query(query): Query<GalleryQuery>, State(state): State<Arc<AppState>>) -> Html<String> {
    let selection = Selection::new(query.selected, false);
    let view = load_templates(&state.client).await;
    Html(render_gallery(&view, &selection))
}

#[derive(Deserialize)]
pub struct ReadinessQuery {
    pub template_id: Option<String>,
    #[serde(default)]
    pub face_chosen: bool,
}

pub async fn readiness(Query(query): Query<ReadinessQuery>) -> Html<String> {
    let selection = Selection::new(query.template_id, query.face_chosen);
    Html(swap_button(&selection))
}

// ============================================================================
// Submission
// ============================================================================

/// Largest browser form accepted on `/submit/{feature}`.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Collects the feature's own file fields and scalar parameter from the
/// browser form; anything else in the form is ignored.
async fn read_submission(feature: Feature, mut multipart: Multipart) -> Result<Submission, SubmitError> {
    let param_name = feature.param().map(|spec| spec.name);
    let mut submission = Submission::new(feature);

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(SubmitError::Upload(format!("Failed to read form: {}", e))),
        };

        let name = field.name().unwrap_or_default().to_string();
        if feature.file_fields().iter().any(|f| f.name == name) {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| SubmitError::Upload(format!("Failed to read file: {}", e)))?;
            let mut part = FilePart::new(name, file_name, bytes.to_vec());
            if let Some(ct) = content_type {
                part = part.with_content_type(ct);
            }
            submission = submission.file(part);
        } else if param_name == Some(name.as_str()) {
            let value = field
                .text()
                .await
                .map_err(|e| SubmitError::Upload(format!("Failed to read form: {}", e)))?;
            submission = submission.param(name, value);
        }
    }

    Ok(submission)
}

fn status_for(err: &SubmitError) -> StatusCode {
    match err {
        SubmitError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitError::Upload(_) => StatusCode::BAD_REQUEST,
        SubmitError::Server { .. } | SubmitError::Transport(_) => StatusCode::BAD_GATEWAY,
    }
}

pub async fn submit(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Response {
    let Some(feature) = Feature::from_slug(&slug) else {
        let outcome = Outcome::Failure(format!("Unknown feature: {}", slug));
        let update = display_result(&slug, &outcome);
        return (StatusCode::NOT_FOUND, Html(update.content)).into_response();
    };

    let result = match read_submission(feature, multipart).await {
        Ok(submission) => state.client.submit(&state.loading, submission).await,
        Err(e) => Err(e),
    };

    let (status, outcome) = match result {
        Ok(image) => {
            info!(feature = feature.slug(), "rendering result");
            (StatusCode::OK, Outcome::Success(ResultPayload::Image(image)))
        }
        Err(e) => {
            warn!(feature = feature.slug(), error = %e, "submission failed");
            (status_for(&e), e.into_outcome())
        }
    };

    let update = display_result(feature.slug(), &outcome);
    (status, Html(update.content)).into_response()
}

// ============================================================================
// Status
// ============================================================================

pub async fn loading_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "loading": state.loading.is_visible() }))
}

pub async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use axum::routing::{get, post};
    use axum::Router;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;
    use url::Url;

    const BOUNDARY: &str = "studio-test-boundary";

    async fn spawn(app: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    async fn fake_service(hits: Arc<AtomicUsize>) -> Url {
        let listing = serde_json::json!({
            "status": "success",
            "templates": {
                "female": [{"id": "female_anna", "name": "Anna", "url": "/t/anna.jpg"}],
                "male": [],
                "mixed": []
            }
        });
        let app = Router::new()
            .route(
                "/api/templates/list",
                get(move || {
                    let listing = listing.clone();
                    async move { Json(listing) }
                }),
            )
            .route(
                "/api/ai/cartoonify",
                post(move |body: Body| {
                    let hits = hits.clone();
                    async move {
                        let _ = to_bytes(body, usize::MAX).await;
                        hits.fetch_add(1, Ordering::SeqCst);
                        ([(header::CONTENT_TYPE, "image/png")], vec![1u8, 2, 3])
                    }
                }),
            );
        spawn(app).await
    }

    fn app_for(base: Url) -> Router {
        let config = Config {
            bind_addr: "127.0.0.1:0".to_string(),
            api_base: base,
        };
        crate::build_router(Arc::new(AppState::new(config)))
    }

    fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, file_name, data) in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match file_name {
                // An unselected file input arrives with an empty filename and body.
                Some(f) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name,
                        f,
                        if f.is_empty() { "application/octet-stream" } else { "image/png" }
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                ),
            }
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn raw_submit_request(slug: &str, body: Vec<u8>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/submit/{}", slug))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn submit_request(slug: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        raw_submit_request(slug, multipart_body(parts))
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_healthz() {
        let app = app_for(Url::parse("http://127.0.0.1:9/").unwrap());
        let response = app
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_templates_tab_loads_gallery() {
        let app = app_for(fake_service(Arc::default()).await);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?tab=templates&selected=female_anna")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains(">Female</h4>"));
        assert!(html.contains("template-item selected"));
        assert!(html.contains(r#"<section id="templates" class="tab-content active">"#));
    }

    #[tokio::test]
    async fn test_other_tabs_skip_gallery_load() {
        // Nothing listens on the base; a load attempt would show the error text.
        let app = app_for(Url::parse("http://127.0.0.1:9/").unwrap());
        let response = app
            .oneshot(Request::builder().uri("/?tab=advanced").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(!html.contains("Error loading templates"));
        assert!(html.contains(r#"<section id="advanced" class="tab-content active">"#));
    }

    #[tokio::test]
    async fn test_gallery_fragment_reports_unreachable_service() {
        let app = app_for(Url::parse("http://127.0.0.1:9/").unwrap());
        let response = app
            .oneshot(Request::builder().uri("/gallery").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_text(response).await, "<p>Error loading templates</p>");
    }

    #[tokio::test]
    async fn test_readiness_fragment() {
        let app = app_for(Url::parse("http://127.0.0.1:9/").unwrap());
        let ready = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/readiness?template_id=female_anna&face_chosen=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(!body_text(ready).await.contains("disabled"));

        let not_ready = app
            .oneshot(
                Request::builder()
                    .uri("/readiness?template_id=&face_chosen=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(body_text(not_ready).await.contains("disabled"));
    }

    #[tokio::test]
    async fn test_submit_without_file_is_rejected_locally() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = app_for(fake_service(hits.clone()).await);

        let response = app
            .oneshot(submit_request("cartoon", &[("style", None, b"anime")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = body_text(response).await;
        assert!(html.contains("❌ Error: Please select an image first"));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_renders_image_result() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = app_for(fake_service(hits.clone()).await);

        let response = app
            .oneshot(submit_request(
                "cartoon",
                &[("image", Some("me.png"), &[9, 9, 9]), ("style", None, b"general")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<img src=\"data:image/png;base64,AQID\""));
        assert!(html.contains("href=\"data:image/png;base64,AQID\""));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_with_unselected_file_input_is_rejected_locally() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = app_for(fake_service(hits.clone()).await);

        let response = app
            .oneshot(submit_request(
                "cartoon",
                &[("image", Some(""), b""), ("style", None, b"general")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = body_text(response).await;
        assert!(html.contains("❌ Error: Please select an image first"));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_accepts_photo_larger_than_two_megabytes() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = app_for(fake_service(hits.clone()).await);
        let photo = vec![0xabu8; 3 * 1024 * 1024];

        let response = app
            .oneshot(submit_request(
                "cartoon",
                &[("image", Some("big.png"), photo.as_slice()), ("style", None, b"general")],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<img src=\"data:image/png;base64,AQID\""));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_truncated_upload_is_not_a_validation_error() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = app_for(fake_service(hits.clone()).await);
        let body = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"me.png\"\r\nContent-Type: image/png\r\n\r\npartial",
            BOUNDARY
        );

        let response = app
            .oneshot(raw_submit_request("cartoon", body.into_bytes()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("❌ Error: Failed to read"), "{}", html);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_feature_is_not_found() {
        let app = app_for(Url::parse("http://127.0.0.1:9/").unwrap());
        let response = app.oneshot(submit_request("teleport", &[])).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Unknown feature: teleport"));
    }

    #[tokio::test]
    async fn test_loading_status_idle() {
        let app = app_for(Url::parse("http://127.0.0.1:9/").unwrap());
        let response = app
            .oneshot(Request::builder().uri("/api/loading").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_text(response).await, r#"{"loading":false}"#);
    }
}
