//! The generic submitter and the processing-service client.
//!
//! Every feature goes through the same flow: validate the collected inputs,
//! build a multipart form, show the loading indicator, POST once, and turn
//! the response into image bytes or an error message. Nothing is retried and
//! no timeout is applied.

use crate::features::{Feature, ParamKind};
use crate::loading::LoadingIndicator;
use crate::models::{ErrorEnvelope, ListEnvelope, TemplateCatalog};
use crate::render::{ImageData, Outcome, ResultPayload};
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};
use url::Url;

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// Shown when a failed response carries no usable error message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

const DEFAULT_IMAGE_TYPE: &str = "image/png";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Required input missing or invalid; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request or the response body failed in transit.
    #[error("{0}")]
    Transport(String),

    /// The browser's own upload could not be read.
    #[error("{0}")]
    Upload(String),
}

impl SubmitError {
    pub fn into_outcome(self) -> Outcome {
        Outcome::Failure(self.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to load templates")]
    Unsuccessful,

    #[error("Error loading templates: {0}")]
    Transport(String),
}

// ============================================================================
// Submissions
// ============================================================================

/// One uploaded file, as read from the browser's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Everything collected for one click of a submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub feature: Feature,
    pub files: Vec<FilePart>,
    pub params: Vec<(String, String)>,
}

impl Submission {
    pub fn new(feature: Feature) -> Self {
        Self {
            feature,
            files: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Empty uploads (a file input left blank) are ignored.
    pub fn file(mut self, part: FilePart) -> Self {
        if !part.bytes.is_empty() {
            self.files.retain(|f| f.field != part.field);
            self.files.push(part);
        }
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.params.retain(|(n, _)| *n != name);
        self.params.push((name, value.into()));
        self
    }

    pub fn has_file(&self, field: &str) -> bool {
        self.files.iter().any(|f| f.field == field)
    }

    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Checks required files and the scalar parameter, filling in the
    /// default of a choice parameter and dropping an empty optional prompt.
    pub fn validate(mut self) -> Result<Self, SubmitError> {
        let feature = self.feature;
        let missing = feature
            .file_fields()
            .iter()
            .any(|field| !self.has_file(field.name));
        if missing {
            return Err(SubmitError::Validation(
                feature.missing_input_message().to_string(),
            ));
        }

        if let Some(spec) = feature.param() {
            let value = self.param_value(spec.name).map(|v| v.trim().to_string());
            match (spec.kind, value) {
                (ParamKind::OptionalText { .. }, Some(v)) if v.is_empty() => {
                    self.params.retain(|(n, _)| n != spec.name);
                }
                (ParamKind::OptionalText { .. }, _) => {}
                (ParamKind::Selected, Some(v)) if spec.accepts(&v) => {}
                (ParamKind::Selected, _) => {
                    return Err(SubmitError::Validation(
                        feature.missing_input_message().to_string(),
                    ));
                }
                (ParamKind::Choice(_), None) => {
                    if let Some(default) = spec.default_value() {
                        self = self.param(spec.name, default);
                    }
                }
                (ParamKind::Choice(_), Some(v)) if spec.accepts(&v) => {}
                (ParamKind::Choice(_), Some(v)) => {
                    return Err(SubmitError::Validation(format!(
                        "Unsupported {}: {}",
                        spec.label.to_lowercase(),
                        v
                    )));
                }
            }
        }

        Ok(self)
    }

    /// Multipart payload with every file and parameter as a named part.
    pub fn to_form(&self) -> Result<Form, SubmitError> {
        let mut form = Form::new();
        for file in &self.files {
            let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
            if let Some(ct) = &file.content_type {
                part = part
                    .mime_str(ct)
                    .map_err(|e| SubmitError::Validation(format!("Invalid file type: {}", e)))?;
            }
            form = form.part(file.field.clone(), part);
        }
        for (name, value) in &self.params {
            form = form.text(name.clone(), value.clone());
        }
        Ok(form)
    }
}

// ============================================================================
// Client
// ============================================================================

/// Content type safe to embed in a `data:` URI; anything else falls back to
/// PNG.
fn image_content_type(header: Option<&str>) -> String {
    let essence = header
        .and_then(|h| h.split(';').next())
        .map(|s| s.trim().to_ascii_lowercase())
        .unwrap_or_default();
    let safe = essence.starts_with("image/")
        && essence
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '+' | '.' | '-'));
    if safe {
        essence
    } else {
        DEFAULT_IMAGE_TYPE.to_string()
    }
}

/// Message of a non-success body, or the fixed fallback.
pub fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.message())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base: Url,
}

impl UpstreamClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// Absolute URL of a service path such as `/api/ai/cartoonify`.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, SubmitError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| SubmitError::Transport(format!("Invalid endpoint {}: {}", path, e)))
    }

    /// Runs one submission. Validation failures return before the loading
    /// indicator is touched or anything is sent.
    pub async fn submit(
        &self,
        loading: &LoadingIndicator,
        submission: Submission,
    ) -> Result<ImageData, SubmitError> {
        let submission = submission.validate()?;
        let form = submission.to_form()?;
        let url = self.endpoint_url(submission.feature.endpoint())?;

        debug!(
            feature = submission.feature.slug(),
            files = submission.files.len(),
            params = submission.params.len(),
            "submitting"
        );

        let _busy = loading.guard();

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if status.is_success() {
            let content_type = image_content_type(
                response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok()),
            );
            let bytes = response
                .bytes()
                .await
                .map_err(|e| SubmitError::Transport(e.without_url().to_string()))?;
            info!(
                feature = submission.feature.slug(),
                bytes = bytes.len(),
                "processing succeeded"
            );
            Ok(ImageData::new(bytes.to_vec(), content_type))
        } else {
            let body = response.bytes().await.unwrap_or_default();
            let message = error_message(&body);
            warn!(
                feature = submission.feature.slug(),
                status = status.as_u16(),
                %message,
                "processing failed"
            );
            Err(SubmitError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Submission followed by conversion into a renderable outcome.
    pub async fn run(&self, loading: &LoadingIndicator, submission: Submission) -> Outcome {
        match self.submit(loading, submission).await {
            Ok(image) => Outcome::Success(ResultPayload::Image(image)),
            Err(e) => e.into_outcome(),
        }
    }

    /// One read of the template catalog.
    pub async fn list_templates(&self) -> Result<TemplateCatalog, CatalogError> {
        let url = self
            .endpoint_url("/api/templates/list")
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.without_url().to_string()))?;

        let envelope: ListEnvelope = response
            .json()
            .await
            .map_err(|e| CatalogError::Transport(e.without_url().to_string()))?;

        envelope.into_catalog().ok_or(CatalogError::Unsuccessful)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(field: &str) -> FilePart {
        FilePart::new(field, "photo.png", vec![1, 2, 3]).with_content_type("image/png")
    }

    #[test]
    fn test_missing_file_is_validation_error() {
        let err = Submission::new(Feature::Cartoon).validate().unwrap_err();
        assert_eq!(err, SubmitError::Validation("Please select an image first".to_string()));
    }

    #[test]
    fn test_empty_upload_counts_as_missing() {
        let empty = FilePart::new("image", "", vec![]);
        let submission = Submission::new(Feature::HdUpscale).file(empty);
        assert!(!submission.has_file("image"));
        assert!(matches!(submission.validate(), Err(SubmitError::Validation(_))));
    }

    #[test]
    fn test_face_swap_needs_both_files() {
        let one = Submission::new(Feature::FaceSwap).file(png("source_image"));
        assert_eq!(
            one.validate().unwrap_err().to_string(),
            "Please select both source and target images"
        );
        let both = Submission::new(Feature::FaceSwap)
            .file(png("source_image"))
            .file(png("target_image"));
        assert!(both.validate().is_ok());
    }

    #[test]
    fn test_template_swap_needs_selection() {
        let no_template = Submission::new(Feature::TemplateSwap).file(png("face_image"));
        assert_eq!(
            no_template.validate().unwrap_err().to_string(),
            "Please select a template and upload a face image"
        );
        let ready = Submission::new(Feature::TemplateSwap)
            .file(png("face_image"))
            .param("template_id", "female_anna");
        assert!(ready.validate().is_ok());
    }

    #[test]
    fn test_choice_default_and_rejection() {
        let v = Submission::new(Feature::HdUpscale).file(png("image")).validate().unwrap();
        assert_eq!(v.param_value("scale"), Some("2"));

        let bad = Submission::new(Feature::StyleTransfer)
            .file(png("image"))
            .param("style", "cubism");
        assert_eq!(
            bad.validate().unwrap_err().to_string(),
            "Unsupported art style: cubism"
        );
    }

    #[test]
    fn test_empty_prompt_is_dropped() {
        let v = Submission::new(Feature::AiHugs).param("prompt", "   ").validate().unwrap();
        assert_eq!(v.param_value("prompt"), None);

        let v = Submission::new(Feature::AiHugs).param("prompt", "two friends").validate().unwrap();
        assert_eq!(v.param_value("prompt"), Some("two friends"));
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message(br#"{"error":"Model offline"}"#), "Model offline");
        assert_eq!(error_message(br#"{"error":404}"#), "404");
        assert_eq!(error_message(br#"{"details":"x"}"#), UNKNOWN_ERROR);
        assert_eq!(error_message(b"<html>502</html>"), UNKNOWN_ERROR);
        assert_eq!(error_message(b""), UNKNOWN_ERROR);
    }

    #[test]
    fn test_image_content_type() {
        assert_eq!(image_content_type(Some("image/jpeg")), "image/jpeg");
        assert_eq!(image_content_type(Some("image/png; charset=binary")), "image/png");
        assert_eq!(image_content_type(Some("text/html")), "image/png");
        assert_eq!(image_content_type(Some("image/png\" onerror=\"x")), "image/png");
        assert_eq!(image_content_type(None), "image/png");
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let client = UpstreamClient::new(Url::parse("http://svc.local:5000/").unwrap());
        assert_eq!(
            client.endpoint_url("/api/ai/swap-face").unwrap().as_str(),
            "http://svc.local:5000/api/ai/swap-face"
        );
        let prefixed = UpstreamClient::new(Url::parse("http://svc.local/photo/").unwrap());
        assert_eq!(
            prefixed.endpoint_url("/api/templates/list").unwrap().as_str(),
            "http://svc.local/photo/api/templates/list"
        );
    }
}
