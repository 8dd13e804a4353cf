//! Result rendering.
//!
//! A submission's outcome becomes the complete new content of one output
//! region (`<slug>-result`). Content is always replaced, never appended.

use base64::{engine::general_purpose, Engine as _};

/// Marker in front of every failure message.
pub const ERROR_MARKER: &str = "❌ Error: ";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Outcomes
// ============================================================================

/// Binary image returned by a processing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl ImageData {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    /// Self-contained `data:` URI of the image.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    pub fn download_name(&self) -> String {
        let ext = match self.content_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        };
        format!("result.{}", ext)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultPayload {
    Image(ImageData),
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(ResultPayload),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

// ============================================================================
// Regions
// ============================================================================

/// Replacement content for one output region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionUpdate {
    pub region_id: String,
    pub content: String,
}

pub fn region_id(target_id: &str) -> String {
    format!("{}-result", target_id)
}

pub fn display_result(target_id: &str, outcome: &Outcome) -> RegionUpdate {
    let content = match outcome {
        Outcome::Success(ResultPayload::Image(image)) => {
            let uri = image.data_uri();
            format!(
                r#"<div class="success">✅ Success! Image processed</div>
<img src="{uri}" alt="Result">
<a class="download-btn" href="{uri}" download="{name}">Download</a>"#,
                uri = uri,
                name = image.download_name(),
            )
        }
        Outcome::Success(ResultPayload::Message(message)) => {
            format!(r#"<div class="success">✅ {}</div>"#, html_escape(message))
        }
        Outcome::Failure(message) => {
            format!(
                r#"<div class="error">{}{}</div>"#,
                ERROR_MARKER,
                html_escape(message)
            )
        }
    };

    RegionUpdate {
        region_id: region_id(target_id),
        content,
    }
}
