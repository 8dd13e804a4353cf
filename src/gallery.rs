//! Template gallery loading and rendering.

use crate::models::TemplateCatalog;
use crate::render::html_escape;
use crate::selection::Selection;
use crate::submit::{CatalogError, UpstreamClient};
use tracing::{info, warn};

pub const FAILED_MESSAGE: &str = "Failed to load templates";
pub const ERROR_MESSAGE: &str = "Error loading templates";

/// What the gallery region shows after one load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    Loaded(TemplateCatalog),
    /// The service answered without a success envelope.
    Unsuccessful,
    /// The request failed or the body could not be decoded.
    Unreachable,
}

/// One catalog read, no retry.
pub async fn load_templates(client: &UpstreamClient) -> GalleryView {
    match client.list_templates().await {
        Ok(catalog) => {
            info!(templates = catalog.len(), "template catalog loaded");
            GalleryView::Loaded(catalog)
        }
        Err(CatalogError::Unsuccessful) => {
            warn!("template listing returned an unsuccessful envelope");
            GalleryView::Unsuccessful
        }
        Err(CatalogError::Transport(e)) => {
            warn!(error = %e, "template listing failed");
            GalleryView::Unreachable
        }
    }
}

/// Inner content of `#template-gallery`. Empty categories get no header;
/// only the item matching the selection carries the `selected` class.
pub fn render_gallery(view: &GalleryView, selection: &Selection) -> String {
    let catalog = match view {
        GalleryView::Loaded(catalog) => catalog,
        GalleryView::Unsuccessful => return format!("<p>{}</p>", FAILED_MESSAGE),
        GalleryView::Unreachable => return format!("<p>{}</p>", ERROR_MESSAGE),
    };

    let mut html = String::new();
    for (category, templates) in catalog.groups() {
        html.push_str(&format!(
            r#"<h4 class="category-title">{}</h4>"#,
            category.label()
        ));
        for template in templates {
            let class = if selection.is_selected(&template.id) {
                "template-item selected"
            } else {
                "template-item"
            };
            html.push_str(&format!(
                r#"<div class="{class}" data-template-id="{id}" onclick="selectTemplate(this)">
    <img src="{url}" alt="{name}">
    <div class="template-name">{name}</div>
</div>"#,
                class = class,
                id = html_escape(&template.id),
                url = html_escape(&template.url),
                name = html_escape(&template.name),
            ));
        }
    }
    html
}
