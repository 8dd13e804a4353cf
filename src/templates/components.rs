//! HTML components of the studio page: tab bar, panels, feature forms, the
//! template swap panel and the base document.

use crate::features::{Feature, ParamKind};
use crate::gallery::{render_gallery, GalleryView};
use crate::render::{html_escape, region_id};
use crate::selection::{check_swap_ready, Selection};
use crate::tabs::{Tab, TabSwitch};

use super::script::SCRIPT;
use super::styles::STYLE;

// ============================================================================
// Base Template
// ============================================================================

pub fn base_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <h1>AI Photo Studio</h1>
        <p class="subtitle">Upload a photo, pick a feature, download the result.</p>
        {body}
    </div>
    <div class="loading" id="loading">
        <div class="spinner"></div>
        <p>Processing...</p>
    </div>
    {script}
</body>
</html>"#,
        title = html_escape(title),
        style = STYLE,
        body = body,
        script = SCRIPT,
    )
}

// ============================================================================
// Tabs
// ============================================================================

pub fn tab_bar(switch: &TabSwitch) -> String {
    let mut html = String::from(r#"<nav class="tabs">"#);
    for tab in Tab::ALL {
        html.push_str(&format!(
            r#"<a href="/?tab={id}" class="{class}" data-tab="{id}" onclick="return switchTab(this)">{label}</a>"#,
            id = tab.id(),
            class = switch.class_for("tab-btn", tab),
            label = tab.label(),
        ));
    }
    html.push_str("</nav>");
    html
}

// ============================================================================
// Feature Forms
// ============================================================================

fn field_id(feature: Feature, name: &str) -> String {
    format!("{}-{}", feature.slug(), name)
}

fn param_control(feature: Feature) -> String {
    let Some(spec) = feature.param() else {
        return String::new();
    };
    let id = field_id(feature, spec.name);

    match spec.kind {
        ParamKind::Choice(options) => {
            let mut opts = String::new();
            for (value, label) in options {
                opts.push_str(&format!(
                    r#"<option value="{}">{}</option>"#,
                    value,
                    html_escape(label)
                ));
            }
            format!(
                r#"<div class="field"><label for="{id}">{label}</label><select id="{id}" name="{name}">{opts}</select></div>"#,
                id = id,
                label = spec.label,
                name = spec.name,
                opts = opts,
            )
        }
        ParamKind::OptionalText { placeholder } => format!(
            r#"<div class="field"><label for="{id}">{label}</label><input type="text" id="{id}" name="{name}" placeholder="{placeholder}"></div>"#,
            id = id,
            label = spec.label,
            name = spec.name,
            placeholder = html_escape(placeholder),
        ),
        ParamKind::Selected => String::new(),
    }
}

fn file_controls(feature: Feature) -> String {
    feature
        .file_fields()
        .iter()
        .map(|field| {
            format!(
                r#"<div class="field"><label for="{id}">{label}</label><input type="file" id="{id}" name="{name}" accept="image/*"></div>"#,
                id = field_id(feature, field.name),
                label = field.label,
                name = field.name,
            )
        })
        .collect()
}

/// Card with the inputs of one feature and its (initially empty) result
/// region.
pub fn feature_form(feature: Feature) -> String {
    format!(
        r#"<div class="feature-card">
    <h3>{title}</h3>
    <form id="{slug}-form" data-feature="{slug}" enctype="multipart/form-data" onsubmit="submitFeature(this); return false;">
        {files}
        {param}
        <button type="submit" class="btn">{title}</button>
    </form>
    <div id="{region}" class="result"></div>
</div>"#,
        title = feature.title(),
        slug = feature.slug(),
        files = file_controls(feature),
        param = param_control(feature),
        region = region_id(feature.slug()),
    )
}

// ============================================================================
// Template Swap
// ============================================================================

/// The swap control, enabled only when `check_swap_ready` holds.
pub fn swap_button(selection: &Selection) -> String {
    let disabled = if check_swap_ready(selection) { "" } else { " disabled" };
    format!(
        r#"<button type="submit" id="swap-btn" class="btn"{}>Swap Face</button>"#,
        disabled
    )
}

pub fn template_swap_panel(selection: &Selection, gallery: Option<&GalleryView>) -> String {
    let feature = Feature::TemplateSwap;
    let gallery_html = gallery
        .map(|view| render_gallery(view, selection))
        .unwrap_or_default();
    let selected = selection.template_id.as_deref().unwrap_or("");

    format!(
        r#"<div class="feature-card">
    <h3>1. Pick a template</h3>
    <div id="template-gallery" class="template-gallery">{gallery}</div>
    <h3>2. Upload your face</h3>
    <form id="{slug}-form" data-feature="{slug}" enctype="multipart/form-data" onsubmit="submitFeature(this); return false;">
        <input type="hidden" id="{template_field}" name="template_id" value="{selected}">
        <div class="field"><input type="file" id="{face_field}" name="face_image" accept="image/*" onchange="previewFace(this)"></div>
        <div id="face-preview" class="face-preview"></div>
        <span id="swap-btn-slot">{button}</span>
    </form>
    <div id="{region}" class="result"></div>
</div>"#,
        gallery = gallery_html,
        slug = feature.slug(),
        template_field = field_id(feature, "template_id"),
        face_field = field_id(feature, "face_image"),
        selected = html_escape(selected),
        button = swap_button(selection),
        region = region_id(feature.slug()),
    )
}

// ============================================================================
// Page
// ============================================================================

fn panel_body(tab: Tab, selection: &Selection, gallery: Option<&GalleryView>) -> String {
    match tab {
        Tab::Templates => template_swap_panel(selection, gallery),
        _ => {
            let forms: String = Feature::on_tab(tab).map(feature_form).collect();
            format!(r#"<div class="feature-grid">{}</div>"#, forms)
        }
    }
}

/// Full page with every panel; only the switched-to panel is active. The
/// gallery is embedded when the switch asked for a load.
pub fn render_page(switch: &TabSwitch, selection: &Selection, gallery: Option<&GalleryView>) -> String {
    let mut body = tab_bar(switch);
    for tab in Tab::ALL {
        body.push_str(&format!(
            r#"<section id="{id}" class="{class}">{content}</section>"#,
            id = tab.id(),
            class = switch.class_for("tab-content", tab),
            content = panel_body(tab, selection, gallery),
        ));
    }
    base_html(&format!("AI Photo Studio - {}", switch.active.label()), &body)
}
