//! The fixed set of processing features.
//!
//! Each `Feature` knows its upstream endpoint, the file fields it requires,
//! the scalar parameter it carries (if any) and the region its result is
//! rendered into. Handlers dispatch on this table instead of branching on
//! feature names.

use crate::tabs::Tab;

// ============================================================================
// Parameter Specs
// ============================================================================

/// A required file field of a feature form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileField {
    pub name: &'static str,
    pub label: &'static str,
}

/// How a scalar parameter is collected and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// One of a fixed option set; the first option is the default.
    Choice(&'static [(&'static str, &'static str)]),
    /// Free text, sent only when non-empty.
    OptionalText { placeholder: &'static str },
    /// Identifier chosen elsewhere on the page (the gallery selection).
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub fn default_value(&self) -> Option<&'static str> {
        match self.kind {
            ParamKind::Choice(options) => options.first().map(|(value, _)| *value),
            ParamKind::OptionalText { .. } | ParamKind::Selected => None,
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self.kind {
            ParamKind::Choice(options) => options.iter().any(|(v, _)| *v == value),
            ParamKind::OptionalText { .. } => true,
            ParamKind::Selected => !value.trim().is_empty(),
        }
    }
}

pub const SCALES: &[(&str, &str)] = &[("2", "2x"), ("4", "4x")];

pub const CARTOON_STYLES: &[(&str, &str)] = &[
    ("general", "General cartoon"),
    ("anime", "Anime"),
    ("japanese", "Japanese"),
];

pub const ART_STYLES: &[(&str, &str)] = &[
    ("oil_painting", "Oil painting"),
    ("watercolor", "Watercolor"),
    ("sketch", "Pencil sketch"),
    ("disney", "Disney / Pixar"),
    ("cartoon", "Cartoon"),
];

pub const TEMPLATE_STYLES: &[(&str, &str)] = &[
    ("ghostface", "Ghostface"),
    ("fashion", "Fashion"),
    ("graduate", "Graduate"),
    ("lovers", "Lovers"),
    ("bikini", "Bikini"),
    ("dating", "Dating"),
    ("profile", "Profile"),
];

const IMAGE: &[FileField] = &[FileField {
    name: "image",
    label: "Image",
}];

const NO_FILES: &[FileField] = &[];

// ============================================================================
// Features
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    TemplateSwap,
    FaceSwap,
    HdUpscale,
    FixOldPhoto,
    Cartoon,
    StyleTransfer,
    RemoveBackground,
    DepthMap,
    Colorize,
    TemplateStyles,
    MuscleEnhance,
    AiHugs,
    FutureBaby,
}

impl Feature {
    pub const ALL: [Feature; 13] = [
        Feature::TemplateSwap,
        Feature::FaceSwap,
        Feature::HdUpscale,
        Feature::FixOldPhoto,
        Feature::Cartoon,
        Feature::StyleTransfer,
        Feature::RemoveBackground,
        Feature::DepthMap,
        Feature::Colorize,
        Feature::TemplateStyles,
        Feature::MuscleEnhance,
        Feature::AiHugs,
        Feature::FutureBaby,
    ];

    /// Identifier used in form ids, result regions and `/submit/{slug}`.
    pub fn slug(&self) -> &'static str {
        match self {
            Feature::TemplateSwap => "template-swap",
            Feature::FaceSwap => "faceswap",
            Feature::HdUpscale => "hd-upscale",
            Feature::FixOldPhoto => "fix-old-photo",
            Feature::Cartoon => "cartoon",
            Feature::StyleTransfer => "style",
            Feature::RemoveBackground => "remove-background",
            Feature::DepthMap => "depth-map",
            Feature::Colorize => "colorize",
            Feature::TemplateStyles => "template",
            Feature::MuscleEnhance => "muscle",
            Feature::AiHugs => "hugs",
            Feature::FutureBaby => "baby",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Feature::TemplateSwap => "Template Face Swap",
            Feature::FaceSwap => "Face Swap",
            Feature::HdUpscale => "HD Upscale",
            Feature::FixOldPhoto => "Fix Old Photo",
            Feature::Cartoon => "Cartoonify",
            Feature::StyleTransfer => "Style Transfer",
            Feature::RemoveBackground => "Remove Background",
            Feature::DepthMap => "Depth Map",
            Feature::Colorize => "Colorize",
            Feature::TemplateStyles => "Template Styles",
            Feature::MuscleEnhance => "Muscle Enhance",
            Feature::AiHugs => "AI Hugs",
            Feature::FutureBaby => "Future Baby",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Feature::TemplateSwap => "/api/templates/face-swap",
            Feature::FaceSwap => "/api/ai/swap-face",
            Feature::HdUpscale => "/api/ai/hd-image",
            Feature::FixOldPhoto => "/api/ai/fix-old-photo",
            Feature::Cartoon => "/api/ai/cartoonify",
            Feature::StyleTransfer => "/api/ai/style-transfer",
            Feature::RemoveBackground => "/api/advanced/remove-background",
            Feature::DepthMap => "/api/advanced/depth-map",
            Feature::Colorize => "/api/advanced/colorize",
            Feature::TemplateStyles => "/api/advanced/template-styles",
            Feature::MuscleEnhance => "/api/advanced/muscle-enhance",
            Feature::AiHugs => "/api/advanced/ai-hugs",
            Feature::FutureBaby => "/api/advanced/future-baby",
        }
    }

    /// Files that must be present before anything is sent.
    pub fn file_fields(&self) -> &'static [FileField] {
        match self {
            Feature::TemplateSwap => &[FileField {
                name: "face_image",
                label: "Your face",
            }],
            Feature::FaceSwap => &[
                FileField {
                    name: "source_image",
                    label: "Source face",
                },
                FileField {
                    name: "target_image",
                    label: "Target image",
                },
            ],
            Feature::HdUpscale
            | Feature::FixOldPhoto
            | Feature::Cartoon
            | Feature::StyleTransfer
            | Feature::RemoveBackground
            | Feature::DepthMap
            | Feature::Colorize => IMAGE,
            Feature::TemplateStyles
            | Feature::MuscleEnhance
            | Feature::AiHugs
            | Feature::FutureBaby => NO_FILES,
        }
    }

    pub fn param(&self) -> Option<ParamSpec> {
        let spec = match self {
            Feature::TemplateSwap => ParamSpec {
                name: "template_id",
                label: "Template",
                kind: ParamKind::Selected,
            },
            Feature::HdUpscale => ParamSpec {
                name: "scale",
                label: "Scale",
                kind: ParamKind::Choice(SCALES),
            },
            Feature::Cartoon => ParamSpec {
                name: "style",
                label: "Cartoon style",
                kind: ParamKind::Choice(CARTOON_STYLES),
            },
            Feature::StyleTransfer => ParamSpec {
                name: "style",
                label: "Art style",
                kind: ParamKind::Choice(ART_STYLES),
            },
            Feature::TemplateStyles => ParamSpec {
                name: "template",
                label: "Template",
                kind: ParamKind::Choice(TEMPLATE_STYLES),
            },
            Feature::MuscleEnhance | Feature::AiHugs | Feature::FutureBaby => ParamSpec {
                name: "prompt",
                label: "Prompt (optional)",
                kind: ParamKind::OptionalText {
                    placeholder: "Describe the image, or leave empty for the default",
                },
            },
            Feature::FaceSwap
            | Feature::FixOldPhoto
            | Feature::RemoveBackground
            | Feature::DepthMap
            | Feature::Colorize => return None,
        };
        Some(spec)
    }

    /// Message shown when required input is missing.
    pub fn missing_input_message(&self) -> &'static str {
        match self {
            Feature::TemplateSwap => "Please select a template and upload a face image",
            Feature::FaceSwap => "Please select both source and target images",
            _ => "Please select an image first",
        }
    }

    /// Panel the feature's form lives on.
    pub fn tab(&self) -> Tab {
        match self {
            Feature::TemplateSwap => Tab::Templates,
            Feature::FaceSwap => Tab::FaceSwap,
            Feature::HdUpscale
            | Feature::FixOldPhoto
            | Feature::Cartoon
            | Feature::StyleTransfer => Tab::Features,
            Feature::RemoveBackground
            | Feature::DepthMap
            | Feature::Colorize
            | Feature::TemplateStyles
            | Feature::MuscleEnhance
            | Feature::AiHugs
            | Feature::FutureBaby => Tab::Advanced,
        }
    }

    pub fn on_tab(tab: Tab) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |f| f.tab() == tab)
    }
}
