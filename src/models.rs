//! Data structures for the template catalog and the processing service's
//! JSON envelopes.
//!
//! The catalog is always held in the grouped form (one ordered list per
//! category). The listing endpoint may answer either grouped or flat; both
//! are normalized here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Categories
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Female,
    Male,
    Mixed,
}

impl Category {
    /// Display order of the gallery.
    pub const ALL: [Category; 3] = [Category::Female, Category::Male, Category::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Female => "female",
            Category::Male => "male",
            Category::Mixed => "mixed",
        }
    }

    /// Capitalized label used as the gallery group header.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Female => "Female",
            Category::Male => "Male",
            Category::Mixed => "Mixed",
        }
    }

    /// Case-insensitive lookup; the flat listing sends "Female", the grouped
    /// one uses "female".
    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

// ============================================================================
// Templates
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Entry of the flat listing form: `{id, name, imageUrl, category}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatTemplate {
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    #[serde(default)]
    pub female: Vec<Template>,
    #[serde(default)]
    pub male: Vec<Template>,
    #[serde(default)]
    pub mixed: Vec<Template>,
}

impl TemplateCatalog {
    pub fn templates(&self, category: Category) -> &[Template] {
        match category {
            Category::Female => &self.female,
            Category::Male => &self.male,
            Category::Mixed => &self.mixed,
        }
    }

    fn templates_mut(&mut self, category: Category) -> &mut Vec<Template> {
        match category {
            Category::Female => &mut self.female,
            Category::Male => &mut self.male,
            Category::Mixed => &mut self.mixed,
        }
    }

    /// Non-empty groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = (Category, &[Template])> {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.templates(c)))
            .filter(|(_, items)| !items.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.groups().next().is_none()
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.templates(*c).len()).sum()
    }

    /// Group flat entries by category, keeping their relative order.
    /// Entries whose category is not one of the known three are dropped.
    pub fn from_flat(entries: Vec<FlatTemplate>) -> Self {
        let mut catalog = TemplateCatalog::default();
        for entry in entries {
            if let Some(category) = Category::parse(&entry.category) {
                catalog.templates_mut(category).push(Template {
                    id: entry.id,
                    name: entry.name,
                    url: entry.image_url,
                });
            }
        }
        catalog
    }
}

// ============================================================================
// Envelopes
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TemplatesPayload {
    Grouped(TemplateCatalog),
    Flat(Vec<FlatTemplate>),
}

/// `GET /api/templates/list` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub templates: Option<TemplatesPayload>,
}

impl ListEnvelope {
    /// The catalog, if this is a recognized success envelope.
    pub fn into_catalog(self) -> Option<TemplateCatalog> {
        if self.status.as_deref() != Some("success") {
            return None;
        }
        match self.templates? {
            TemplatesPayload::Grouped(catalog) => Some(catalog),
            TemplatesPayload::Flat(entries) => Some(TemplateCatalog::from_flat(entries)),
        }
    }
}

/// Error body of the processing endpoints. Anything but a non-empty string
/// in `error` counts as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<Value>,
}

impl ErrorEnvelope {
    /// The `error` field as display text. Strings are kept as they are and
    /// other truthy scalars are printed; null, `false`, `0`, `""` and
    /// structured values count as absent.
    pub fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}
