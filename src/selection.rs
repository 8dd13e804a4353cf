//! Template selection and the swap readiness gate.

use serde::Deserialize;

/// Page-local selection state for the template face swap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub face_chosen: bool,
}

impl Selection {
    pub fn new(template_id: Option<String>, face_chosen: bool) -> Self {
        let mut selection = Selection::default();
        if let Some(id) = template_id {
            selection.select_template(id);
        }
        selection.set_face_chosen(face_chosen);
        selection
    }

    /// Replaces any previous choice; blank ids clear the selection.
    pub fn select_template(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.template_id = if id.trim().is_empty() { None } else { Some(id) };
    }

    pub fn clear_template(&mut self) {
        self.template_id = None;
    }

    pub fn set_face_chosen(&mut self, chosen: bool) {
        self.face_chosen = chosen;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.template_id.as_deref() == Some(id)
    }
}

/// Enabled only while a template is selected and a face file is chosen.
pub fn check_swap_ready(selection: &Selection) -> bool {
    selection.template_id.is_some() && selection.face_chosen
}
