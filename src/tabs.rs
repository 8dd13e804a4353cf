//! Panel switching.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Features,
    FaceSwap,
    Templates,
    Advanced,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Features, Tab::FaceSwap, Tab::Templates, Tab::Advanced];

    /// Element id of the panel and the `data-tab` value of its button.
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Features => "features",
            Tab::FaceSwap => "faceswap",
            Tab::Templates => "templates",
            Tab::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Features => "AI Features",
            Tab::FaceSwap => "Face Swap",
            Tab::Templates => "Templates",
            Tab::Advanced => "Advanced",
        }
    }

    /// Unknown names fall back to the default panel.
    pub fn from_name(name: &str) -> Tab {
        Tab::ALL
            .into_iter()
            .find(|t| t.id() == name)
            .unwrap_or_default()
    }
}

/// Outcome of switching to a panel: exactly one panel and one button are
/// active afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSwitch {
    pub active: Tab,
    /// Opening the templates panel always refetches the catalog.
    pub load_gallery: bool,
}

impl TabSwitch {
    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Class attribute for a panel or its button.
    pub fn class_for(&self, base: &str, tab: Tab) -> String {
        if self.is_active(tab) {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    }
}

pub fn switch_tab(target: Tab) -> TabSwitch {
    TabSwitch {
        active: target,
        load_gallery: target == Tab::Templates,
    }
}
