//! HTML templates and styling for the studio page.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constant
//! - `script` - browser event wiring
//! - `components` - tab bar, feature forms, template swap panel, base page

mod components;
mod script;
mod styles;

pub use components::{
    base_html, feature_form, render_page, swap_button, tab_bar, template_swap_panel,
};
pub use script::SCRIPT;
pub use styles::STYLE;
