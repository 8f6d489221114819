//! Vertical page list.
//!
//! Renders the widget's `VisualTree` one row per entry, indented by depth.
//! Supports:
//! - Keyboard navigation (Up/Down/PageUp/PageDown/Home/End, Enter to activate)
//! - Mouse activation via per-row hit testing, wheel scrolling
//! - Theming via `ui::theme::theme_helpers`

mod nav_list_component;
mod state;

pub use nav_list_component::NavListComponent;
pub use state::NavListState;
