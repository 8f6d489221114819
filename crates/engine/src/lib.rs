//! # Pagenav Engine
//!
//! The navigation core: a validated page hierarchy, the selection state
//! machine, the view-model composing the two, and a pure renderer that
//! projects the view-model into a display-agnostic visual tree.
//!
//! ## Usage
//!
//! ```rust
//! use pagenav_engine::{NavigationRenderer, NavigationViewModel};
//! use pagenav_types::PageRecord;
//!
//! let records = vec![
//!     PageRecord::new("home", "https://example.com", "Home"),
//!     PageRecord::new("news", "https://example.com/news", "News"),
//! ];
//! let view_model = NavigationViewModel::rebuild(&records, Some("home"), None)?;
//! let visual = NavigationRenderer::default().render(&view_model);
//! assert_eq!(visual.selected_index(), Some(0));
//! # Ok::<(), pagenav_engine::NavigationError>(())
//! ```
//!
//! ## Architecture
//!
//! - **`page_tree`**: validation and storage of the page hierarchy
//! - **`selection`**: the selected page id and its transitions
//! - **`view_model`**: tree plus selection, flattened into rows
//! - **`render`**: rows projected into a `VisualTree`; activation into a `NavigationIntent`

pub mod defaults;
pub mod error;
pub mod page_tree;
pub mod render;
pub mod selection;
pub mod view_model;

pub use defaults::{FALLBACK_DEFAULT_ID, fallback_records};
pub use error::NavigationError;
pub use page_tree::{Page, PageTree};
pub use render::{DEFAULT_TITLE, LinkEntry, NavigationRenderer, VisualTree};
pub use selection::SelectionState;
pub use view_model::{NavRow, NavigationViewModel};
