//! # Pagenav Host
//!
//! Lifecycle adapter that lets a host drive the navigation widget through
//! construct / update / activate / destroy calls.
//!
//! - **`adapter`**: [`HostAdapter`], one widget instance and its outcomes
//! - **`host`**: the [`Host`] capabilities (url launching, error reporting)
//! - **`options`**: host option shapes and data view extraction
//! - **`settings`**: the display options schema and its lenient parsing

pub mod adapter;
pub mod host;
pub mod options;
pub mod settings;

pub use adapter::{ActivationOutcome, HostAdapter, UpdateOutcome};
pub use host::Host;
pub use options::{ConstructOptions, MAX_NESTING_DEPTH, UpdateKind, UpdateOptions, extract_default, extract_pages};
pub use settings::{
    NAVIGATION_OBJECT, ObjectInstance, OptionSchema, OptionType, SchemaMap, VisualSettings, settings_schema,
};
