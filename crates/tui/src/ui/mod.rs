//! Terminal rendering: components, theme and the event loop.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
