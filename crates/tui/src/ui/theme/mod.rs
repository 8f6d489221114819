//! Theme styling for the terminal host.
//!
//! Semantic roles plus the Dracula palettes. Prefer the role-based styles
//! over hard-coded colors.

use std::env;

use tracing::debug;

pub mod dracula;
pub mod roles;
pub mod theme_helpers;

pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use roles::Theme;

/// Environment variable selecting the palette (`dracula`, `dracula-hc`).
pub const THEME_ENV: &str = "PAGENAV_THEME";

/// Selects the palette named by [`THEME_ENV`], defaulting to Dracula.
pub fn load() -> Box<dyn Theme> {
    let requested = env::var(THEME_ENV).unwrap_or_default();
    match requested.trim().to_ascii_lowercase().as_str() {
        "dracula-hc" | "dracula_high_contrast" => Box::new(DraculaThemeHighContrast::new()),
        "" | "dracula" => Box::new(DraculaTheme::new()),
        other => {
            debug!(theme = other, "Unknown theme requested; using Dracula");
            Box::new(DraculaTheme::new())
        }
    }
}
