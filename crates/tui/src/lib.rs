//! # Pagenav TUI
//!
//! Terminal host for the navigation widget. It plays the host's part of the
//! lifecycle: constructs the widget from a data view file, delivers updates
//! when the file changes or on request, draws the projected list with
//! ratatui, and opens activated pages in the system browser.
//!
//! ## Architecture
//!
//! - **`app`**: `App`, owning the `HostAdapter` and the current `VisualTree`
//! - **`terminal_host`**: the `Host` implementation (url opener, status line)
//! - **`ui`**: components, theme and the event loop
//! - **`watcher`**: file-system watch on the data view

mod app;
mod terminal_host;
mod ui;
mod watcher;

use std::path::PathBuf;

use anyhow::Result;

pub use app::{App, DataViewSource};
pub use terminal_host::{StatusLine, TerminalHost};

/// Settings for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    /// Data view file; `None` starts with the built-in pages.
    pub pages_path: Option<PathBuf>,
    /// Overrides the data view's declared default page.
    pub default_page: Option<String>,
    /// Reload whenever the data view file changes.
    pub watch: bool,
}

/// Runs the interactive terminal host until the user quits.
pub async fn run(options: TuiOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
