//! [`Host`] implementation for the terminal.
//!
//! Urls are handed to the system opener; reports go to the log and to a
//! one-line status shown under the list.

use std::io;

use pagenav_engine::NavigationError;
use pagenav_host::Host;
use tracing::warn;

type Launcher = fn(&str) -> io::Result<()>;

/// Message shown in the status strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

#[derive(Debug)]
pub struct TerminalHost {
    launcher: Launcher,
    status: Option<StatusLine>,
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalHost {
    /// Host that opens urls with the platform's default handler.
    pub fn new() -> Self {
        Self::with_launcher(|url| open::that_detached(url))
    }

    pub fn with_launcher(launcher: Launcher) -> Self {
        Self { launcher, status: None }
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: StatusLine) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

impl Host for TerminalHost {
    fn launch_url(&mut self, url: &str) {
        match (self.launcher)(url) {
            Ok(()) => self.set_status(StatusLine::info(format!("Opened {url}"))),
            Err(error) => {
                warn!(url, error = %error, "Failed to open url");
                self.set_status(StatusLine::error(format!("Could not open {url}: {error}")));
            }
        }
    }

    fn report(&mut self, error: &NavigationError) {
        warn!(kind = error.kind(), error = %error, "Navigation widget error");
        self.set_status(StatusLine::error(error.to_string()));
    }
}
