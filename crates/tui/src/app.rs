//! Terminal application state.
//!
//! `App` owns the widget's [`HostAdapter`] and plays the host's part: it
//! loads the data view, delivers construct/update calls, and keeps the
//! latest [`VisualTree`] for the components to draw.

use std::path::{Path, PathBuf};

use pagenav_engine::{LinkEntry, VisualTree};
use pagenav_host::{ActivationOutcome, ConstructOptions, HostAdapter, UpdateKind, UpdateOptions, UpdateOutcome};
use pagenav_types::{Effect, Msg};
use pagenav_util::{DataViewError, read_data_view};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::terminal_host::{StatusLine, TerminalHost};
use crate::ui::components::nav_list::NavListState;
use crate::ui::theme::{self, Theme};

const ELEMENT_NAME: &str = "terminal";

/// Where the data view comes from.
#[derive(Debug, Clone, Default)]
pub struct DataViewSource {
    path: Option<PathBuf>,
    default_page: Option<String>,
}

impl DataViewSource {
    pub fn new(path: Option<PathBuf>, default_page: Option<String>) -> Self {
        Self { path, default_page }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads the current data view. `Ok(None)` means there is no host data.
    pub fn load(&self) -> Result<Option<Value>, DataViewError> {
        read_data_view(self.path.as_deref(), self.default_page.as_deref())
    }
}

pub struct App {
    adapter: HostAdapter<TerminalHost>,
    source: DataViewSource,
    visual: Option<VisualTree>,
    pub nav: NavListState,
    pub theme: Box<dyn Theme>,
}

impl App {
    /// Constructs the widget from `source`. A data view that cannot be read
    /// is logged and the widget starts without host data.
    pub fn new(host: TerminalHost, source: DataViewSource) -> Self {
        let mut options = ConstructOptions::new(ELEMENT_NAME);
        let mut load_error = None;
        match source.load() {
            Ok(view) => options.data_view = view,
            Err(error) => {
                warn!(error = %error, "Failed to load data view; starting with built-in pages");
                load_error = Some(error);
            }
        }

        let mut adapter = HostAdapter::on_construct(host, options);
        if let Some(error) = load_error {
            adapter.host_mut().set_status(StatusLine::error(error.to_string()));
        }

        let mut app = Self {
            adapter,
            source,
            visual: None,
            nav: NavListState::default(),
            theme: theme::load(),
        };
        app.refresh_visual();
        app
    }

    pub fn adapter(&self) -> &HostAdapter<TerminalHost> {
        &self.adapter
    }

    pub fn visual(&self) -> Option<&VisualTree> {
        self.visual.as_ref()
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.adapter.host().status()
    }

    /// Entry under the keyboard cursor.
    pub fn cursor_entry(&self) -> Option<&LinkEntry> {
        self.visual.as_ref()?.entries.get(self.nav.cursor())
    }

    /// Handles an application message. A changed data view is not read here;
    /// it yields [`Effect::Reload`] for the runtime to apply.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.adapter.on_update(&UpdateOptions::of_kind(UpdateKind::Resize));
                Vec::new()
            }
            Msg::DataViewChanged => vec![Effect::Reload],
        }
    }

    /// Executes one effect. Returns `false` when the runtime should exit.
    pub fn apply_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::Activate(page_id) => {
                self.activate(&page_id);
                true
            }
            Effect::Reload => {
                self.reload();
                true
            }
            Effect::Quit => {
                self.adapter.on_destroy();
                self.visual = None;
                false
            }
        }
    }

    /// Re-reads the data view and delivers it as a data update.
    pub fn reload(&mut self) -> Option<UpdateOutcome> {
        let view = match self.source.load() {
            Ok(view) => view,
            Err(error) => {
                warn!(error = %error, "Failed to reload data view; keeping current pages");
                self.adapter.host_mut().set_status(StatusLine::error(error.to_string()));
                return None;
            }
        };

        self.adapter.host_mut().clear_status();
        let options = UpdateOptions {
            data_views: view.into_iter().collect(),
            kind: UpdateKind::Data,
        };
        let outcome = self.adapter.on_update(&options);
        match &outcome {
            UpdateOutcome::Rebuilt => {
                info!(pages = self.adapter.view_model().map_or(0, |view_model| view_model.tree().len()), "Reloaded data view");
                self.adapter.host_mut().set_status(StatusLine::info("Reloaded pages"));
            }
            UpdateOutcome::SettingsOnly => {
                self.adapter.host_mut().set_status(StatusLine::info("Reloaded settings"));
            }
            UpdateOutcome::Retained(_) | UpdateOutcome::Detached => {}
        }
        self.refresh_visual();
        Some(outcome)
    }

    pub fn activate(&mut self, page_id: &str) -> ActivationOutcome {
        let outcome = self.adapter.on_activate(page_id);
        self.refresh_visual();
        outcome
    }

    /// Re-projects the view-model and keeps the cursor on the same page
    /// when it still exists.
    fn refresh_visual(&mut self) {
        let cursor_id = self.cursor_entry().map(|entry| entry.page_id.clone());
        self.visual = self.adapter.render();
        if let Some(visual) = &self.visual {
            self.nav.sync(visual, cursor_id.as_deref());
        }
    }
}
