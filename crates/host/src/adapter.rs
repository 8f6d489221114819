//! The seam between a host's lifecycle calls and the navigation core.
//!
//! A [`HostAdapter`] owns exactly one widget instance: its view-model,
//! renderer configuration and settings. Every entry point returns normally;
//! validation failures are handed to [`Host::report`] and surfaced as outcome
//! values, never as errors across the host boundary.

use pagenav_engine::{
    FALLBACK_DEFAULT_ID, NavigationError, NavigationRenderer, NavigationViewModel, VisualTree, fallback_records,
};
use pagenav_types::{NavigationIntent, PageRecord};
use serde_json::Value;
use tracing::{debug, info};

use crate::host::Host;
use crate::options::{ConstructOptions, UpdateOptions, extract_default, extract_pages};
use crate::settings::{ObjectInstance, VisualSettings};

/// Result of delivering a host update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A new view-model replaced the previous one.
    Rebuilt,
    /// The update carried no page data; only settings were refreshed.
    SettingsOnly,
    /// The update was rejected and the previous view-model kept.
    Retained(NavigationError),
    /// The widget was already destroyed.
    Detached,
}

/// Result of a user activating a rendered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    Launched(NavigationIntent),
    /// The click referred to a page that no longer exists.
    Ignored(NavigationError),
    Detached,
}

#[derive(Debug)]
pub struct HostAdapter<H: Host> {
    host: H,
    element: String,
    view_model: Option<NavigationViewModel>,
    renderer: NavigationRenderer,
    settings: VisualSettings,
    update_count: u64,
}

impl<H: Host> HostAdapter<H> {
    /// Builds the widget's first view-model.
    ///
    /// Never fails: absent data shows the built-in pages, and malformed data
    /// is reported and replaced by them.
    pub fn on_construct(host: H, options: ConstructOptions) -> Self {
        let data_view = options.data_view.as_ref();
        let settings = VisualSettings::parse(data_view);
        let mut adapter = Self {
            host,
            element: options.element,
            view_model: None,
            renderer: NavigationRenderer::new(settings.title.clone()),
            settings,
            update_count: 0,
        };

        let initial = extract_pages(data_view)
            .and_then(|records| next_view_model(&adapter.settings, records.unwrap_or_default(), data_view, None));
        let view_model = match initial {
            Ok(view_model) => view_model,
            Err(error) => {
                adapter.host.report(&error);
                next_view_model(&adapter.settings, Vec::new(), data_view, None)
                    .unwrap_or_else(|_| NavigationViewModel::fallback())
            }
        };

        info!(
            element = %adapter.element,
            pages = view_model.tree().len(),
            selected = view_model.selection().selected_id().unwrap_or("<none>"),
            "Constructed navigation widget"
        );
        adapter.view_model = Some(view_model);
        adapter
    }

    /// Applies a host update.
    ///
    /// Settings are re-read whenever a data view is supplied. Page data, when
    /// present, is rebuilt into a replacement view-model. A rejected update
    /// changes nothing: the previous view-model, settings and title stay in
    /// place.
    pub fn on_update(&mut self, options: &UpdateOptions) -> UpdateOutcome {
        let Some(previous) = self.view_model.as_ref() else {
            debug!(element = %self.element, "Ignoring update for destroyed widget");
            return UpdateOutcome::Detached;
        };
        self.update_count += 1;

        let data_view = options.data_view();
        let settings = match data_view {
            Some(_) => VisualSettings::parse(data_view),
            None => self.settings.clone(),
        };

        let next = match extract_pages(data_view) {
            Ok(None) => {
                debug!(element = %self.element, kind = ?options.kind, "Update carried no page data");
                self.apply_settings(settings);
                return UpdateOutcome::SettingsOnly;
            }
            Ok(Some(records)) => next_view_model(&settings, records, data_view, Some(previous)),
            Err(error) => Err(error),
        };

        match next {
            Ok(view_model) => {
                debug!(
                    element = %self.element,
                    update = self.update_count,
                    pages = view_model.tree().len(),
                    "Applied navigation update"
                );
                self.view_model = Some(view_model);
                self.apply_settings(settings);
                UpdateOutcome::Rebuilt
            }
            Err(error) => {
                self.host.report(&error);
                UpdateOutcome::Retained(error)
            }
        }
    }

    /// Handles a user activating the entry for `page_id`.
    ///
    /// On success the selection moves to that page and its url is launched.
    /// Nothing is redrawn here; the host decides when to render again.
    pub fn on_activate(&mut self, page_id: &str) -> ActivationOutcome {
        let Some(current) = self.view_model.as_ref() else {
            debug!(element = %self.element, page_id, "Ignoring activation for destroyed widget");
            return ActivationOutcome::Detached;
        };

        let activated = self
            .renderer
            .on_activate(current, page_id)
            .and_then(|intent| current.with_selection(page_id).map(|next| (intent, next)));
        match activated {
            Ok((intent, next)) => {
                self.view_model = Some(next);
                self.launch(&intent);
                ActivationOutcome::Launched(intent)
            }
            Err(error) => {
                self.host.report(&error);
                ActivationOutcome::Ignored(error)
            }
        }
    }

    /// Releases the view-model; later calls become no-ops. Idempotent.
    pub fn on_destroy(&mut self) {
        if self.view_model.take().is_some() {
            info!(element = %self.element, updates = self.update_count, "Destroyed navigation widget");
        }
    }

    /// Projects the current view-model, or `None` once destroyed.
    pub fn render(&self) -> Option<VisualTree> {
        self.view_model.as_ref().map(|view_model| self.renderer.render(view_model))
    }

    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<ObjectInstance> {
        self.settings.enumerate_object_instances(object_name)
    }

    pub fn view_model(&self) -> Option<&NavigationViewModel> {
        self.view_model.as_ref()
    }

    pub fn settings(&self) -> &VisualSettings {
        &self.settings
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    /// Number of `on_update` calls delivered while attached.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    pub fn is_attached(&self) -> bool {
        self.view_model.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn launch(&mut self, intent: &NavigationIntent) {
        info!(element = %self.element, page_id = %intent.page_id, url = %intent.url, "Launching page");
        self.host.launch_url(&intent.url);
    }

    fn apply_settings(&mut self, settings: VisualSettings) {
        self.renderer = NavigationRenderer::new(settings.title.clone());
        self.settings = settings;
    }
}

/// Builds the replacement view-model for `records`, substituting the built-in
/// pages for an empty list.
fn next_view_model(
    settings: &VisualSettings,
    records: Vec<PageRecord>,
    data_view: Option<&Value>,
    previous: Option<&NavigationViewModel>,
) -> Result<NavigationViewModel, NavigationError> {
    let declared_default = settings.default_page.clone().or_else(|| extract_default(data_view));
    if !records.is_empty() {
        return NavigationViewModel::rebuild(&records, declared_default.as_deref(), previous);
    }

    let fallback = fallback_records();
    let fallback_default = declared_default
        .as_deref()
        .filter(|id| fallback.iter().any(|record| record.id == *id))
        .unwrap_or(FALLBACK_DEFAULT_ID);
    NavigationViewModel::rebuild(&fallback, Some(fallback_default), previous)
}
