//! Non-interactive commands: render the widget once, or describe its
//! settings schema.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::ValueEnum;
use pagenav_engine::{NavigationError, VisualTree};
use pagenav_host::{ConstructOptions, Host, HostAdapter, NAVIGATION_OBJECT, SchemaMap, settings_schema};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

const ELEMENT_NAME: &str = "headless";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Host for one-shot renders: urls are recorded instead of opened.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    launched: Vec<String>,
    reported: Vec<NavigationError>,
}

impl Host for HeadlessHost {
    fn launch_url(&mut self, url: &str) {
        info!(url, "Launch requested");
        self.launched.push(url.to_string());
    }

    fn report(&mut self, error: &NavigationError) {
        warn!(kind = error.kind(), error = %error, "Navigation widget error");
        self.reported.push(error.clone());
    }
}

/// What a headless render produced.
#[derive(Debug, Serialize)]
pub struct RenderReport {
    #[serde(flatten)]
    pub visual: VisualTree,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub launched: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Constructs the widget from `data_view`, replays `activations` in order,
/// and captures the final projection.
pub fn render_view(data_view: Option<Value>, activations: &[String]) -> Result<RenderReport> {
    let mut adapter = HostAdapter::on_construct(
        HeadlessHost::default(),
        ConstructOptions {
            element: ELEMENT_NAME.to_string(),
            data_view,
        },
    );
    for page_id in activations {
        adapter.on_activate(page_id);
    }
    let visual = adapter.render().context("navigation widget is not attached")?;
    adapter.on_destroy();

    let host = adapter.host();
    Ok(RenderReport {
        visual,
        launched: host.launched.clone(),
        errors: host.reported.iter().map(ToString::to_string).collect(),
    })
}

/// Settings schema keyed by object name.
pub fn schema_document() -> BTreeMap<&'static str, &'static SchemaMap> {
    BTreeMap::from([(NAVIGATION_OBJECT, settings_schema())])
}

pub fn to_output<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).context("failed to serialize JSON output")?,
        OutputFormat::Yaml => serde_yaml::to_string(value).context("failed to serialize YAML output")?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_fallback_without_data() {
        let report = render_view(None, &[]).expect("render");
        assert_eq!(report.visual.len(), 2);
        assert_eq!(report.visual.selected_index(), Some(0));
        assert!(report.launched.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn replays_activations_in_order() {
        let view = json!({
            "pages": [
                { "id": "a", "url": "https://example.com/a", "label": "A" },
                { "id": "b", "url": "https://example.com/b", "label": "B" }
            ]
        });
        let activations = vec!["b".to_string(), "ghost".to_string()];
        let report = render_view(Some(view), &activations).expect("render");

        assert_eq!(report.launched, vec!["https://example.com/b".to_string()]);
        assert_eq!(report.errors, vec!["unknown page 'ghost'".to_string()]);
        assert_eq!(report.visual.selected_index(), Some(1));
    }

    #[test]
    fn report_serializes_flat() {
        let report = render_view(None, &[]).expect("render");
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["title"], json!("Pages"));
        assert_eq!(value["entries"][1]["page_id"], json!("newspage"));
        assert!(value.get("launched").is_none());
    }

    #[test]
    fn schema_outputs_in_both_formats() {
        let document = schema_document();
        let json_output = to_output(&document, OutputFormat::Json).expect("json");
        assert!(json_output.contains("\"indentWidth\""), "{json_output}");

        let yaml_output = to_output(&document, OutputFormat::Yaml).expect("yaml");
        assert!(yaml_output.contains("navigation:"), "{yaml_output}");
        assert!(yaml_output.contains("type: integer"), "{yaml_output}");
    }
}
