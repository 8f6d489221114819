//! User-configurable display options.
//!
//! The schema is static so a host can build a property pane without
//! instantiating the widget. Values arrive inside the data view under
//! `objects.navigation` and are parsed leniently: a bad settings object never
//! blocks an update, it just yields defaults.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use pagenav_engine::DEFAULT_TITLE;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::warn;

/// Name of the only settings object the widget exposes.
pub const NAVIGATION_OBJECT: &str = "navigation";

const DEFAULT_INDENT_WIDTH: u16 = 2;
const MAX_INDENT_WIDTH: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Text,
    Integer,
}

/// Declared type and default of one option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSchema {
    #[serde(rename = "type")]
    pub kind: OptionType,
    pub default: Value,
    #[serde(rename = "displayName")]
    pub display_name: &'static str,
}

/// Option name to its schema, in declaration order.
pub type SchemaMap = IndexMap<&'static str, OptionSchema>;

static NAVIGATION_SCHEMA: Lazy<SchemaMap> = Lazy::new(|| {
    IndexMap::from([
        (
            "defaultPage",
            OptionSchema {
                kind: OptionType::Text,
                default: json!(""),
                display_name: "Default page",
            },
        ),
        (
            "title",
            OptionSchema {
                kind: OptionType::Text,
                default: json!(DEFAULT_TITLE),
                display_name: "Title",
            },
        ),
        (
            "indentWidth",
            OptionSchema {
                kind: OptionType::Integer,
                default: json!(DEFAULT_INDENT_WIDTH),
                display_name: "Indent width",
            },
        ),
    ])
});

/// Options of the `navigation` object, keyed by option name.
pub fn settings_schema() -> &'static SchemaMap {
    &NAVIGATION_SCHEMA
}

/// One object's current values, as handed to a property pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectInstance {
    #[serde(rename = "objectName")]
    pub object_name: String,
    pub properties: IndexMap<String, Value>,
}

/// Parsed display options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualSettings {
    /// Overrides the data view's declared default page.
    pub default_page: Option<String>,
    pub title: String,
    pub indent_width: u16,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            default_page: None,
            title: DEFAULT_TITLE.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NavigationObject {
    default_page: Option<String>,
    title: Option<String>,
    indent_width: Option<u16>,
}

impl VisualSettings {
    /// Reads `objects.navigation` from a data view, falling back to defaults
    /// for anything missing or malformed.
    pub fn parse(data_view: Option<&Value>) -> Self {
        let Some(object) = data_view
            .and_then(|view| view.get("objects"))
            .and_then(|objects| objects.get(NAVIGATION_OBJECT))
        else {
            return Self::default();
        };

        let parsed = match NavigationObject::deserialize(object) {
            Ok(parsed) => parsed,
            Err(error) => {
                warn!(error = %error, "Failed to parse navigation settings; using defaults");
                NavigationObject::default()
            }
        };

        let defaults = Self::default();
        Self {
            default_page: parsed
                .default_page
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            title: parsed
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(defaults.title),
            indent_width: parsed.indent_width.map_or(defaults.indent_width, |width| width.min(MAX_INDENT_WIDTH)),
        }
    }

    /// Current values for the named object; unknown objects have none.
    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<ObjectInstance> {
        if object_name != NAVIGATION_OBJECT {
            return Vec::new();
        }
        let properties = IndexMap::from([
            ("defaultPage".to_string(), json!(self.default_page.as_deref().unwrap_or(""))),
            ("title".to_string(), json!(self.title)),
            ("indentWidth".to_string(), json!(self.indent_width)),
        ]);
        vec![ObjectInstance {
            object_name: NAVIGATION_OBJECT.to_string(),
            properties,
        }]
    }
}
