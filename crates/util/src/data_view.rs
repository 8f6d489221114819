//! Reading host data views from disk.
//!
//! A data view file holds the same JSON object a host would hand the widget
//! (`pages`, `default`, `objects`). YAML is accepted for `.yaml`/`.yml` files
//! and converted to JSON values.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::path_processing::is_yaml_path;

const DEFAULT_KEY: &str = "default";

/// Error surfaced when a data view file cannot be loaded.
#[derive(Debug, Error)]
pub enum DataViewError {
    #[error("failed to read data view {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse data view {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl DataViewError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Loads the data view stored at `path`.
///
/// A blank file yields `Value::Null`, which the widget treats as "no data".
pub fn load_data_view(path: &Path) -> Result<Value, DataViewError> {
    let contents = fs::read_to_string(path).map_err(|source| DataViewError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = parse_data_view(&contents, is_yaml_path(path)).map_err(|message| DataViewError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Loaded data view");
    Ok(value)
}

/// Loads the view at `path`, if any, and applies a default page override.
///
/// `Ok(None)` means there is neither a file nor an override: the widget
/// starts without host data.
pub fn read_data_view(path: Option<&Path>, default_page: Option<&str>) -> Result<Option<Value>, DataViewError> {
    let view = path.map(load_data_view).transpose()?;
    Ok(match default_page {
        Some(page_id) => Some(overlay_default(view.unwrap_or(Value::Null), page_id)),
        None => view,
    })
}

/// Parses data view text as YAML or JSON.
pub fn parse_data_view(contents: &str, yaml: bool) -> Result<Value, String> {
    if contents.trim().is_empty() {
        return Ok(Value::Null);
    }
    if yaml {
        serde_yaml::from_str(contents).map_err(|error| error.to_string())
    } else {
        serde_json::from_str(contents).map_err(|error| error.to_string())
    }
}

/// Sets the view's declared default page, replacing any value already there.
///
/// A null view becomes an object carrying only the default. Views of any
/// other shape are returned untouched so the widget can report them.
pub fn overlay_default(view: Value, page_id: &str) -> Value {
    match view {
        Value::Null => {
            let mut object = Map::new();
            object.insert(DEFAULT_KEY.to_string(), Value::String(page_id.to_string()));
            Value::Object(object)
        }
        Value::Object(mut object) => {
            object.insert(DEFAULT_KEY.to_string(), Value::String(page_id.to_string()));
            Value::Object(object)
        }
        other => other,
    }
}
