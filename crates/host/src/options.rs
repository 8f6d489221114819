//! Host-shaped lifecycle options and their conversion into core records.
//!
//! Hosts hand the widget loosely typed JSON "data views". This module is the
//! only place that knows their shape; everything past it speaks
//! [`PageRecord`].

use pagenav_engine::NavigationError;
use pagenav_types::{ChildRef, PageRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Deepest inline page nesting accepted from a host. Converting and dropping
/// records recurses once per level, so deeper input is rejected up front.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Options passed once when the host constructs the widget.
#[derive(Debug, Clone, Default)]
pub struct ConstructOptions {
    /// Name of the container the widget is attached to.
    pub element: String,
    /// Initial data view, when the host has one.
    pub data_view: Option<Value>,
}

impl ConstructOptions {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            data_view: None,
        }
    }

    pub fn with_data_view(mut self, data_view: Value) -> Self {
        self.data_view = Some(data_view);
        self
    }
}

/// What prompted an update call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    #[default]
    Data,
    Resize,
    Style,
    All,
}

/// Options passed on every host update.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub data_views: Vec<Value>,
    pub kind: UpdateKind,
}

impl UpdateOptions {
    pub fn from_data_view(data_view: Value) -> Self {
        Self {
            data_views: vec![data_view],
            kind: UpdateKind::Data,
        }
    }

    /// Update that carries no data views.
    pub fn of_kind(kind: UpdateKind) -> Self {
        Self {
            data_views: Vec::new(),
            kind,
        }
    }

    /// The data view the widget reads; additional views are ignored.
    pub fn data_view(&self) -> Option<&Value> {
        self.data_views.first()
    }
}

/// Host page record. Accepts the core field names plus common host aliases.
#[derive(Debug, Deserialize)]
struct HostPage {
    #[serde(alias = "name")]
    id: String,
    #[serde(alias = "link", alias = "href")]
    url: String,
    #[serde(alias = "displayName", alias = "title")]
    label: String,
    #[serde(default)]
    children: Vec<HostChild>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HostChild {
    Id(String),
    Page(HostPage),
}

impl From<HostPage> for PageRecord {
    fn from(page: HostPage) -> Self {
        PageRecord {
            id: page.id,
            url: page.url,
            label: page.label,
            children: page
                .children
                .into_iter()
                .map(|child| match child {
                    HostChild::Id(id) => ChildRef::Id(id),
                    HostChild::Page(page) => ChildRef::Page(page.into()),
                })
                .collect(),
        }
    }
}

/// Extracts page records from a data view.
///
/// `Ok(None)` means the view carries no page data at all, which is a valid
/// input. A present but unusable `pages` value is a shape error, as is inline
/// nesting deeper than [`MAX_NESTING_DEPTH`].
pub fn extract_pages(data_view: Option<&Value>) -> Result<Option<Vec<PageRecord>>, NavigationError> {
    let Some(object) = data_view_object(data_view)? else {
        return Ok(None);
    };
    let Some(pages) = object.get("pages") else {
        return Ok(None);
    };
    if pages.is_null() {
        return Ok(None);
    }
    check_nesting_depth(pages)?;
    let host_pages = Vec::<HostPage>::deserialize(pages).map_err(|error| NavigationError::HostDataShape {
        reason: format!("pages: {error}"),
    })?;
    Ok(Some(host_pages.into_iter().map(PageRecord::from).collect()))
}

/// Reads the data view's declared default page id.
///
/// Blank or non-text values are ignored.
pub fn extract_default(data_view: Option<&Value>) -> Option<String> {
    let object = data_view.and_then(Value::as_object)?;
    match object.get("default")? {
        Value::String(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
        Value::String(_) | Value::Null => None,
        other => {
            warn!(value = %other, "Ignoring non-text default page in data view");
            None
        }
    }
}

/// Walks inline `children` with an explicit stack; id references do not nest.
fn check_nesting_depth(pages: &Value) -> Result<(), NavigationError> {
    let mut stack = vec![(pages, 1usize)];
    while let Some((value, depth)) = stack.pop() {
        let Some(items) = value.as_array() else {
            continue;
        };
        for page in items.iter().filter(|item| item.is_object()) {
            if depth > MAX_NESTING_DEPTH {
                return Err(NavigationError::HostDataShape {
                    reason: format!("pages nest deeper than {MAX_NESTING_DEPTH} levels"),
                });
            }
            if let Some(children) = page.get("children") {
                stack.push((children, depth + 1));
            }
        }
    }
    Ok(())
}

fn data_view_object(data_view: Option<&Value>) -> Result<Option<&serde_json::Map<String, Value>>, NavigationError> {
    match data_view {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(object)) => Ok(Some(object)),
        Some(other) => Err(NavigationError::HostDataShape {
            reason: format!("data view must be an object, found {}", json_type_name(other)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_view_or_pages_means_no_data() {
        assert_eq!(extract_pages(None), Ok(None));
        assert_eq!(extract_pages(Some(&Value::Null)), Ok(None));
        assert_eq!(extract_pages(Some(&json!({ "objects": {} }))), Ok(None));
        assert_eq!(extract_pages(Some(&json!({ "pages": null }))), Ok(None));
    }

    #[test]
    fn host_aliases_map_onto_core_fields() {
        let view = json!({
            "pages": [
                {
                    "name": "reports",
                    "link": "https://example.com/reports",
                    "displayName": "Reports",
                    "children": ["sales", { "id": "costs", "href": "https://example.com/costs", "title": "Costs" }]
                },
                { "id": "sales", "url": "https://example.com/sales", "label": "Sales" }
            ]
        });

        let pages = extract_pages(Some(&view)).expect("valid shape").expect("pages present");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].id, "reports");
        assert_eq!(pages[0].url, "https://example.com/reports");
        assert_eq!(pages[0].label, "Reports");
        assert_eq!(pages[0].children[0], ChildRef::Id("sales".into()));
        assert_eq!(
            pages[0].children[1],
            ChildRef::Page(PageRecord::new("costs", "https://example.com/costs", "Costs"))
        );
    }

    #[test]
    fn malformed_pages_are_shape_errors() {
        let missing_url = json!({ "pages": [{ "id": "x", "label": "X" }] });
        let error = extract_pages(Some(&missing_url)).expect_err("missing url");
        assert_eq!(error.kind(), "host_data_shape");
        assert!(error.to_string().contains("pages:"), "{error}");

        let not_a_list = json!({ "pages": "hpage" });
        assert!(extract_pages(Some(&not_a_list)).is_err());
    }

    fn inline_chain(levels: usize) -> Value {
        let mut page = json!({ "id": "p0", "url": "u", "label": "P0" });
        for level in 1..levels {
            page = json!({ "id": format!("p{level}"), "url": "u", "label": "P", "children": [page] });
        }
        json!({ "pages": [page] })
    }

    #[test]
    fn inline_nesting_is_bounded() {
        let pages = extract_pages(Some(&inline_chain(MAX_NESTING_DEPTH)))
            .expect("within bound")
            .expect("pages present");
        assert_eq!(pages.len(), 1);

        let error = extract_pages(Some(&inline_chain(MAX_NESTING_DEPTH + 1))).expect_err("too deep");
        assert_eq!(error.kind(), "host_data_shape");
        assert!(error.to_string().contains("nest deeper"), "{error}");
    }

    #[test]
    fn non_object_data_view_is_a_shape_error() {
        let error = extract_pages(Some(&json!([1, 2]))).expect_err("array view");
        assert_eq!(
            error,
            NavigationError::HostDataShape {
                reason: "data view must be an object, found an array".into()
            }
        );
    }

    #[test]
    fn default_is_trimmed_and_blank_is_ignored() {
        assert_eq!(extract_default(Some(&json!({ "default": " newspage " }))), Some("newspage".into()));
        assert_eq!(extract_default(Some(&json!({ "default": "  " }))), None);
        assert_eq!(extract_default(Some(&json!({ "default": 7 }))), None);
        assert_eq!(extract_default(None), None);
    }

    #[test]
    fn update_reads_only_the_first_data_view() {
        let options = UpdateOptions {
            data_views: vec![json!({ "default": "a" }), json!({ "default": "b" })],
            kind: UpdateKind::All,
        };
        assert_eq!(extract_default(options.data_view()), Some("a".into()));
        assert!(UpdateOptions::of_kind(UpdateKind::Resize).data_view().is_none());
    }
}
