use serde::{Deserialize, Serialize};

/// A raw page record as supplied by a host, before any validation.
///
/// Records may describe their hierarchy either by embedding child records or
/// by listing the ids of other records in the same input. Both styles can be
/// mixed within one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Unique identifier; the join key for selection across updates.
    pub id: String,
    /// Destination reference. Opaque to the core.
    pub url: String,
    /// Human-readable display text.
    pub label: String,
    /// Ordered children of this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildRef>,
}

impl PageRecord {
    /// Creates a record without children.
    pub fn new(id: impl Into<String>, url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child referenced by id.
    pub fn with_child_id(mut self, id: impl Into<String>) -> Self {
        self.children.push(ChildRef::Id(id.into()));
        self
    }

    /// Appends an embedded child record.
    pub fn with_child(mut self, child: PageRecord) -> Self {
        self.children.push(ChildRef::Page(child));
        self
    }
}

/// A single entry in a record's `children` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChildRef {
    /// Reference to another record by its id.
    Id(String),
    /// A record declared inline under its parent.
    Page(PageRecord),
}

impl ChildRef {
    /// The id this entry resolves to.
    pub fn id(&self) -> &str {
        match self {
            ChildRef::Id(id) => id,
            ChildRef::Page(page) => &page.id,
        }
    }
}

/// Outbound message produced when a user activates a page.
///
/// The renderer emits it and the host adapter consumes it; it carries
/// everything the host needs to perform the navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    pub page_id: String,
    pub url: String,
}

/// Messages that drive the terminal host's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Terminal resized
    Resize(u16, u16),
    /// The watched data view changed on disk
    DataViewChanged,
}

/// Side effects requested by UI components and executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Activate the page with this id (click or Enter)
    Activate(String),
    /// Re-read the data view and deliver it as a host update
    Reload,
    /// Tear the widget down and leave the runtime
    Quit,
}
