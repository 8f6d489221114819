//! Pure projection of a view-model into a visual tree.
//!
//! The renderer keeps no display state between calls; a host applies the
//! returned [`VisualTree`] to whatever display API it owns and routes user
//! activation back through [`NavigationRenderer::on_activate`].

use pagenav_types::NavigationIntent;
use serde::Serialize;

use crate::error::NavigationError;
use crate::view_model::NavigationViewModel;

/// Title used when no display option overrides it.
pub const DEFAULT_TITLE: &str = "Pages";

/// A clickable link in the projected list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// Id passed back to `on_activate` when this entry is activated.
    pub page_id: String,
    pub label: String,
    pub url: String,
    /// Nesting level; hosts indent by it.
    pub depth: usize,
    pub selected: bool,
    /// Whether child entries follow this one.
    pub expandable: bool,
}

/// Display-ready navigation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualTree {
    pub title: String,
    pub entries: Vec<LinkEntry>,
}

impl VisualTree {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, page_id: &str) -> Option<&LinkEntry> {
        self.entries.iter().find(|entry| entry.page_id == page_id)
    }

    /// Position of the selected entry, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRenderer {
    title: String,
}

impl Default for NavigationRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl NavigationRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Redraws the full list from the current view-model.
    pub fn render(&self, view_model: &NavigationViewModel) -> VisualTree {
        let entries = view_model
            .rows()
            .into_iter()
            .map(|row| LinkEntry {
                page_id: row.page.id().to_string(),
                label: row.page.label().to_string(),
                url: row.page.url().to_string(),
                depth: row.depth,
                selected: row.is_selected,
                expandable: row.has_children,
            })
            .collect();
        VisualTree {
            title: self.title.clone(),
            entries,
        }
    }

    /// Turns a user activation into an intent for the host.
    ///
    /// Selection is left untouched; applying it is the host adapter's call.
    pub fn on_activate(&self, view_model: &NavigationViewModel, page_id: &str) -> Result<NavigationIntent, NavigationError> {
        let page = view_model.tree().get(page_id).ok_or_else(|| NavigationError::UnknownPage {
            id: page_id.to_string(),
        })?;
        Ok(NavigationIntent {
            page_id: page.id().to_string(),
            url: page.url().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pagenav_types::PageRecord;
    use serde_json::json;

    use super::*;

    #[test]
    fn fallback_renders_two_entries_with_home_selected() {
        let renderer = NavigationRenderer::default();
        let tree = renderer.render(&NavigationViewModel::fallback());

        assert_eq!(tree.title, "Pages");
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.entries[0].page_id, "hpage");
        assert_eq!(tree.entries[1].page_id, "newspage");
        assert_eq!(tree.selected_index(), Some(0));
        assert_eq!(tree.entry("newspage").map(|entry| entry.url.as_str()), Some("https://nytimes.com"));
    }

    #[test]
    fn nested_pages_carry_depth_and_expandable_flags() {
        let records = vec![
            PageRecord::new("reports", "r", "Reports").with_child(PageRecord::new("sales", "s", "Sales")),
            PageRecord::new("help", "h", "Help"),
        ];
        let view_model = NavigationViewModel::rebuild(&records, Some("sales"), None).expect("valid");
        let tree = NavigationRenderer::new("Reports").render(&view_model);

        let shape: Vec<_> = tree
            .entries
            .iter()
            .map(|entry| (entry.page_id.as_str(), entry.depth, entry.expandable, entry.selected))
            .collect();
        assert_eq!(
            shape,
            vec![("reports", 0, true, false), ("sales", 1, false, true), ("help", 0, false, false)]
        );
    }

    #[test]
    fn activation_yields_intent_without_changing_selection() {
        let renderer = NavigationRenderer::default();
        let view_model = NavigationViewModel::fallback();

        let intent = renderer.on_activate(&view_model, "newspage").expect("known page");
        assert_eq!(
            intent,
            NavigationIntent {
                page_id: "newspage".into(),
                url: "https://nytimes.com".into(),
            }
        );
        assert_eq!(view_model.selection().selected_id(), Some("hpage"));
    }

    #[test]
    fn activation_of_unknown_page_fails() {
        let renderer = NavigationRenderer::default();
        let error = renderer
            .on_activate(&NavigationViewModel::fallback(), "ghost")
            .expect_err("unknown page");
        assert_eq!(error, NavigationError::UnknownPage { id: "ghost".into() });
    }

    #[test]
    fn visual_tree_serializes_for_hosts() {
        let tree = NavigationRenderer::default().render(&NavigationViewModel::fallback());
        let value = serde_json::to_value(&tree).expect("serialize visual tree");
        assert_eq!(value["title"], json!("Pages"));
        assert_eq!(value["entries"][0]["selected"], json!(true));
        assert_eq!(value["entries"][1]["label"], json!("the times"));
    }
}
