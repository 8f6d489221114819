//! The render-ready composition of page hierarchy and selection.

use pagenav_types::PageRecord;
use tracing::debug;

use crate::defaults::FALLBACK_DEFAULT_ID;
use crate::error::NavigationError;
use crate::page_tree::{Page, PageTree};
use crate::selection::SelectionState;

/// One flattened row of the navigation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRow<'a> {
    pub page: &'a Page,
    /// Zero for roots, incremented per nesting level.
    pub depth: usize,
    pub is_selected: bool,
    pub has_children: bool,
}

/// Single source of truth for rendering.
///
/// A view-model is never mutated once built; updates and user selection
/// produce a replacement so readers always observe a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationViewModel {
    tree: PageTree,
    selection: SelectionState,
    declared_default: Option<String>,
}

impl NavigationViewModel {
    /// Initial view-model for `tree` with no prior selection.
    pub fn new(tree: PageTree, declared_default: Option<&str>) -> Self {
        let selection = SelectionState::reconcile(None, &tree, declared_default);
        Self {
            tree,
            selection,
            declared_default: declared_default.map(str::to_string),
        }
    }

    /// View-model over the built-in pages.
    pub fn fallback() -> Self {
        Self::new(PageTree::fallback(), Some(FALLBACK_DEFAULT_ID))
    }

    /// Builds the replacement view-model for a host update.
    ///
    /// The tree is validated first; selection is only reconciled once the new
    /// tree is known to be good, carrying over the previous selection when it
    /// survives.
    pub fn rebuild(
        records: &[PageRecord],
        declared_default: Option<&str>,
        previous: Option<&NavigationViewModel>,
    ) -> Result<Self, NavigationError> {
        let tree = PageTree::build(records)?;
        let previous_selected = previous.and_then(|view_model| view_model.selection.selected_id());
        let selection = SelectionState::reconcile(previous_selected, &tree, declared_default);
        debug!(
            previous = previous_selected.unwrap_or("<none>"),
            selected = selection.selected_id().unwrap_or("<none>"),
            "Rebuilt navigation view-model"
        );
        Ok(Self {
            tree,
            selection,
            declared_default: declared_default.map(str::to_string),
        })
    }

    /// Returns a copy with the user's selection applied.
    pub fn with_selection(&self, id: &str) -> Result<Self, NavigationError> {
        let selection = self.selection.select(id, &self.tree)?;
        Ok(Self {
            tree: self.tree.clone(),
            selection,
            declared_default: self.declared_default.clone(),
        })
    }

    /// Flattens the tree depth-first, pre-order: parents before children,
    /// siblings in input order.
    pub fn rows(&self) -> Vec<NavRow<'_>> {
        let mut rows = Vec::with_capacity(self.tree.len());
        let mut stack: Vec<(&Page, usize)> = self.tree.roots().rev().map(|page| (page, 0)).collect();
        while let Some((page, depth)) = stack.pop() {
            rows.push(NavRow {
                page,
                depth,
                is_selected: self.selection.is_selected(page.id()),
                has_children: page.has_children(),
            });
            stack.extend(self.tree.children(page).rev().map(|child| (child, depth + 1)));
        }
        rows
    }

    pub fn tree(&self) -> &PageTree {
        &self.tree
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn declared_default(&self) -> Option<&str> {
        self.declared_default.as_deref()
    }

    pub fn selected_page(&self) -> Option<&Page> {
        self.selection.selected_id().and_then(|id| self.tree.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> PageRecord {
        PageRecord::new(id, format!("https://example.com/{id}"), id)
    }

    fn flattened(view_model: &NavigationViewModel) -> Vec<(String, usize, bool, bool)> {
        view_model
            .rows()
            .into_iter()
            .map(|row| (row.page.id().to_string(), row.depth, row.is_selected, row.has_children))
            .collect()
    }

    fn sample_records() -> Vec<PageRecord> {
        vec![
            leaf("hpage").with_child(leaf("blog").with_child_id("archive")).with_child(leaf("about")),
            leaf("newspage"),
            leaf("archive"),
        ]
    }

    #[test]
    fn rows_visit_every_page_once_in_pre_order() {
        let view_model = NavigationViewModel::rebuild(&sample_records(), Some("hpage"), None).expect("valid");
        assert_eq!(
            flattened(&view_model),
            vec![
                ("hpage".to_string(), 0, true, true),
                ("blog".to_string(), 1, false, true),
                ("archive".to_string(), 2, false, false),
                ("about".to_string(), 1, false, false),
                ("newspage".to_string(), 0, false, false),
            ]
        );
    }

    #[test]
    fn rebuild_is_idempotent() {
        let previous = NavigationViewModel::fallback();
        let first = NavigationViewModel::rebuild(&sample_records(), Some("newspage"), Some(&previous)).expect("valid");
        let second = NavigationViewModel::rebuild(&sample_records(), Some("newspage"), Some(&previous)).expect("valid");
        assert_eq!(flattened(&first), flattened(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn rebuild_keeps_selection_that_survives() {
        let previous = NavigationViewModel::fallback();
        assert_eq!(previous.selection().selected_id(), Some("hpage"));

        let next = NavigationViewModel::rebuild(&sample_records(), Some("newspage"), Some(&previous)).expect("valid");
        assert_eq!(next.selection().selected_id(), Some("hpage"));
    }

    #[test]
    fn rebuild_falls_back_to_declared_default() {
        let previous = NavigationViewModel::fallback();
        let records = vec![leaf("newspage"), leaf("sport")];
        let next = NavigationViewModel::rebuild(&records, Some("newspage"), Some(&previous)).expect("valid");
        assert_eq!(next.selection().selected_id(), Some("newspage"));
    }

    #[test]
    fn rebuild_selects_nothing_without_survivor_or_default() {
        let previous = NavigationViewModel::fallback();
        let records = vec![leaf("sport")];
        let next = NavigationViewModel::rebuild(&records, Some("newspage"), Some(&previous)).expect("valid");
        assert!(next.selection().is_none());
        assert!(next.rows().iter().all(|row| !row.is_selected));
    }

    #[test]
    fn rebuild_fails_before_touching_selection() {
        let previous = NavigationViewModel::fallback();
        let records = vec![leaf("hpage"), leaf("hpage")];
        let error = NavigationViewModel::rebuild(&records, None, Some(&previous)).expect_err("duplicate");
        assert_eq!(error, NavigationError::DuplicateId { id: "hpage".into() });
        assert_eq!(previous.selection().selected_id(), Some("hpage"));
    }

    #[test]
    fn with_selection_replaces_rather_than_mutates() {
        let current = NavigationViewModel::fallback();
        let next = current.with_selection("newspage").expect("known page");

        assert_eq!(next.selected_page().map(Page::id), Some("newspage"));
        assert_eq!(current.selected_page().map(Page::id), Some("hpage"));
        assert_eq!(next.declared_default(), Some("hpage"));

        let error = current.with_selection("ghost").expect_err("unknown page");
        assert_eq!(error.kind(), "unknown_page");
    }
}
