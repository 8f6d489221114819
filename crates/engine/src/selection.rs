//! Selection state machine.
//!
//! The selection is a value: transitions return a new state and never touch
//! the receiver. Two transitions exist, `reconcile` for host rebuilds and
//! `select` for user activation.

use crate::error::NavigationError;
use crate::page_tree::PageTree;

/// Id of the active page, or nothing.
///
/// Whenever a state is produced by one of the transitions below, the id it
/// holds names a page of the tree it was validated against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_id: Option<String>,
}

impl SelectionState {
    /// The empty selection.
    pub fn none() -> Self {
        Self::default()
    }

    /// Re-validates a selection against a freshly built tree.
    ///
    /// Keeps `previous` when it still exists, otherwise falls back to
    /// `declared_default`, otherwise selects nothing.
    pub fn reconcile(previous: Option<&str>, tree: &PageTree, declared_default: Option<&str>) -> Self {
        let selected_id = [previous, declared_default]
            .into_iter()
            .flatten()
            .find(|id| tree.contains(id))
            .map(str::to_string);
        Self { selected_id }
    }

    /// User-driven transition to `id`.
    pub fn select(&self, id: &str, tree: &PageTree) -> Result<Self, NavigationError> {
        if !tree.contains(id) {
            return Err(NavigationError::UnknownPage { id: id.to_string() });
        }
        Ok(Self {
            selected_id: Some(id.to_string()),
        })
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    pub fn is_none(&self) -> bool {
        self.selected_id.is_none()
    }
}
