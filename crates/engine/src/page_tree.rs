//! Validated, immutable page hierarchy.
//!
//! A [`PageTree`] is built wholesale from raw host records on every update and
//! never mutated afterwards. Construction walks the input with explicit stacks
//! so adversarially deep nesting cannot exhaust the native stack.

use std::collections::{HashMap, HashSet};

use pagenav_types::{ChildRef, PageRecord};
use tracing::debug;

use crate::defaults::fallback_records;
use crate::error::NavigationError;

/// A single validated node of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    id: String,
    url: String,
    label: String,
    children: Vec<usize>,
}

impl Page {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Ordered forest of pages with globally unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTree {
    /// Pages in declaration (pre-order) order.
    pages: Vec<Page>,
    /// Indices of top-level pages in rendering order.
    roots: Vec<usize>,
    index: HashMap<String, usize>,
}

impl PageTree {
    /// Validates raw records and builds the tree.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. id uniqueness across the whole input, nested records included
    /// 2. every child reference resolves to a declared page
    /// 3. no page is claimed by two parents
    /// 4. every page is reachable from a root (no reference cycles)
    ///
    /// Top-level records that another record lists as a child are placed
    /// under that parent; the remaining top-level records become roots in
    /// input order.
    pub fn build(records: &[PageRecord]) -> Result<Self, NavigationError> {
        let declared = declare_pages(records)?;
        let index: HashMap<&str, usize> = declared
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.record.id.as_str(), position))
            .collect();

        let mut resolved_children = Vec::with_capacity(declared.len());
        for entry in &declared {
            let mut resolved = Vec::with_capacity(entry.record.children.len());
            for child in &entry.record.children {
                let child_id = child.id();
                let Some(&child_index) = index.get(child_id) else {
                    return Err(NavigationError::DanglingChild {
                        parent_id: entry.record.id.clone(),
                        child_id: child_id.to_string(),
                    });
                };
                resolved.push(child_index);
            }
            resolved_children.push(resolved);
        }

        let mut parent_of: Vec<Option<usize>> = vec![None; declared.len()];
        for (parent_index, children) in resolved_children.iter().enumerate() {
            for &child_index in children {
                if let Some(first_parent) = parent_of[child_index] {
                    return Err(NavigationError::SharedChild {
                        child_id: declared[child_index].record.id.clone(),
                        first_parent_id: declared[first_parent].record.id.clone(),
                        second_parent_id: declared[parent_index].record.id.clone(),
                    });
                }
                parent_of[child_index] = Some(parent_index);
            }
        }

        let roots: Vec<usize> = declared
            .iter()
            .enumerate()
            .filter(|(position, entry)| entry.top_level && parent_of[*position].is_none())
            .map(|(position, _)| position)
            .collect();

        if let Some(unreachable) = first_unreachable(&roots, &resolved_children) {
            return Err(NavigationError::CyclicReference {
                id: declared[cycle_member(unreachable, &parent_of)].record.id.clone(),
            });
        }

        let pages: Vec<Page> = declared
            .into_iter()
            .zip(resolved_children)
            .map(|(entry, children)| Page {
                id: entry.record.id.clone(),
                url: entry.record.url.clone(),
                label: entry.record.label.clone(),
                children,
            })
            .collect();
        let index = pages
            .iter()
            .enumerate()
            .map(|(position, page)| (page.id.clone(), position))
            .collect();

        debug!(pages = pages.len(), roots = roots.len(), "Built page tree");
        Ok(Self { pages, roots, index })
    }

    /// Builds from host data, substituting the built-in pages when the host
    /// supplied nothing (absent or empty).
    pub fn build_or_fallback(records: Option<&[PageRecord]>) -> Result<Self, NavigationError> {
        match records {
            Some(records) if !records.is_empty() => Self::build(records),
            _ => Ok(Self::fallback()),
        }
    }

    /// The fixed two-page tree shown when a host supplies no data.
    pub fn fallback() -> Self {
        let pages: Vec<Page> = fallback_records()
            .into_iter()
            .map(|record| Page {
                id: record.id,
                url: record.url,
                label: record.label,
                children: Vec::new(),
            })
            .collect();
        let index = pages
            .iter()
            .enumerate()
            .map(|(position, page)| (page.id.clone(), position))
            .collect();
        let roots = (0..pages.len()).collect();
        Self { pages, roots, index }
    }

    pub fn get(&self, id: &str) -> Option<&Page> {
        self.index.get(id).map(|&position| &self.pages[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Top-level pages in rendering order.
    pub fn roots(&self) -> impl DoubleEndedIterator<Item = &Page> + ExactSizeIterator {
        self.roots.iter().map(|&position| &self.pages[position])
    }

    /// Direct children of `page` in declaration order.
    pub fn children<'a>(&'a self, page: &'a Page) -> impl DoubleEndedIterator<Item = &'a Page> + ExactSizeIterator {
        page.children.iter().map(|&position| &self.pages[position])
    }
}

struct DeclaredPage<'a> {
    record: &'a PageRecord,
    top_level: bool,
}

/// Pre-order walk over top-level and embedded records, rejecting the first
/// duplicate id encountered.
fn declare_pages(records: &[PageRecord]) -> Result<Vec<DeclaredPage<'_>>, NavigationError> {
    let mut declared = Vec::with_capacity(records.len());
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    let mut stack: Vec<(&PageRecord, bool)> = records.iter().rev().map(|record| (record, true)).collect();

    while let Some((record, top_level)) = stack.pop() {
        if !seen.insert(record.id.as_str()) {
            return Err(NavigationError::DuplicateId { id: record.id.clone() });
        }
        declared.push(DeclaredPage { record, top_level });
        for child in record.children.iter().rev() {
            if let ChildRef::Page(embedded) = child {
                stack.push((embedded, false));
            }
        }
    }
    Ok(declared)
}

fn first_unreachable(roots: &[usize], children: &[Vec<usize>]) -> Option<usize> {
    let mut visited = vec![false; children.len()];
    let mut stack: Vec<usize> = roots.to_vec();
    while let Some(position) = stack.pop() {
        if visited[position] {
            continue;
        }
        visited[position] = true;
        stack.extend(children[position].iter().copied());
    }
    visited.iter().position(|seen| !seen)
}

/// Follows parent links from an unreachable page until one repeats; the
/// repeated page lies on the cycle itself.
fn cycle_member(start: usize, parent_of: &[Option<usize>]) -> usize {
    let mut on_path = vec![false; parent_of.len()];
    let mut current = start;
    while !on_path[current] {
        on_path[current] = true;
        match parent_of[current] {
            Some(parent) => current = parent,
            None => return start,
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> PageRecord {
        PageRecord::new(id, format!("https://example.com/{id}"), id.to_uppercase())
    }

    fn root_ids(tree: &PageTree) -> Vec<&str> {
        tree.roots().map(Page::id).collect()
    }

    fn child_ids<'a>(tree: &'a PageTree, id: &str) -> Vec<&'a str> {
        let page = tree.get(id).expect("page present");
        tree.children(page).map(Page::id).collect()
    }

    #[test]
    fn nested_records_build_in_input_order() {
        let records = vec![
            leaf("home").with_child(leaf("news")).with_child(leaf("sport")),
            leaf("about"),
        ];
        let tree = PageTree::build(&records).expect("valid tree");

        assert_eq!(tree.len(), 4);
        assert_eq!(root_ids(&tree), vec!["home", "about"]);
        assert_eq!(child_ids(&tree, "home"), vec!["news", "sport"]);
        assert!(!tree.get("about").expect("about").has_children());
    }

    #[test]
    fn referenced_top_level_records_move_under_their_parent() {
        let records = vec![leaf("reports").with_child_id("sales"), leaf("sales"), leaf("contact")];
        let tree = PageTree::build(&records).expect("valid tree");

        assert_eq!(root_ids(&tree), vec!["reports", "contact"]);
        assert_eq!(child_ids(&tree, "reports"), vec!["sales"]);
    }

    #[test]
    fn references_may_point_forward_or_backward() {
        let records = vec![leaf("a"), leaf("b").with_child_id("a").with_child_id("c"), leaf("c")];
        let tree = PageTree::build(&records).expect("valid tree");

        assert_eq!(root_ids(&tree), vec!["b"]);
        assert_eq!(child_ids(&tree, "b"), vec!["a", "c"]);
    }

    #[test]
    fn duplicate_ids_are_rejected_including_nested() {
        let records = vec![leaf("home").with_child(leaf("news")), leaf("news")];
        let error = PageTree::build(&records).expect_err("duplicate should fail");
        assert_eq!(error, NavigationError::DuplicateId { id: "news".into() });
    }

    #[test]
    fn first_duplicate_in_walk_order_is_reported() {
        let records = vec![leaf("a"), leaf("b"), leaf("a"), leaf("b")];
        let error = PageTree::build(&records).expect_err("duplicate should fail");
        assert_eq!(error, NavigationError::DuplicateId { id: "a".into() });
    }

    #[test]
    fn dangling_reference_names_parent_and_child() {
        let records = vec![leaf("home").with_child_id("ghost")];
        let error = PageTree::build(&records).expect_err("dangling should fail");
        assert_eq!(
            error,
            NavigationError::DanglingChild {
                parent_id: "home".into(),
                child_id: "ghost".into(),
            }
        );
    }

    #[test]
    fn page_under_two_parents_is_rejected() {
        let records = vec![leaf("a").with_child_id("c"), leaf("b").with_child_id("c"), leaf("c")];
        let error = PageTree::build(&records).expect_err("shared child should fail");
        assert_eq!(
            error,
            NavigationError::SharedChild {
                child_id: "c".into(),
                first_parent_id: "a".into(),
                second_parent_id: "b".into(),
            }
        );
    }

    #[test]
    fn embedded_page_cannot_also_be_referenced() {
        let records = vec![leaf("a").with_child(leaf("b")), leaf("c").with_child_id("b")];
        let error = PageTree::build(&records).expect_err("shared child should fail");
        assert!(matches!(error, NavigationError::SharedChild { ref child_id, .. } if child_id == "b"));
    }

    #[test]
    fn reference_cycles_are_rejected() {
        let records = vec![leaf("root"), leaf("x").with_child_id("y"), leaf("y").with_child_id("x")];
        let error = PageTree::build(&records).expect_err("cycle should fail");
        assert!(matches!(error, NavigationError::CyclicReference { ref id } if id == "x" || id == "y"));
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let records = vec![leaf("loop").with_child_id("loop")];
        let error = PageTree::build(&records).expect_err("self reference should fail");
        assert_eq!(error, NavigationError::CyclicReference { id: "loop".into() });
    }

    #[test]
    fn cycle_report_names_a_page_on_the_cycle() {
        // "tail" hangs off the x <-> y loop but is not on it.
        let records = vec![
            leaf("tail"),
            leaf("x").with_child_id("y").with_child_id("tail"),
            leaf("y").with_child_id("x"),
        ];
        let error = PageTree::build(&records).expect_err("cycle should fail");
        assert!(matches!(error, NavigationError::CyclicReference { ref id } if id == "x" || id == "y"));
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let mut record = leaf("n0");
        for depth in 1..20_000 {
            record = leaf(&format!("n{depth}")).with_child(record);
        }
        let tree = PageTree::build(std::slice::from_ref(&record)).expect("deep tree builds");
        assert_eq!(tree.len(), 20_000);
        assert_eq!(root_ids(&tree), vec!["n19999"]);
        // Dropping a 20k-deep record tree recursively is itself a stack hazard.
        std::mem::forget(record);
    }

    #[test]
    fn empty_input_builds_an_empty_tree() {
        let tree = PageTree::build(&[]).expect("empty is valid");
        assert!(tree.is_empty());
    }

    #[test]
    fn absent_or_empty_data_uses_fallback_pages() {
        for input in [None, Some(&[][..])] {
            let tree = PageTree::build_or_fallback(input).expect("fallback never fails");
            assert_eq!(root_ids(&tree), vec!["hpage", "newspage"]);
        }
        let tree = PageTree::build_or_fallback(Some(&[leaf("only")])).expect("host data wins");
        assert_eq!(root_ids(&tree), vec!["only"]);
    }

    #[test]
    fn fallback_matches_building_the_fallback_records() {
        let built = PageTree::build(&fallback_records()).expect("fallback records are valid");
        assert_eq!(PageTree::fallback(), built);
    }
}
