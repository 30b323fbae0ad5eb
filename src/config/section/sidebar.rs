//! Sidebar navigation tree.
//!
//! The sidebar arrives as loosely-shaped [`RawNavEntry`] values and leaves as
//! a strict [`NavNode`] tree. Every shape problem is reported with an
//! index-addressed field path like `sidebar[2].items[0].link` instead of a
//! serde error pointing at nothing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::types::{FieldPath, PathCursor};
use crate::core::RoutePath;

/// Nesting bound for group trees.
pub const MAX_SIDEBAR_DEPTH: usize = 64;

// ============================================================================
// Raw entries
// ============================================================================

/// One sidebar entry as written in the config, before shape checking.
///
/// `link` and `items` are both optional so a malformed entry still parses
/// and gets reported with a precise field path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNavEntry {
    /// Display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Route for a page link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Nested entries for a group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<RawNavEntry>>,
}

impl RawNavEntry {
    /// A page link entry.
    pub fn page(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            link: Some(link.into()),
            items: None,
        }
    }

    /// A group entry.
    pub fn group(label: impl Into<String>, items: Vec<RawNavEntry>) -> Self {
        Self {
            label: Some(label.into()),
            link: None,
            items: Some(items),
        }
    }
}

// ============================================================================
// Validated tree
// ============================================================================

/// One validated sidebar entry.
///
/// Serializes without a tag: a page link becomes `{"label", "link"}` and a
/// group becomes `{"label", "items"}`, mirroring the config file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// A leaf pointing at a page.
    PageLink { label: String, link: RoutePath },
    /// A titled collection of nested entries.
    Group { label: String, items: Vec<NavNode> },
}

impl NavNode {
    /// Get the display label.
    pub fn label(&self) -> &str {
        match self {
            Self::PageLink { label, .. } | Self::Group { label, .. } => label,
        }
    }

    /// Check if this entry is a group.
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Count page links in this entry and everything below it.
    pub fn page_count(&self) -> usize {
        match self {
            Self::PageLink { .. } => 1,
            Self::Group { items, .. } => items.iter().map(Self::page_count).sum(),
        }
    }
}

// ============================================================================
// Validation walk
// ============================================================================

/// Walks the raw sidebar, collecting diagnostics and building the typed tree.
struct SidebarWalker<'a> {
    diag: &'a mut ConfigDiagnostics,
    cursor: PathCursor,
    /// First claim on each route, for duplicate detection.
    routes: FxHashMap<RoutePath, FieldPath>,
}

impl<'a> SidebarWalker<'a> {
    fn new(diag: &'a mut ConfigDiagnostics) -> Self {
        Self {
            diag,
            cursor: PathCursor::root("sidebar"),
            routes: FxHashMap::default(),
        }
    }

    fn walk_level(&mut self, entries: &[RawNavEntry], depth: usize) -> Vec<NavNode> {
        let mut nodes = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            self.cursor.push_index(index);
            if let Some(node) = self.convert(entry, depth) {
                nodes.push(node);
            }
            self.cursor.pop();
        }

        nodes
    }

    /// Convert one entry, recording diagnostics for every shape problem.
    ///
    /// Returns `None` for entries that cannot become a node; the walk keeps
    /// going so one bad entry does not hide the rest.
    fn convert(&mut self, entry: &RawNavEntry, depth: usize) -> Option<NavNode> {
        let label = self.require_label(entry);

        match (&entry.link, &entry.items) {
            (Some(_), Some(_)) => {
                self.diag.error(
                    self.cursor.path(),
                    "an entry is either a page link (`link`) or a group (`items`), not both",
                );
                None
            }
            (Some(link), None) => self.convert_page(label, link),
            (None, Some(items)) => self.convert_group(label, items, depth),
            (None, None) => {
                self.diag.error_with_hint(
                    self.cursor.path(),
                    "entry has neither `link` nor `items`",
                    "add `link` for a page or `items` for a group",
                );
                None
            }
        }
    }

    fn require_label(&mut self, entry: &RawNavEntry) -> String {
        match &entry.label {
            Some(label) if !label.is_empty() => label.clone(),
            Some(_) => {
                self.diag
                    .error(self.cursor.field("label"), "label must not be empty");
                String::new()
            }
            None => {
                self.diag
                    .error(self.cursor.field("label"), "label is required");
                String::new()
            }
        }
    }

    fn convert_page(&mut self, label: String, link: &str) -> Option<NavNode> {
        match RoutePath::parse(link) {
            Ok(route) => {
                self.claim_route(&route);
                Some(NavNode::PageLink { label, link: route })
            }
            Err(e) => {
                self.diag.error_with_hint(
                    self.cursor.field("link"),
                    e.to_string(),
                    "use a root-relative path like \"/guides/start/\"",
                );
                None
            }
        }
    }

    fn convert_group(
        &mut self,
        label: String,
        items: &[RawNavEntry],
        depth: usize,
    ) -> Option<NavNode> {
        if depth >= MAX_SIDEBAR_DEPTH {
            self.diag.error(
                self.cursor.field("items"),
                format!("sidebar nesting deeper than {MAX_SIDEBAR_DEPTH} levels"),
            );
            return None;
        }

        if items.is_empty() {
            self.diag.error_with_hint(
                self.cursor.field("items"),
                "group has no entries",
                "add at least one page link or remove the group",
            );
            return None;
        }

        self.cursor.push_key("items");
        let children = self.walk_level(items, depth + 1);
        self.cursor.pop();

        Some(NavNode::Group {
            label,
            items: children,
        })
    }

    /// Record a route, warning when it was already claimed by an earlier entry.
    fn claim_route(&mut self, route: &RoutePath) {
        let field = self.cursor.field("link");
        if let Some(first) = self.routes.get(route) {
            self.diag.warn(
                field,
                format!("route '{route}' already used at {}", first.as_str()),
            );
        } else {
            self.routes.insert(route.clone(), field);
        }
    }
}

/// Validate the raw sidebar and build the typed tree.
///
/// Malformed entries are dropped from the returned tree after their
/// diagnostics are recorded.
pub(crate) fn build_sidebar(entries: &[RawNavEntry], diag: &mut ConfigDiagnostics) -> Vec<NavNode> {
    SidebarWalker::new(diag).walk_level(entries, 0)
}

// ============================================================================
// Tree queries
// ============================================================================

/// Depth-first iterator over every page link in a sidebar tree.
pub struct PageLinks<'a> {
    stack: Vec<std::slice::Iter<'a, NavNode>>,
}

impl<'a> PageLinks<'a> {
    pub(crate) fn new(nodes: &'a [NavNode]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for PageLinks<'a> {
    type Item = (&'a str, &'a RoutePath);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(iter) = self.stack.last_mut() {
            match iter.next() {
                Some(NavNode::PageLink { label, link }) => return Some((label, link)),
                Some(NavNode::Group { items, .. }) => self.stack.push(items.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Find the label trail from the sidebar root to the entry for `route`.
///
/// Returns labels from the outermost group down to the page itself, for the
/// first entry matching `route` ignoring the trailing slash. `None` when the
/// route is not in the sidebar.
pub(crate) fn trail<'a>(nodes: &'a [NavNode], route: &str) -> Option<Vec<&'a str>> {
    for node in nodes {
        match node {
            NavNode::PageLink { label, link } => {
                if link.matches_ignoring_trailing_slash(route) {
                    return Some(vec![label.as_str()]);
                }
            }
            NavNode::Group { label, items } => {
                if let Some(mut found) = trail(items, route) {
                    found.insert(0, label.as_str());
                    return Some(found);
                }
            }
        }
    }
    None
}

// ============================================================================
// tests
// ============================================================================
