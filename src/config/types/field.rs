//! Config field paths for diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

// ============================================================================
// FieldPath
// ============================================================================

/// A config field path as shown in diagnostics.
///
/// Scalar fields are plain keys (`title`), list elements carry their index
/// (`social[1].href`), and nested sidebar entries chain both
/// (`sidebar[2].items[0].link`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Box<str>);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<Box<str>>) -> Self {
        Self(path.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.into())
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(path.into_boxed_str())
    }
}

// ============================================================================
// PathCursor
// ============================================================================

/// Path segment inside a [`PathCursor`].
#[derive(Debug, Clone)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

/// Builds field paths while walking nested config structures.
///
/// Push keys and indices on the way down, pop on the way back up, and call
/// [`path`](Self::path) or [`field`](Self::field) to snapshot the current
/// location as a [`FieldPath`].
#[derive(Debug, Clone)]
pub struct PathCursor {
    segments: Vec<Segment>,
}

impl PathCursor {
    /// Start a cursor at a top-level key (e.g. `sidebar`).
    pub fn root(key: &'static str) -> Self {
        Self {
            segments: vec![Segment::Key(key)],
        }
    }

    /// Descend into a named field.
    pub fn push_key(&mut self, key: &'static str) {
        self.segments.push(Segment::Key(key));
    }

    /// Descend into a list element.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    /// Step back out of the last key or index.
    pub fn pop(&mut self) {
        self.segments.pop();
    }

    /// Snapshot the current location.
    pub fn path(&self) -> FieldPath {
        FieldPath::from(self.render())
    }

    /// Snapshot the current location with a leaf field appended.
    pub fn field(&self, leaf: &'static str) -> FieldPath {
        let mut rendered = self.render();
        if !rendered.is_empty() {
            rendered.push('.');
        }
        rendered.push_str(leaf);
        FieldPath::from(rendered)
    }

    fn render(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(key);
                }
                Segment::Index(index) => {
                    write!(out, "[{index}]").ok();
                }
            }
        }
        out
    }
}
