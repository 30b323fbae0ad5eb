//! Route path type for sidebar page links.
//!
//! - Internal representation: exactly what the config file said
//! - Browser boundary: encode on output only
//!
//! Routes are never normalized. `/Guides/Start/` stays `/Guides/Start/`, so
//! serializing a config reproduces the input byte for byte.

use std::borrow::Borrow;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Shape every sidebar link must have: root-relative with a trailing slash.
static ROUTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^/.*/$").unwrap());

/// Error returned when a link does not have the route shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid route '{0}': must start and end with '/'")]
pub struct InvalidRoute(pub String);

/// A validated sidebar route (e.g. `/guides/start/`)
///
/// Invariants:
/// - Starts with `/` and ends with `/`, at least two characters
/// - Stored exactly as written, no normalization or decoding
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Parse a route, rejecting anything that is not root-relative with a
    /// trailing slash. A bare `/` is rejected too.
    pub fn parse(link: &str) -> Result<Self, InvalidRoute> {
        if ROUTE_RE.is_match(link) {
            Ok(Self(Arc::from(link)))
        } else {
            Err(InvalidRoute(link.to_string()))
        }
    }

    /// Get the route as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for browser output (percent-encode non-ASCII and special characters).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Compare ignoring trailing slash.
    pub fn matches_ignoring_trailing_slash(&self, other: &str) -> bool {
        let self_trimmed = self.0.trim_end_matches('/');
        let other_trimmed = other.trim_end_matches('/');

        if self_trimmed.is_empty() && other_trimmed.is_empty() {
            return true;
        }
        self_trimmed == other_trimmed
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RoutePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
