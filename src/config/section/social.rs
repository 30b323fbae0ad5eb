//! Header social links.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::types::PathCursor;

/// Icon names the default theme ships with.
///
/// Membership is advisory: an unknown icon renders as a blank spot, so it
/// warns instead of failing the load.
const KNOWN_ICONS: &[&str] = &[
    "blueSky",
    "codeberg",
    "codePen",
    "discord",
    "discourse",
    "email",
    "facebook",
    "github",
    "gitlab",
    "gitter",
    "instagram",
    "linkedin",
    "mastodon",
    "matrix",
    "openCollective",
    "patreon",
    "reddit",
    "rss",
    "signal",
    "slack",
    "stackOverflow",
    "telegram",
    "threads",
    "tiktok",
    "twitch",
    "twitter",
    "x.com",
    "youtube",
    "zulip",
];

/// A link in the site header (e.g. the project repository).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Icon name (e.g. "github").
    pub icon: String,
    /// Accessible label (e.g. "GitHub").
    pub label: String,
    /// Absolute URL of the profile or repository.
    pub href: String,
}

/// Validate social links.
///
/// # Checks
/// - `href` must be present and a valid absolute URL
/// - unknown or empty icons and empty labels are warnings
pub(crate) fn validate_social(social: &[SocialLink], diag: &mut ConfigDiagnostics) {
    let mut cursor = PathCursor::root("social");

    for (index, link) in social.iter().enumerate() {
        cursor.push_index(index);

        if link.href.is_empty() {
            diag.error_with_hint(
                cursor.field("href"),
                "href is required",
                "set an absolute URL like \"https://github.com/acme/playbook\"",
            );
        } else if let Err(e) = url::Url::parse(&link.href) {
            diag.error_with_hint(
                cursor.field("href"),
                format!("invalid URL: {e}"),
                "use an absolute URL like https://github.com/acme/playbook",
            );
        }

        if link.icon.is_empty() {
            diag.warn(cursor.field("icon"), "icon is empty");
        } else if !KNOWN_ICONS.contains(&link.icon.as_str()) {
            diag.warn_with_hint(
                cursor.field("icon"),
                format!("unknown icon '{}'", link.icon),
                "known icons include \"github\", \"discord\", \"x.com\", \"youtube\"",
            );
        }

        if link.label.is_empty() {
            diag.warn(cursor.field("label"), "label is empty");
        }

        cursor.pop();
    }
}
