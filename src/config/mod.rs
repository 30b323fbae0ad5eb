//! Site configuration management for `waypost.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Per-field validation and the sidebar tree
//! │   ├── info       # title, site URL, base path
//! │   ├── social     # header social links
//! │   └── sidebar    # sidebar entries (RawNavEntry -> NavNode)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath, PathCursor
//! │   └── handle     # Global config handle
//! └── mod.rs         # RawSiteConfig, SiteConfig (this file)
//! ```
//!
//! # Loading
//!
//! | Entry point     | Input                               |
//! |-----------------|-------------------------------------|
//! | `from_path`     | TOML file on disk                   |
//! | `from_toml_str` | TOML text                           |
//! | `load`          | An already-parsed [`RawSiteConfig`] |
//!
//! All three converge on the same validation pass: every check runs, every
//! error is collected, and the load fails with all of them at once.

pub mod section;
pub mod types;
mod util;

use util::extract_url_path;

// Re-export from section/
pub use section::{MAX_SIDEBAR_DEPTH, NavNode, PageLinks, RawNavEntry, SocialLink};

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, PathCursor, cfg, init_config,
};

use crate::{debug, log};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// raw configuration
// ============================================================================

/// Loosely-shaped site config, straight out of TOML.
///
/// Every field is optional or defaulted so that parsing almost never fails.
/// Shape problems surface in [`SiteConfig::load`] with field paths like
/// `sidebar[2].items[0].link` instead of serde errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSiteConfig {
    /// Site title, shown in the header and the tab title.
    pub title: String,

    /// Short description for `<meta>` tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Absolute URL the site is deployed at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Path prefix when serving from a subdirectory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Links shown in the site header.
    pub social: Vec<SocialLink>,

    /// Sidebar entries, top to bottom.
    pub sidebar: Vec<RawNavEntry>,

    /// Custom fields passed through to the renderer untouched.
    pub extra: FxHashMap<String, toml::Value>,
}

// ============================================================================
// validated configuration
// ============================================================================

/// Validated site configuration.
///
/// Constructed once by [`SiteConfig::load`] and read-only afterwards. Every
/// stored value is exactly what the config file said; derived views like
/// [`effective_base_path`](Self::effective_base_path) never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Short description for `<meta>` tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Absolute URL the site is deployed at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Path prefix when serving from a subdirectory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Links shown in the site header.
    pub social: Vec<SocialLink>,

    /// Validated sidebar tree.
    pub sidebar: Vec<NavNode>,

    /// Custom fields passed through to the renderer untouched.
    #[serde(skip_serializing_if = "FxHashMap::is_empty")]
    pub extra: FxHashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Validate a raw config and build the typed model.
    ///
    /// Runs every check before failing: a config with three mistakes reports
    /// all three. Collected warnings are printed, never fatal.
    pub fn load(raw: RawSiteConfig) -> Result<Self, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let sidebar = run_checks(&raw, &mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;

        let config = Self {
            title: raw.title,
            description: raw.description,
            site: raw.site,
            base_path: raw.base_path,
            social: raw.social,
            sidebar,
            extra: raw.extra,
        };

        debug!(
            "config";
            "loaded '{}': {} sidebar entries, {} page links",
            config.title,
            config.sidebar.len(),
            config.page_count()
        );

        Ok(config)
    }

    /// Run validation only, without building a config.
    ///
    /// Returns every diagnostic, warnings included. Useful for tooling that
    /// wants the full report without committing to a load.
    pub fn check(raw: &RawSiteConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        run_checks(raw, &mut diag);
        diag
    }

    /// Parse TOML text and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let (raw, ignored) = parse_with_ignored(content)?;

        if !ignored.is_empty() {
            print_unknown_fields_warning(&ignored);
        }

        Self::load(raw)
    }

    /// Read a TOML file and validate it.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_toml_str(&content)
    }

    /// Serialize for the renderer.
    ///
    /// Sidebar entries serialize without a tag, so the output mirrors the
    /// config file: `{"label", "link"}` for pages, `{"label", "items"}` for
    /// groups. Absent optional fields are omitted.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Base path links should be generated under.
    ///
    /// An explicit `base_path` wins; otherwise the path component of `site`
    /// is used. Always returns a leading `/`, and `"/"` alone when serving
    /// from the site root. The stored fields are never modified.
    pub fn effective_base_path(&self) -> String {
        if let Some(base) = &self.base_path {
            if base.starts_with('/') {
                return base.clone();
            }
            return format!("/{base}");
        }

        match self.site.as_deref().and_then(extract_url_path) {
            Some(path) if !path.is_empty() => format!("/{path}"),
            _ => "/".to_string(),
        }
    }

    /// Iterate every page link in the sidebar, document order.
    pub fn page_links(&self) -> PageLinks<'_> {
        PageLinks::new(&self.sidebar)
    }

    /// Count page links in the sidebar.
    pub fn page_count(&self) -> usize {
        self.sidebar.iter().map(NavNode::page_count).sum()
    }

    /// Label trail from the sidebar root to the entry for `route`.
    ///
    /// Matching ignores the trailing slash. `None` when the route is not in
    /// the sidebar.
    pub fn trail(&self, route: &str) -> Option<Vec<&str>> {
        section::trail(&self.sidebar, route)
    }
}

// ============================================================================
// validation plumbing
// ============================================================================

/// Run every validation against a raw config.
///
/// Returns the typed sidebar so `load` does not walk the tree twice.
fn run_checks(raw: &RawSiteConfig, diag: &mut ConfigDiagnostics) -> Vec<NavNode> {
    section::validate_title(&raw.title, diag);
    section::validate_site_url(raw.site.as_deref(), diag);
    section::validate_base_path(raw.base_path.as_deref(), diag);
    section::validate_social(&raw.social, diag);
    section::build_sidebar(&raw.sidebar, diag)
}

/// Parse TOML content, collecting any unknown fields.
fn parse_with_ignored(content: &str) -> Result<(RawSiteConfig, Vec<String>), ConfigError> {
    let mut ignored = Vec::new();
    let deserializer = toml::Deserializer::new(content);
    let raw = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
        ignored.push(path.to_string());
    })?;
    Ok((raw, ignored))
}

/// Print warning about unknown fields.
fn print_unknown_fields_warning(fields: &[String]) {
    log!("warning"; "unknown config fields, ignoring:");
    for field in fields {
        eprintln!("- {field}");
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse and validate config with a minimal valid base.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_load_toml(extra: &str) -> SiteConfig {
    let content = format!("title = \"Test\"\n{extra}");
    let (raw, ignored) = parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    SiteConfig::load(raw).unwrap()
}

/// Parse config and run validation only, returning all diagnostics.
#[cfg(test)]
pub fn test_check_toml(extra: &str) -> ConfigDiagnostics {
    let content = format!("title = \"Test\"\n{extra}");
    let (raw, _) = parse_with_ignored(&content).unwrap();
    SiteConfig::check(&raw)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoutePath;

    const PLAYBOOK: &str = r#"
title = "Team Playbook"
description = "How we build and ship."
site = "https://acme.dev"

[[social]]
icon = "github"
label = "GitHub"
href = "https://github.com/acme/playbook"

[[sidebar]]
label = "Philosophy"
link = "/explanation/manifest-philosophy/"

[[sidebar]]
label = "Reference"

[[sidebar.items]]
label = "Manifest Template"
link = "/reference/manifest-template/"

[[sidebar]]
label = "Guides"

[[sidebar.items]]
label = "Bootstrap"
link = "/how-to/bootstrap/"
"#;

    #[test]
    fn test_minimal_config() {
        let config = test_load_toml("");
        assert_eq!(config.title, "Test");
        assert!(config.description.is_none());
        assert!(config.site.is_none());
        assert!(config.social.is_empty());
        assert!(config.sidebar.is_empty());
        assert!(config.extra.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config = SiteConfig::from_toml_str(PLAYBOOK).unwrap();

        assert_eq!(config.title, "Team Playbook");
        assert_eq!(config.description.as_deref(), Some("How we build and ship."));
        assert_eq!(config.site.as_deref(), Some("https://acme.dev"));

        assert_eq!(config.social.len(), 1);
        assert_eq!(config.social[0].icon, "github");
        assert_eq!(config.social[0].href, "https://github.com/acme/playbook");

        assert_eq!(config.sidebar.len(), 3);
        assert_eq!(config.sidebar[0].label(), "Philosophy");
        assert!(config.sidebar[1].is_group());
        assert_eq!(config.page_count(), 3);
    }

    #[test]
    fn test_loads_are_equal() {
        let a = SiteConfig::from_toml_str(PLAYBOOK).unwrap();
        let b = SiteConfig::from_toml_str(PLAYBOOK).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_values_stored_verbatim() {
        // Suspicious shapes warn but are never rewritten
        let config = test_load_toml("base_path = \"playbook\"");
        assert_eq!(config.base_path.as_deref(), Some("playbook"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = SiteConfig::from_toml_str("title = \"\"").unwrap_err();
        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "title");
    }

    #[test]
    fn test_missing_title_rejected() {
        // serde(default) fills in "", which then fails validation
        let err = SiteConfig::from_toml_str("description = \"no title\"").unwrap_err();
        assert!(matches!(err, ConfigError::Diagnostics(_)));
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let diag = SiteConfig::check(&RawSiteConfig {
            title: String::new(),
            social: vec![SocialLink {
                icon: "github".into(),
                label: "GitHub".into(),
                href: "not a url".into(),
            }],
            sidebar: vec![RawNavEntry::page("Start", "guides/start")],
            ..RawSiteConfig::default()
        });

        assert_eq!(diag.len(), 3);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["title", "social[0].href", "sidebar[0].link"]);
    }

    #[test]
    fn test_nested_sidebar_error_path() {
        let diag = test_check_toml(
            r#"
[[sidebar]]
label = "A"
link = "/a/"

[[sidebar]]
label = "B"
link = "/b/"

[[sidebar]]
label = "Guides"

[[sidebar.items]]
label = "Start"
link = "guides/start"
"#,
        );
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "sidebar[2].items[0].link");
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("title = \"My Site").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/nonexistent/waypost.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_from_path_reads_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("waypost.toml");
        fs::write(&path, PLAYBOOK)?;

        let config = SiteConfig::from_path(&path)?;
        assert_eq!(config.title, "Team Playbook");
        Ok(())
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (raw, ignored) = parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(raw.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = parse_with_ignored("title = \"Test\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let config = test_load_toml(
            "[extra]\nedit_link = \"https://github.com/acme/playbook/edit/main/\"",
        );
        assert_eq!(
            config.extra.get("edit_link"),
            Some(&toml::Value::String(
                "https://github.com/acme/playbook/edit/main/".into()
            ))
        );
    }

    #[test]
    fn test_effective_base_path_explicit() {
        let config = test_load_toml("base_path = \"/playbook\"");
        assert_eq!(config.effective_base_path(), "/playbook");
    }

    #[test]
    fn test_effective_base_path_adds_leading_slash() {
        let config = test_load_toml("base_path = \"playbook\"");
        assert_eq!(config.effective_base_path(), "/playbook");
        // The stored value is untouched
        assert_eq!(config.base_path.as_deref(), Some("playbook"));
    }

    #[test]
    fn test_effective_base_path_from_site_url() {
        let config = test_load_toml("site = \"https://acme.github.io/playbook\"");
        assert_eq!(config.effective_base_path(), "/playbook");
    }

    #[test]
    fn test_effective_base_path_explicit_wins_over_site() {
        let config =
            test_load_toml("site = \"https://acme.github.io/playbook\"\nbase_path = \"/docs\"");
        assert_eq!(config.effective_base_path(), "/docs");
    }

    #[test]
    fn test_effective_base_path_default() {
        let config = test_load_toml("");
        assert_eq!(config.effective_base_path(), "/");
    }

    #[test]
    fn test_trail_through_config() {
        let config = SiteConfig::from_toml_str(PLAYBOOK).unwrap();
        assert_eq!(
            config.trail("/reference/manifest-template/").unwrap(),
            ["Reference", "Manifest Template"]
        );
        assert!(config.trail("/missing/").is_none());
    }

    #[test]
    fn test_page_links_walk_groups() {
        let config = SiteConfig::from_toml_str(PLAYBOOK).unwrap();
        let routes: Vec<_> = config
            .page_links()
            .map(|(_, route)| route.as_str())
            .collect();
        assert_eq!(
            routes,
            [
                "/explanation/manifest-philosophy/",
                "/reference/manifest-template/",
                "/how-to/bootstrap/"
            ]
        );
    }

    #[test]
    fn test_to_json_shape() {
        let config = SiteConfig::from_toml_str(PLAYBOOK).unwrap();
        let json: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

        assert_eq!(json["title"], "Team Playbook");
        assert_eq!(json["sidebar"][0]["link"], "/explanation/manifest-philosophy/");
        assert!(json["sidebar"][1]["items"].is_array());
        // Untagged: no discriminant key anywhere
        assert!(json["sidebar"][0].get("type").is_none());
        // base_path was never set, so it is omitted entirely
        assert!(json.get("base_path").is_none());
    }

    #[test]
    fn test_group_with_single_page() {
        let config = SiteConfig::load(RawSiteConfig {
            title: "Docs".into(),
            sidebar: vec![RawNavEntry::group(
                "Guides",
                vec![RawNavEntry::page("Start", "/start/")],
            )],
            ..RawSiteConfig::default()
        })
        .unwrap();

        assert_eq!(config.sidebar.len(), 1);
        let NavNode::Group { label, items } = &config.sidebar[0] else {
            panic!("expected a group");
        };
        assert_eq!(label, "Guides");
        assert_eq!(
            items[..],
            [NavNode::PageLink {
                label: "Start".into(),
                link: RoutePath::parse("/start/").unwrap(),
            }]
        );
    }

    #[test]
    fn test_toml_and_literal_loads_agree() {
        let from_toml = SiteConfig::from_toml_str(
            r#"
title = "Docs"

[[sidebar]]
label = "Guides"

[[sidebar.items]]
label = "Start"
link = "/start/"
"#,
        )
        .unwrap();

        let from_literal = SiteConfig::load(RawSiteConfig {
            title: "Docs".into(),
            sidebar: vec![RawNavEntry::group(
                "Guides",
                vec![RawNavEntry::page("Start", "/start/")],
            )],
            ..RawSiteConfig::default()
        })
        .unwrap();

        assert_eq!(from_toml, from_literal);
    }

    #[test]
    fn test_empty_group_error_points_at_items() {
        let err = SiteConfig::load(RawSiteConfig {
            title: "Docs".into(),
            sidebar: vec![RawNavEntry::group("Empty", vec![])],
            ..RawSiteConfig::default()
        })
        .unwrap_err();

        let ConfigError::Diagnostics(diag) = err else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "sidebar[0].items");
    }

    #[test]
    fn test_check_collects_without_failing() {
        let raw = RawSiteConfig {
            title: "Test".into(),
            sidebar: vec![RawNavEntry::group("Empty", vec![])],
            ..RawSiteConfig::default()
        };
        let diag = SiteConfig::check(&raw);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "sidebar[0].items");
    }
}
