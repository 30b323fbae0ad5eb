//! Strictly validated site and sidebar navigation configuration.
//!
//! `waypost` turns a loosely-shaped TOML config into an immutable
//! [`SiteConfig`]: scalar site metadata, social links, and a sidebar tree of
//! page links and groups. Validation is eager and collects every problem in
//! one pass, each addressed by a field path like `sidebar[2].items[0].link`.
//!
//! The renderer consuming the config is out of scope here: it receives the
//! validated model (or its [`to_json`](SiteConfig::to_json) projection) and
//! never sees a half-checked value.
//!
//! # Example
//!
//! ```
//! use waypost::SiteConfig;
//!
//! let config = SiteConfig::from_toml_str(r#"
//!     title = "Team Playbook"
//!
//!     [[sidebar]]
//!     label = "Philosophy"
//!     link = "/explanation/manifest-philosophy/"
//! "#)?;
//!
//! assert_eq!(config.page_count(), 1);
//! assert_eq!(config.trail("/explanation/manifest-philosophy/"), Some(vec!["Philosophy"]));
//! # Ok::<(), waypost::ConfigError>(())
//! ```
//!
//! Long-lived consumers can install the config globally with
//! [`init_config`] and read it anywhere via [`cfg`].

pub mod config;
pub mod core;
pub mod logger;

pub use crate::config::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, MAX_SIDEBAR_DEPTH, NavNode,
    PageLinks, RawNavEntry, RawSiteConfig, SiteConfig, SocialLink, cfg, init_config,
};
pub use crate::core::{InvalidRoute, RoutePath};
