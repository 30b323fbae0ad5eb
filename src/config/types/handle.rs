//! Global config with atomic replacement.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement. The
//! renderer reads the config on every page, so reads hand out `Arc` clones
//! instead of taking a lock.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get the current global config.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install a validated config as the global one.
///
/// Returns the installed `Arc` so the caller can keep a direct handle.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}
