//! Configuration section definitions.
//!
//! Each module covers one part of `waypost.toml`:
//!
//! | Module    | TOML keys                        | Purpose                    |
//! |-----------|----------------------------------|----------------------------|
//! | `info`    | `title`, `site`, `base_path`, .. | Scalar site metadata       |
//! | `social`  | `[[social]]`                     | Header social links        |
//! | `sidebar` | `[[sidebar]]`                    | Sidebar navigation tree    |

mod info;
mod sidebar;
mod social;

// Re-export section types
pub use sidebar::{MAX_SIDEBAR_DEPTH, NavNode, PageLinks, RawNavEntry};
pub use social::SocialLink;

// Validation entry points, wired together in `SiteConfig::load`
pub(crate) use info::{validate_base_path, validate_site_url, validate_title};
pub(crate) use sidebar::{build_sidebar, trail};
pub(crate) use social::validate_social;
