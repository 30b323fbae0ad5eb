//! Core types - pure abstractions shared across the codebase.

mod route;

pub use route::{InvalidRoute, RoutePath};
