//! Site data loading and in-memory lookups.
//!
//! This crate gives the rendering collaborators concrete shape without a
//! database: raw rows (with their legacy alias keys) are loaded from a
//! YAML or JSON file, normalized once into the core record types, and
//! indexed into a [`SiteStore`] that serves every lookup trait the render
//! layer needs. [`CardCache`] adds request-scoped memoization on top.

pub mod cache;
pub mod load;
pub mod store;

pub use cache::CardCache;
pub use load::{DataError, SiteData, load_site_data};
pub use store::{GameExtra, SiteStore};
