//! Core domain logic for the Landmarks app.
//! This crate owns the catalog, collections, and UI selection state.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;

pub use catalog::index::Catalog;
pub use catalog::loader::{
    load_catalog_file, load_catalog_json, seed_catalog, CatalogError, CatalogResult,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::badge::{earned_badges, Badge, BadgeColor};
pub use model::collection::{CollectionId, LandmarkCollection};
pub use model::landmark::{Landmark, LandmarkId};
pub use model::navigation::{NavigationPage, NavigationTarget};
pub use search::filter::{filter, filter_ids};
pub use store::collections::{
    CollectionStore, StoreError, StoreResult, DEFAULT_COLLECTION_NAME, FAVORITES_NAME,
};
pub use store::model_data::ModelData;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
