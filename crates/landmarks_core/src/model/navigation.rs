//! Navigation state model.
//!
//! # Responsibility
//! - Name the destinations that can be pushed onto the navigation path.
//! - List the top-level sidebar pages.

use crate::model::collection::CollectionId;
use crate::model::landmark::LandmarkId;
use serde::{Deserialize, Serialize};

/// One entry of the navigation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum NavigationTarget {
    /// Landmark detail page.
    Landmark(LandmarkId),
    /// Collection detail page.
    Collection(CollectionId),
}

/// Top-level sidebar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationPage {
    Landmarks,
    Map,
    Collections,
}

impl NavigationPage {
    /// Sidebar pages in display order.
    pub const MAIN_PAGES: [NavigationPage; 3] = [
        NavigationPage::Landmarks,
        NavigationPage::Map,
        NavigationPage::Collections,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Landmarks => "Landmarks",
            Self::Map => "Map",
            Self::Collections => "Collections",
        }
    }

    /// System symbol shown next to the page name.
    pub fn symbol_name(self) -> &'static str {
        match self {
            Self::Landmarks => "building.columns",
            Self::Map => "map",
            Self::Collections => "books.vertical",
        }
    }
}
