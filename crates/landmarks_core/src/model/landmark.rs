//! Landmark domain model.
//!
//! # Responsibility
//! - Define the immutable catalog record for one place.
//!
//! # Invariants
//! - `id` is unique within a catalog and never reused.
//! - Favorite state is not stored here; it is derived from Favorites
//!   collection membership.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable identifier for one catalog landmark.
pub type LandmarkId = u32;

/// Suffix used by thumbnail asset identifiers.
const THUMBNAIL_SUFFIX: &str = "-thumb";

/// Catalog record for one landmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Stable catalog id.
    pub id: LandmarkId,
    /// User-facing display name.
    pub name: String,
    /// Continent label used to group the selection list.
    pub continent: String,
    /// Long-form description shown in detail view.
    pub description: String,
    /// Asset identifiers resolved by the host asset pipeline.
    #[serde(default)]
    pub image_refs: BTreeSet<String>,
    /// WGS84 latitude in degrees.
    pub latitude: f64,
    /// WGS84 longitude in degrees.
    pub longitude: f64,
}

impl Landmark {
    /// Creates a landmark without image references or coordinates.
    pub fn new(
        id: LandmarkId,
        name: impl Into<String>,
        continent: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            continent: continent.into(),
            description: description.into(),
            image_refs: BTreeSet::new(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Returns the full-size background asset id, if registered.
    pub fn background_image_name(&self) -> Option<&str> {
        let wanted = self.id.to_string();
        self.image_refs
            .get(wanted.as_str())
            .map(String::as_str)
    }

    /// Returns the thumbnail asset id, if registered.
    pub fn thumbnail_image_name(&self) -> Option<&str> {
        let wanted = format!("{}{THUMBNAIL_SUFFIX}", self.id);
        self.image_refs
            .get(wanted.as_str())
            .map(String::as_str)
    }
}
