//! Landmark collection model.
//!
//! # Responsibility
//! - Hold a named, ordered group of landmark references.
//! - Provide membership primitives used by the collection store.
//!
//! # Invariants
//! - `landmarks` never contains the same id twice.
//! - Insert appends at the end; removal keeps relative order of the rest.
//! - `is_favorites_collection` is fixed at construction.

use crate::model::landmark::LandmarkId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one collection.
pub type CollectionId = Uuid;

/// Named, ordered group of landmark references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkCollection {
    pub id: CollectionId,
    pub name: String,
    pub description: String,
    landmarks: Vec<LandmarkId>,
    is_favorites_collection: bool,
}

impl LandmarkCollection {
    /// Creates an empty user collection with a generated id.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            landmarks: Vec::new(),
            is_favorites_collection: false,
        }
    }

    /// Creates the distinguished Favorites collection.
    pub(crate) fn favorites(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            is_favorites_collection: true,
            ..Self::new(name, description)
        }
    }

    pub fn is_favorites_collection(&self) -> bool {
        self.is_favorites_collection
    }

    /// Member ids in collection order.
    pub fn landmarks(&self) -> &[LandmarkId] {
        &self.landmarks
    }

    pub fn contains(&self, landmark_id: LandmarkId) -> bool {
        self.landmarks.contains(&landmark_id)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Appends `landmark_id` unless already present.
    ///
    /// Returns `true` when membership changed.
    pub fn insert_landmark(&mut self, landmark_id: LandmarkId) -> bool {
        if self.contains(landmark_id) {
            return false;
        }
        self.landmarks.push(landmark_id);
        true
    }

    /// Removes `landmark_id` if present.
    ///
    /// Returns `true` when membership changed.
    pub fn remove_landmark(&mut self, landmark_id: LandmarkId) -> bool {
        match self.landmarks.iter().position(|id| *id == landmark_id) {
            Some(index) => {
                self.landmarks.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LandmarkCollection;

    #[test]
    fn insert_is_idempotent_and_appends() {
        let mut collection = LandmarkCollection::new("Trip", "");
        assert!(collection.insert_landmark(1003));
        assert!(collection.insert_landmark(1001));
        assert!(!collection.insert_landmark(1003));
        assert_eq!(collection.landmarks(), &[1003, 1001]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut collection = LandmarkCollection::new("Trip", "");
        for id in [1001, 1002, 1003] {
            collection.insert_landmark(id);
        }
        assert!(collection.remove_landmark(1002));
        assert!(!collection.remove_landmark(1002));
        assert_eq!(collection.landmarks(), &[1001, 1003]);
    }

    #[test]
    fn favorites_flag_is_set_only_by_favorites_constructor() {
        assert!(!LandmarkCollection::new("Trip", "").is_favorites_collection());
        assert!(LandmarkCollection::favorites("Favorites", "").is_favorites_collection());
    }
}
