//! Collection store.
//!
//! # Responsibility
//! - Create, rename, describe, and delete collections.
//! - Add and remove landmark references with uniqueness and order rules.
//!
//! # Invariants
//! - Favorites is created with the store, sits at index 0, and can be
//!   neither renamed, re-described, nor deleted.
//! - Collection order is creation order; rename keeps position.
//! - Landmark membership is unique per collection; add appends, remove
//!   keeps the relative order of the rest.

use crate::model::collection::{CollectionId, LandmarkCollection};
use crate::model::landmark::LandmarkId;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Display name of the Favorites collection.
pub const FAVORITES_NAME: &str = "Favorites";
/// Name given to collections created without one.
pub const DEFAULT_COLLECTION_NAME: &str = "New Collection";

/// Result type used by store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Referenced landmark id is not in the catalog.
    LandmarkNotFound(LandmarkId),
    /// Referenced collection id is not in the store.
    CollectionNotFound(CollectionId),
    /// Mutation would break a store invariant.
    InvalidOperation(&'static str),
}

impl StoreError {
    /// Returns `true` for either not-found variant.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::LandmarkNotFound(_) | Self::CollectionNotFound(_)
        )
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LandmarkNotFound(id) => write!(f, "landmark not found: {id}"),
            Self::CollectionNotFound(id) => write!(f, "collection not found: {id}"),
            Self::InvalidOperation(details) => write!(f, "invalid operation: {details}"),
        }
    }
}

impl Error for StoreError {}

/// Ordered owner of all collections.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    collections: Vec<LandmarkCollection>,
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionStore {
    /// Creates a store holding only an empty Favorites collection.
    pub fn new() -> Self {
        Self {
            collections: vec![LandmarkCollection::favorites(FAVORITES_NAME, "")],
        }
    }

    /// Returns the Favorites collection.
    pub fn favorites(&self) -> &LandmarkCollection {
        // Favorites is created in `new` and can never be deleted.
        &self.collections[0]
    }

    pub fn favorites_id(&self) -> CollectionId {
        self.favorites().id
    }

    pub fn get(&self, id: CollectionId) -> Option<&LandmarkCollection> {
        self.collections.iter().find(|collection| collection.id == id)
    }

    pub fn contains(&self, id: CollectionId) -> bool {
        self.get(id).is_some()
    }

    /// Number of collections, Favorites included.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Always `false`; Favorites is permanent.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// All collections in store order, Favorites first.
    pub fn iter(&self) -> std::slice::Iter<'_, LandmarkCollection> {
        self.collections.iter()
    }

    /// Collections other than Favorites, in store order.
    pub fn user_collections(&self) -> impl Iterator<Item = &LandmarkCollection> {
        self.collections
            .iter()
            .filter(|collection| !collection.is_favorites_collection())
    }

    /// Collections that currently include `landmark_id`.
    pub fn collections_containing(
        &self,
        landmark_id: LandmarkId,
    ) -> impl Iterator<Item = &LandmarkCollection> {
        self.collections
            .iter()
            .filter(move |collection| collection.contains(landmark_id))
    }

    /// Appends a new empty collection and returns its id.
    pub fn create_collection(&mut self, name: Option<String>) -> CollectionId {
        let name = name.unwrap_or_else(|| DEFAULT_COLLECTION_NAME.to_string());
        let collection = LandmarkCollection::new(name, "");
        let id = collection.id;
        self.collections.push(collection);
        debug!(
            "event=collection_create module=store status=ok collection_id={} count={}",
            id,
            self.collections.len()
        );
        id
    }

    /// Overwrites a user collection's name in place.
    ///
    /// Returns `true` when the name changed.
    ///
    /// # Errors
    /// - `InvalidOperation` for Favorites or unknown ids.
    pub fn rename_collection(
        &mut self,
        id: CollectionId,
        new_name: impl Into<String>,
    ) -> StoreResult<bool> {
        let new_name = new_name.into();
        let collection = self.editable_mut(id, "favorites name is read-only")?;
        if collection.name == new_name {
            return Ok(false);
        }
        collection.name = new_name;
        debug!(
            "event=collection_rename module=store status=ok collection_id={} name_chars={}",
            id,
            collection.name.chars().count()
        );
        Ok(true)
    }

    /// Overwrites a user collection's description in place.
    ///
    /// Returns `true` when the description changed.
    ///
    /// # Errors
    /// Same as [`CollectionStore::rename_collection`].
    pub fn set_description(
        &mut self,
        id: CollectionId,
        description: impl Into<String>,
    ) -> StoreResult<bool> {
        let description = description.into();
        let collection = self.editable_mut(id, "favorites description is read-only")?;
        if collection.description == description {
            return Ok(false);
        }
        collection.description = description;
        debug!(
            "event=collection_describe module=store status=ok collection_id={} description_chars={}",
            id,
            collection.description.chars().count()
        );
        Ok(true)
    }

    /// Appends `landmark_id` to a collection unless already a member.
    ///
    /// Returns `true` when membership changed. Catalog validation is the
    /// caller's concern.
    pub fn add_landmark(
        &mut self,
        collection_id: CollectionId,
        landmark_id: LandmarkId,
    ) -> StoreResult<bool> {
        Ok(self.get_mut(collection_id)?.insert_landmark(landmark_id))
    }

    /// Removes `landmark_id` from a collection if it is a member.
    ///
    /// Returns `true` when membership changed.
    pub fn remove_landmark(
        &mut self,
        collection_id: CollectionId,
        landmark_id: LandmarkId,
    ) -> StoreResult<bool> {
        Ok(self.get_mut(collection_id)?.remove_landmark(landmark_id))
    }

    /// Removes a user collection, keeping the order of the rest.
    ///
    /// # Errors
    /// - `CollectionNotFound` for unknown ids.
    /// - `InvalidOperation` for Favorites.
    pub fn delete_collection(&mut self, id: CollectionId) -> StoreResult<LandmarkCollection> {
        let index = self
            .collections
            .iter()
            .position(|collection| collection.id == id)
            .ok_or(StoreError::CollectionNotFound(id))?;
        if self.collections[index].is_favorites_collection() {
            return Err(StoreError::InvalidOperation(
                "favorites collection cannot be deleted",
            ));
        }
        let removed = self.collections.remove(index);
        debug!(
            "event=collection_delete module=store status=ok collection_id={} count={}",
            id,
            self.collections.len()
        );
        Ok(removed)
    }

    fn get_mut(&mut self, id: CollectionId) -> StoreResult<&mut LandmarkCollection> {
        self.collections
            .iter_mut()
            .find(|collection| collection.id == id)
            .ok_or(StoreError::CollectionNotFound(id))
    }

    fn editable_mut(
        &mut self,
        id: CollectionId,
        reason: &'static str,
    ) -> StoreResult<&mut LandmarkCollection> {
        let collection = self
            .collections
            .iter_mut()
            .find(|collection| collection.id == id)
            .ok_or(StoreError::InvalidOperation("collection does not exist"))?;
        if collection.is_favorites_collection() {
            return Err(StoreError::InvalidOperation(reason));
        }
        Ok(collection)
    }
}
