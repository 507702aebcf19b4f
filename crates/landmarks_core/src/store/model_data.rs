//! Process-wide model store read by the UI layer.
//!
//! # Responsibility
//! - Own the catalog, the collection store, and transient UI state.
//! - Validate landmark ids against the catalog before mutating collections.
//! - Publish a version counter so observers know when to refresh.
//!
//! # Invariants
//! - `version` increases by one for every call that changed state; no-ops
//!   and failed calls leave it untouched.
//! - The navigation path never points at a deleted collection.
//! - `selected_landmark`, when set, is a catalog id.

use crate::catalog::index::Catalog;
use crate::catalog::loader::{seed_catalog, CatalogResult};
use crate::model::badge::{earned_badges, Badge};
use crate::model::collection::{CollectionId, LandmarkCollection};
use crate::model::landmark::{Landmark, LandmarkId};
use crate::model::navigation::NavigationTarget;
use crate::search::filter::filter;
use crate::store::collections::{CollectionStore, StoreError, StoreResult};
use log::{debug, info};

/// Favorites in the bundled sample data.
const SEED_FAVORITES: [LandmarkId; 4] = [1001, 1021, 1007, 1012];
/// Sample user collections: (name, description, members).
const SEED_COLLECTIONS: [(&str, &str, &[LandmarkId]); 2] = [
    (
        "Deserts",
        "Dry places with big skies.",
        &[1001, 1003, 1006, 1011],
    ),
    (
        "Mountain Peaks",
        "Summits worth the climb.",
        &[1014, 1016, 1018, 1007],
    ),
];

/// Catalog, collections, and UI selection state.
#[derive(Debug, Clone)]
pub struct ModelData {
    catalog: Catalog,
    collections: CollectionStore,
    search_text: String,
    selected_landmark: Option<LandmarkId>,
    inspector_presented: bool,
    navigation_path: Vec<NavigationTarget>,
    badges_expanded: bool,
    version: u64,
}

impl ModelData {
    /// Creates a store with the given catalog and an empty Favorites.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            collections: CollectionStore::new(),
            search_text: String::new(),
            selected_landmark: None,
            inspector_presented: false,
            navigation_path: Vec::new(),
            badges_expanded: false,
            version: 0,
        }
    }

    /// Creates a store from the bundled catalog with sample collections.
    pub fn with_seed() -> CatalogResult<Self> {
        let mut model = Self::new(seed_catalog()?);
        model.apply_seed_collections();
        info!(
            "event=model_seed module=store status=ok landmarks={} collections={}",
            model.catalog.len(),
            model.collections.len()
        );
        Ok(model)
    }

    /// Installs sample favorites and collections. Ids missing from the
    /// catalog are skipped.
    pub fn apply_seed_collections(&mut self) {
        let favorites_id = self.collections.favorites_id();
        for landmark_id in SEED_FAVORITES {
            self.add_seed_landmark(favorites_id, landmark_id);
        }
        for (name, description, members) in SEED_COLLECTIONS {
            let id = self.create_collection(Some(name.to_string()));
            if let Err(err) = self.set_collection_description(id, description) {
                debug!(
                    "event=model_seed module=store status=skipped collection_id={} error={}",
                    id, err
                );
            }
            for landmark_id in members {
                self.add_seed_landmark(id, *landmark_id);
            }
        }
    }

    fn add_seed_landmark(&mut self, collection_id: CollectionId, landmark_id: LandmarkId) {
        if let Err(err) = self.add_landmark(collection_id, landmark_id) {
            debug!(
                "event=model_seed module=store status=skipped collection_id={} landmark_id={} error={}",
                collection_id, landmark_id, err
            );
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn collections(&self) -> &CollectionStore {
        &self.collections
    }

    pub fn collection(&self, id: CollectionId) -> Option<&LandmarkCollection> {
        self.collections.get(id)
    }

    pub fn favorites(&self) -> &LandmarkCollection {
        self.collections.favorites()
    }

    /// Resolves a collection's member ids to catalog records, in order.
    pub fn collection_landmarks(&self, id: CollectionId) -> StoreResult<Vec<&Landmark>> {
        let collection = self
            .collections
            .get(id)
            .ok_or(StoreError::CollectionNotFound(id))?;
        Ok(collection
            .landmarks()
            .iter()
            .filter_map(|landmark_id| self.catalog.get(*landmark_id))
            .collect())
    }

    /// Change counter for observers.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version != version
    }

    // Collections

    /// Appends a new empty collection and returns its id.
    pub fn create_collection(&mut self, name: Option<String>) -> CollectionId {
        let id = self.collections.create_collection(name);
        self.mark_dirty();
        id
    }

    /// Creates a collection and pushes it onto the navigation path.
    pub fn add_collection_and_open(&mut self, name: Option<String>) -> CollectionId {
        let id = self.create_collection(name);
        self.navigation_path.push(NavigationTarget::Collection(id));
        id
    }

    pub fn rename_collection(
        &mut self,
        id: CollectionId,
        new_name: impl Into<String>,
    ) -> StoreResult<()> {
        if self.collections.rename_collection(id, new_name)? {
            self.mark_dirty();
        }
        Ok(())
    }

    pub fn set_collection_description(
        &mut self,
        id: CollectionId,
        description: impl Into<String>,
    ) -> StoreResult<()> {
        if self.collections.set_description(id, description)? {
            self.mark_dirty();
        }
        Ok(())
    }

    /// Appends a catalog landmark to a collection; no-op when already a
    /// member.
    ///
    /// # Errors
    /// - `LandmarkNotFound` when the landmark is not in the catalog.
    /// - `CollectionNotFound` when the collection does not exist.
    pub fn add_landmark(
        &mut self,
        collection_id: CollectionId,
        landmark_id: LandmarkId,
    ) -> StoreResult<()> {
        self.ensure_landmark(landmark_id)?;
        if self.collections.add_landmark(collection_id, landmark_id)? {
            self.mark_dirty();
        }
        Ok(())
    }

    /// Removes a landmark from a collection; no-op when not a member.
    ///
    /// # Errors
    /// - `CollectionNotFound` when the collection does not exist.
    pub fn remove_landmark(
        &mut self,
        collection_id: CollectionId,
        landmark_id: LandmarkId,
    ) -> StoreResult<()> {
        if self.collections.remove_landmark(collection_id, landmark_id)? {
            self.mark_dirty();
        }
        Ok(())
    }

    /// Flips membership of a landmark in a collection, as the selection
    /// list does on tap. Returns the resulting membership.
    pub fn toggle_membership(
        &mut self,
        collection_id: CollectionId,
        landmark_id: LandmarkId,
    ) -> StoreResult<bool> {
        self.ensure_landmark(landmark_id)?;
        let collection = self
            .collections
            .get(collection_id)
            .ok_or(StoreError::CollectionNotFound(collection_id))?;
        if collection.contains(landmark_id) {
            self.remove_landmark(collection_id, landmark_id)?;
            Ok(false)
        } else {
            self.add_landmark(collection_id, landmark_id)?;
            Ok(true)
        }
    }

    /// Adds or removes a landmark from Favorites and returns the new state.
    ///
    /// # Errors
    /// - `LandmarkNotFound` when the landmark is not in the catalog.
    pub fn toggle_favorite(&mut self, landmark_id: LandmarkId) -> StoreResult<bool> {
        let favorites_id = self.collections.favorites_id();
        let is_favorite = self.toggle_membership(favorites_id, landmark_id)?;
        debug!(
            "event=favorite_toggle module=store status=ok landmark_id={} favorite={}",
            landmark_id, is_favorite
        );
        Ok(is_favorite)
    }

    /// Derived favorite flag.
    pub fn is_favorite(&self, landmark_id: LandmarkId) -> bool {
        self.collections.favorites().contains(landmark_id)
    }

    /// Deletes a user collection and prunes it from the navigation path.
    ///
    /// # Errors
    /// - `InvalidOperation` for Favorites.
    /// - `CollectionNotFound` for unknown ids.
    pub fn delete_collection(&mut self, id: CollectionId) -> StoreResult<()> {
        self.collections.delete_collection(id)?;
        self.navigation_path
            .retain(|target| *target != NavigationTarget::Collection(id));
        self.mark_dirty();
        Ok(())
    }

    // Search

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.search_text {
            self.search_text = text;
            self.mark_dirty();
        }
    }

    /// Catalog landmarks matching the current search text.
    pub fn search_results(&self) -> Vec<&Landmark> {
        filter(self.catalog.landmarks(), &self.search_text)
    }

    // Selection and inspector

    pub fn selected_landmark(&self) -> Option<&Landmark> {
        self.selected_landmark.and_then(|id| self.catalog.get(id))
    }

    pub fn is_inspector_presented(&self) -> bool {
        self.inspector_presented
    }

    /// Sets or clears the selected landmark.
    pub fn select_landmark(&mut self, landmark_id: Option<LandmarkId>) -> StoreResult<()> {
        if let Some(id) = landmark_id {
            self.ensure_landmark(id)?;
        }
        if self.selected_landmark != landmark_id {
            self.selected_landmark = landmark_id;
            self.mark_dirty();
        }
        Ok(())
    }

    /// Selects a landmark and flips inspector presentation. Returns whether
    /// the inspector is now presented.
    pub fn toggle_inspector(&mut self, landmark_id: LandmarkId) -> StoreResult<bool> {
        self.ensure_landmark(landmark_id)?;
        self.selected_landmark = Some(landmark_id);
        self.inspector_presented = !self.inspector_presented;
        self.mark_dirty();
        Ok(self.inspector_presented)
    }

    pub fn dismiss_inspector(&mut self) {
        if self.inspector_presented {
            self.inspector_presented = false;
            self.mark_dirty();
        }
    }

    // Navigation

    pub fn navigation_path(&self) -> &[NavigationTarget] {
        &self.navigation_path
    }

    /// Pushes a destination after checking it exists.
    pub fn navigate_to(&mut self, target: NavigationTarget) -> StoreResult<()> {
        match target {
            NavigationTarget::Landmark(id) => self.ensure_landmark(id)?,
            NavigationTarget::Collection(id) => {
                if !self.collections.contains(id) {
                    return Err(StoreError::CollectionNotFound(id));
                }
            }
        }
        self.navigation_path.push(target);
        self.mark_dirty();
        Ok(())
    }

    /// Pops the top destination, if any.
    pub fn navigate_back(&mut self) -> Option<NavigationTarget> {
        let popped = self.navigation_path.pop();
        if popped.is_some() {
            self.mark_dirty();
        }
        popped
    }

    pub fn reset_navigation(&mut self) {
        if !self.navigation_path.is_empty() {
            self.navigation_path.clear();
            self.mark_dirty();
        }
    }

    // Badges

    pub fn earned_badges(&self) -> Vec<Badge> {
        earned_badges()
    }

    pub fn badges_expanded(&self) -> bool {
        self.badges_expanded
    }

    /// Expands or collapses the badge tray; returns the new state.
    pub fn toggle_badges_expanded(&mut self) -> bool {
        self.badges_expanded = !self.badges_expanded;
        self.mark_dirty();
        self.badges_expanded
    }

    fn ensure_landmark(&self, landmark_id: LandmarkId) -> StoreResult<()> {
        if self.catalog.contains(landmark_id) {
            Ok(())
        } else {
            Err(StoreError::LandmarkNotFound(landmark_id))
        }
    }

    fn mark_dirty(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::ModelData;
    use crate::catalog::index::Catalog;
    use crate::model::landmark::Landmark;
    use crate::model::navigation::NavigationTarget;

    #[test]
    fn seed_model_has_favorites_first_and_sample_collections() {
        let model = ModelData::with_seed().unwrap();
        let names = model
            .collections()
            .iter()
            .map(|collection| collection.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Favorites", "Deserts", "Mountain Peaks"]);
        assert!(model.is_favorite(1001));
        assert!(!model.is_favorite(1002));
    }

    #[test]
    fn add_collection_and_open_pushes_navigation_target() {
        let mut model = ModelData::with_seed().unwrap();
        let id = model.add_collection_and_open(None);
        assert_eq!(
            model.navigation_path(),
            &[NavigationTarget::Collection(id)]
        );
    }

    #[test]
    fn toggle_inspector_selects_and_flips() {
        let mut model = ModelData::with_seed().unwrap();
        assert!(model.toggle_inspector(1016).unwrap());
        assert_eq!(model.selected_landmark().map(|l| l.id), Some(1016));
        assert!(!model.toggle_inspector(1016).unwrap());
        assert!(model.toggle_inspector(99).is_err());
    }

    #[test]
    fn seed_skips_ids_missing_from_catalog() {
        let catalog = Catalog::from_landmarks(vec![Landmark::new(1001, "Sahara", "Africa", "")])
            .unwrap();
        let mut model = ModelData::new(catalog);
        model.apply_seed_collections();

        assert_eq!(model.favorites().landmarks(), &[1001]);
        let deserts = model
            .collections()
            .user_collections()
            .find(|collection| collection.name == "Deserts")
            .unwrap();
        assert_eq!(deserts.landmarks(), &[1001]);
        assert_eq!(deserts.description, "Dry places with big skies.");
    }

    #[test]
    fn toggle_badges_expanded_flips_state() {
        let mut model = ModelData::with_seed().unwrap();
        assert!(model.toggle_badges_expanded());
        assert!(!model.toggle_badges_expanded());
        assert!(!model.earned_badges().is_empty());
    }
}
