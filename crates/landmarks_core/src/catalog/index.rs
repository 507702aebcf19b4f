//! Ordered, id-indexed landmark catalog.

use crate::catalog::loader::{CatalogError, CatalogResult};
use crate::model::landmark::{Landmark, LandmarkId};
use std::collections::HashMap;

/// Immutable catalog of landmarks.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    landmarks: Vec<Landmark>,
    positions: HashMap<LandmarkId, usize>,
}

impl Catalog {
    /// Builds a catalog preserving input order.
    ///
    /// # Errors
    /// - `CatalogError::DuplicateId` when two records share an id.
    pub fn from_landmarks(landmarks: Vec<Landmark>) -> CatalogResult<Self> {
        let mut positions = HashMap::with_capacity(landmarks.len());
        for (index, landmark) in landmarks.iter().enumerate() {
            if positions.insert(landmark.id, index).is_some() {
                return Err(CatalogError::DuplicateId(landmark.id));
            }
        }
        Ok(Self {
            landmarks,
            positions,
        })
    }

    pub fn get(&self, id: LandmarkId) -> Option<&Landmark> {
        self.positions
            .get(&id)
            .and_then(|index| self.landmarks.get(*index))
    }

    pub fn contains(&self, id: LandmarkId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// All landmarks in catalog order.
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Landmark> {
        self.landmarks.iter()
    }

    /// Groups landmarks by continent for the selection list.
    ///
    /// Continents appear in first-seen catalog order; members keep catalog
    /// order inside each group.
    pub fn grouped_by_continent(&self) -> Vec<(&str, Vec<&Landmark>)> {
        let mut groups: Vec<(&str, Vec<&Landmark>)> = Vec::new();
        for landmark in &self.landmarks {
            let continent = landmark.continent.as_str();
            match groups.iter_mut().find(|(name, _)| *name == continent) {
                Some((_, members)) => members.push(landmark),
                None => groups.push((continent, vec![landmark])),
            }
        }
        groups
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Landmark;
    type IntoIter = std::slice::Iter<'a, Landmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
