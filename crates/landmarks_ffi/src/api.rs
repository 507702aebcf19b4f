//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose store operations to the UI runtime as sync FRB calls.
//! - Hold the single process-wide `ModelData` behind one mutex.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutation runs to completion under the store lock.
//! - Ids cross the boundary as strings (collections) or `u32` (landmarks).

use landmarks_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, load_catalog_file,
    ping as ping_inner, seed_catalog, Catalog, CollectionId, LandmarkCollection, ModelData,
    StoreResult,
};
use log::{error, warn};
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

const CATALOG_PATH_ENV: &str = "LANDMARKS_CATALOG_PATH";
static MODEL: OnceLock<Mutex<ModelData>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Landmark row for lists and grids.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkItem {
    pub id: u32,
    pub name: String,
    pub continent: String,
    pub description: String,
    pub thumbnail_image_name: Option<String>,
    /// Derived from Favorites membership.
    pub is_favorite: bool,
}

/// Collection row for the collections grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionItem {
    /// Stable collection id in string form.
    pub id: String,
    pub name: String,
    pub description: String,
    pub landmark_ids: Vec<u32>,
    /// Favorites title and description are read-only in the editor.
    pub is_favorites_collection: bool,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Created collection id, for create calls.
    pub collection_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            collection_id: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            collection_id: None,
            message: message.into(),
        }
    }
}

/// Toggle response envelope carrying the resulting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleResponse {
    pub ok: bool,
    /// Resulting state; `false` on failure.
    pub value: bool,
    pub message: String,
}

/// Lists catalog landmarks matching `query` (blank lists all).
#[flutter_rust_bridge::frb(sync)]
pub fn list_landmarks(query: String) -> Vec<LandmarkItem> {
    let model = lock_model();
    landmarks_core::filter(model.catalog().landmarks(), &query)
        .into_iter()
        .map(|landmark| LandmarkItem {
            id: landmark.id,
            name: landmark.name.clone(),
            continent: landmark.continent.clone(),
            description: landmark.description.clone(),
            thumbnail_image_name: landmark.thumbnail_image_name().map(str::to_owned),
            is_favorite: model.is_favorite(landmark.id),
        })
        .collect()
}

/// Lists collections, Favorites first.
#[flutter_rust_bridge::frb(sync)]
pub fn list_collections() -> Vec<CollectionItem> {
    lock_model()
        .collections()
        .iter()
        .map(to_collection_item)
        .collect()
}

/// Stores current search text.
#[flutter_rust_bridge::frb(sync)]
pub fn set_search_text(text: String) {
    lock_model().set_search_text(text);
}

/// Current store version; changes whenever visible state changed.
#[flutter_rust_bridge::frb(sync)]
pub fn store_version() -> u64 {
    lock_model().version()
}

/// Creates a collection. Blank name falls back to the default name.
#[flutter_rust_bridge::frb(sync)]
pub fn create_collection(name: Option<String>) -> ActionResponse {
    let name = name
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    let id = lock_model().create_collection(name);
    ActionResponse {
        collection_id: Some(id.to_string()),
        ..ActionResponse::success("Collection created.")
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn rename_collection(collection_id: String, name: String) -> ActionResponse {
    run_action("rename_collection", "Collection renamed.", &collection_id, |model, id| {
        model.rename_collection(id, name)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn set_collection_description(collection_id: String, description: String) -> ActionResponse {
    run_action(
        "set_collection_description",
        "Description updated.",
        &collection_id,
        |model, id| model.set_collection_description(id, description),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn add_landmark_to_collection(collection_id: String, landmark_id: u32) -> ActionResponse {
    run_action(
        "add_landmark_to_collection",
        "Landmark added.",
        &collection_id,
        |model, id| model.add_landmark(id, landmark_id),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn remove_landmark_from_collection(collection_id: String, landmark_id: u32) -> ActionResponse {
    run_action(
        "remove_landmark_from_collection",
        "Landmark removed.",
        &collection_id,
        |model, id| model.remove_landmark(id, landmark_id),
    )
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_collection(collection_id: String) -> ActionResponse {
    run_action(
        "delete_collection",
        "Collection deleted.",
        &collection_id,
        |model, id| model.delete_collection(id),
    )
}

/// Toggles Favorites membership for a landmark.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_favorite(landmark_id: u32) -> ToggleResponse {
    match lock_model().toggle_favorite(landmark_id) {
        Ok(value) => ToggleResponse {
            ok: true,
            value,
            message: (if value { "Favorited." } else { "Unfavorited." }).to_string(),
        },
        Err(err) => ToggleResponse {
            ok: false,
            value: false,
            message: format!("toggle_favorite failed: {err}"),
        },
    }
}

/// Selects a landmark and flips the inspector.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_inspector(landmark_id: u32) -> ToggleResponse {
    match lock_model().toggle_inspector(landmark_id) {
        Ok(value) => ToggleResponse {
            ok: true,
            value,
            message: String::new(),
        },
        Err(err) => ToggleResponse {
            ok: false,
            value: false,
            message: format!("toggle_inspector failed: {err}"),
        },
    }
}

fn run_action(
    operation: &str,
    success_message: &str,
    collection_id: &str,
    f: impl FnOnce(&mut ModelData, CollectionId) -> StoreResult<()>,
) -> ActionResponse {
    let id = match Uuid::parse_str(collection_id.trim()) {
        Ok(id) => id,
        Err(err) => {
            return ActionResponse::failure(format!(
                "{operation} failed: invalid collection id `{collection_id}`: {err}"
            ))
        }
    };
    match f(&mut lock_model(), id) {
        Ok(()) => ActionResponse::success(success_message),
        Err(err) => {
            warn!("event=ffi_action module=ffi status=error op={operation} error={err}");
            ActionResponse::failure(format!("{operation} failed: {err}"))
        }
    }
}

fn lock_model() -> MutexGuard<'static, ModelData> {
    let model = MODEL.get_or_init(|| Mutex::new(load_model()));
    // Store calls never leave partial mutations; a poisoned store is consistent.
    model.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn load_model() -> ModelData {
    if let Ok(raw) = std::env::var(CATALOG_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            match load_catalog_file(trimmed) {
                Ok(catalog) => return ModelData::new(catalog),
                Err(err) => error!(
                    "event=model_init module=ffi status=fallback source=env error={err}"
                ),
            }
        }
    }
    match seed_catalog() {
        Ok(catalog) => {
            let mut model = ModelData::new(catalog);
            model.apply_seed_collections();
            model
        }
        Err(err) => {
            error!("event=model_init module=ffi status=error source=seed error={err}");
            ModelData::new(Catalog::default())
        }
    }
}

fn to_collection_item(collection: &LandmarkCollection) -> CollectionItem {
    CollectionItem {
        id: collection.id.to_string(),
        name: collection.name.clone(),
        description: collection.description.clone(),
        landmark_ids: collection.landmarks().to_vec(),
        is_favorites_collection: collection.is_favorites_collection(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        add_landmark_to_collection, core_version, create_collection, delete_collection,
        init_logging, list_collections, list_landmarks, ping, remove_landmark_from_collection,
        rename_collection, store_version, toggle_favorite,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn list_landmarks_filters_seed_catalog() {
        let items = list_landmarks("canyon".to_string());
        assert!(!items.is_empty());
        assert!(items
            .iter()
            .all(|item| item.name.to_lowercase().contains("canyon")
                || item.description.to_lowercase().contains("canyon")));
    }

    #[test]
    fn collection_round_trip_through_ffi() {
        let created = create_collection(Some("  FFI Trip  ".to_string()));
        assert!(created.ok, "{}", created.message);
        let id = created.collection_id.expect("create returns id");

        assert!(add_landmark_to_collection(id.clone(), 1002).ok);
        assert!(add_landmark_to_collection(id.clone(), 1005).ok);
        assert!(remove_landmark_from_collection(id.clone(), 1002).ok);
        assert!(rename_collection(id.clone(), "Falls".to_string()).ok);

        let item = list_collections()
            .into_iter()
            .find(|item| item.id == id)
            .expect("created collection is listed");
        assert_eq!(item.name, "Falls");
        assert_eq!(item.landmark_ids, vec![1005]);

        assert!(delete_collection(id.clone()).ok);
        assert!(!delete_collection(id).ok);
    }

    #[test]
    fn favorites_cannot_be_renamed_or_deleted() {
        let favorites = list_collections()
            .into_iter()
            .find(|item| item.is_favorites_collection)
            .expect("favorites always present");
        assert!(!rename_collection(favorites.id.clone(), "Mine".to_string()).ok);
        assert!(!delete_collection(favorites.id).ok);
    }

    #[test]
    fn malformed_collection_id_fails_without_panic() {
        let response = add_landmark_to_collection("not-a-uuid".to_string(), 1001);
        assert!(!response.ok);
        assert!(response.message.contains("invalid collection id"));
    }

    #[test]
    fn toggle_favorite_reports_unknown_landmark() {
        let response = toggle_favorite(4_000_000);
        assert!(!response.ok);
        assert!(response.message.contains("landmark not found"));
    }

    #[test]
    fn store_version_advances_on_mutation() {
        let before = store_version();
        let created = create_collection(None);
        assert!(created.ok);
        assert!(store_version() > before);
    }
}
