//! Catalog JSON loading.
//!
//! # Responsibility
//! - Parse catalog JSON into validated `Catalog` values.
//! - Provide the bundled seed catalog used at process start.
//!
//! # Invariants
//! - A loaded catalog is never empty.
//! - Loading never panics; all failures surface as `CatalogError`.

use crate::catalog::index::Catalog;
use crate::model::landmark::{Landmark, LandmarkId};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const SEED_CATALOG_JSON: &str = include_str!("landmarks.json");

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from catalog loading and validation.
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file could not be read.
    Io(std::io::Error),
    /// Catalog text is not a valid landmark array.
    Parse(serde_json::Error),
    /// Two records share the same id.
    DuplicateId(LandmarkId),
    /// Catalog contains no landmarks.
    Empty,
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read catalog: {err}"),
            Self::Parse(err) => write!(f, "invalid catalog json: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate landmark id in catalog: {id}"),
            Self::Empty => write!(f, "catalog contains no landmarks"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Empty => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Parses a JSON array of landmarks.
///
/// # Errors
/// - `Parse` for malformed JSON or missing fields.
/// - `DuplicateId` when ids repeat.
/// - `Empty` for an empty array.
pub fn load_catalog_json(text: &str) -> CatalogResult<Catalog> {
    let landmarks: Vec<Landmark> = serde_json::from_str(text)?;
    if landmarks.is_empty() {
        return Err(CatalogError::Empty);
    }
    Catalog::from_landmarks(landmarks)
}

/// Reads and parses a catalog JSON file.
pub fn load_catalog_file(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    let result = std::fs::read_to_string(path)
        .map_err(CatalogError::from)
        .and_then(|text| load_catalog_json(&text));
    match &result {
        Ok(catalog) => info!(
            "event=catalog_load module=catalog status=ok source=file count={}",
            catalog.len()
        ),
        Err(err) => error!(
            "event=catalog_load module=catalog status=error source=file path={} error={}",
            path.display(),
            err
        ),
    }
    result
}

/// Parses the catalog bundled with the crate.
pub fn seed_catalog() -> CatalogResult<Catalog> {
    load_catalog_json(SEED_CATALOG_JSON)
}
