//! In-memory stores for collections and UI-facing model state.
//!
//! # Responsibility
//! - Own user collections, including the distinguished Favorites collection.
//! - Own transient UI state: search text, selection, navigation path.
//!
//! # Invariants
//! - Exactly one collection is flagged as Favorites.
//! - Every operation either succeeds and mutates, or fails and leaves state
//!   unchanged.
//! - All mutation is single-writer; callers sharing a store across threads
//!   wrap it in one mutex.

pub mod collections;
pub mod model_data;
