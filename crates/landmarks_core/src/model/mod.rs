//! Domain model for the landmark catalog and user collections.
//!
//! # Responsibility
//! - Define canonical data structures read by the store and the UI layer.
//! - Keep landmark identity separate from collection membership.
//!
//! # Invariants
//! - Every landmark is identified by a stable `LandmarkId`.
//! - Collections reference landmarks by id; they never own copies.

pub mod badge;
pub mod collection;
pub mod landmark;
pub mod navigation;
