//! Landmark catalog: the fixed set of places loaded at startup.
//!
//! # Responsibility
//! - Keep landmarks in catalog order with O(1) id lookup.
//! - Load and validate catalog JSON (bundled seed or host-provided file).
//!
//! # Invariants
//! - Catalog ids are unique.
//! - Catalog order is the load order and never changes after load.

pub mod index;
pub mod loader;
