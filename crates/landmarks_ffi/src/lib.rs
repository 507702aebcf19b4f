//! Flutter-facing bindings for the landmarks core.

pub mod api;
