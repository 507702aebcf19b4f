//! Landmark search entry points.
//!
//! # Responsibility
//! - Filter catalog landmarks by the user's search text.
//! - Keep result shaping inside core so every UI surface agrees.

pub mod filter;
