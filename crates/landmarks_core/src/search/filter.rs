//! Case-insensitive substring filter over landmarks.
//!
//! # Responsibility
//! - Match search text against landmark name and description.
//!
//! # Invariants
//! - Empty query returns every input landmark in input order.
//! - Output is a stable subsequence of the input (filter, never sort).
//! - Query text is matched literally; regex metacharacters have no meaning.

use crate::model::landmark::{Landmark, LandmarkId};
use log::warn;
use regex::{Regex, RegexBuilder};

/// Returns landmarks whose name or description contains `query`,
/// ignoring case, in input order. Whitespace is matched literally.
pub fn filter<'a>(landmarks: &'a [Landmark], query: &str) -> Vec<&'a Landmark> {
    if query.is_empty() {
        return landmarks.iter().collect();
    }

    match build_matcher(query) {
        Some(matcher) => landmarks
            .iter()
            .filter(|landmark| {
                matcher.is_match(&landmark.name) || matcher.is_match(&landmark.description)
            })
            .collect(),
        None => {
            let needle = query.to_lowercase();
            landmarks
                .iter()
                .filter(|landmark| {
                    landmark.name.to_lowercase().contains(&needle)
                        || landmark.description.to_lowercase().contains(&needle)
                })
                .collect()
        }
    }
}

/// Same as [`filter`], returning ids only.
pub fn filter_ids(landmarks: &[Landmark], query: &str) -> Vec<LandmarkId> {
    filter(landmarks, query)
        .into_iter()
        .map(|landmark| landmark.id)
        .collect()
}

fn build_matcher(query: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(matcher) => Some(matcher),
        Err(err) => {
            // Oversized input can exceed the compiled-size limit.
            warn!(
                "event=search_matcher module=search status=fallback query_chars={} error={}",
                query.chars().count(),
                err
            );
            None
        }
    }
}
