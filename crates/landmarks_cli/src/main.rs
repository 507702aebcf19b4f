//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `landmarks_core` linkage and seed catalog loading.
//! - Print search results for an optional query argument.
//!
//! Usage: `landmarks_cli [query]`

use landmarks_core::ModelData;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("landmarks_core ping={}", landmarks_core::ping());
    println!("landmarks_core version={}", landmarks_core::core_version());

    let mut model = match ModelData::with_seed() {
        Ok(model) => model,
        Err(err) => {
            eprintln!("failed to load seed catalog: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "catalog landmarks={} collections={}",
        model.catalog().len(),
        model.collections().len()
    );

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    model.set_search_text(query);
    for landmark in model.search_results() {
        let marker = if model.is_favorite(landmark.id) { "*" } else { " " };
        println!("{marker} {} {} ({})", landmark.id, landmark.name, landmark.continent);
    }
    ExitCode::SUCCESS
}
