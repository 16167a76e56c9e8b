use anyhow::{Context, Result};
use std::fs;

use crate::domain::Tournament;

/// Load the one-off tournaments document from disk.
///
/// Validation here is schema-level only: unknown fields are ignored and
/// provider IDs are not checked until registration.
pub fn load_tournaments(path: &str) -> Result<Vec<Tournament>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to load tournaments from {}", path))?;

    let tournaments: Vec<Tournament> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse tournaments JSON from {}", path))?;

    Ok(tournaments)
}
