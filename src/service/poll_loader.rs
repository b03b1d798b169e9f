use crate::error::PollsError;
use crate::types::PollInput;
use std::{fs, path::Path};
use tracing::info;

/// Load seed polls from a JSON file holding an array of `{title, description}` objects.
/// A missing file yields an empty list.
pub fn load_from_file(path: &Path) -> Result<Vec<PollInput>, PollsError> {
    if !path.exists() {
        info!(path = %path.display(), "seed file not found; skipping load");
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    let polls: Vec<PollInput> = serde_json::from_str(&contents)?;
    Ok(polls)
}
