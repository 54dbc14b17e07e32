pub mod prompt;
pub mod types;

pub use prompt::collect_answers;
pub use types::{AnswerMap, Direction, Question};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load an answer map from a JSON file: an object keyed by question id
/// with integer values.
///
/// Values outside [-2, 2] are loaded as-is; the engine warns about them
/// and scores them as zero contributions.
pub fn load_answers(path: &Path) -> Result<AnswerMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answer file at {}", path.display()))?;
    let answers: AnswerMap = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse answers: invalid JSON in {}", path.display()))?;
    Ok(answers)
}

/// Save an answer map as pretty-printed JSON, for replay through `score`.
pub fn save_answers(path: &Path, answers: &AnswerMap) -> Result<()> {
    let json = serde_json::to_string_pretty(answers).context("Failed to serialize answers")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write answer file at {}", path.display()))?;
    Ok(())
}
