use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::scoring::ResultRecord;

pub const RESULTS_VERSION: u32 = 1;

/// On-disk wrapper around a result record: the record itself is stored
/// verbatim, with a format version and scoring timestamp alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsDocument {
    pub version: u32,
    pub scored_at: DateTime<Utc>,
    pub result: ResultRecord,
}

impl ResultsDocument {
    pub fn new(result: ResultRecord) -> Self {
        Self {
            version: RESULTS_VERSION,
            scored_at: Utc::now(),
            result,
        }
    }
}

/// Load a results document from a JSON file
///
/// Returns an error for a missing file or an unsupported version.
pub fn load_results(path: &Path) -> Result<ResultsDocument> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open results file at {}", path.display()))?;

    let document: ResultsDocument =
        serde_json::from_reader(file).context("Failed to load results document")?;

    if document.version != RESULTS_VERSION {
        anyhow::bail!("Unsupported results version: {}", document.version);
    }

    Ok(document)
}

/// Save a results document to a JSON file atomically
///
/// Uses atomic-write-file to ensure the file is never left in a corrupted state.
pub fn save_results(path: &Path, document: &ResultsDocument) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, document)
        .context("Failed to serialize results document")?;

    file.commit().context("Failed to save results document")?;

    Ok(())
}
