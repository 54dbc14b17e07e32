mod init;
pub mod schema;

pub use init::{write_starter_questions, STARTER_QUESTIONS};
pub use schema::{QuestionFile, QuestionRecord};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::quiz::types::Question;

/// Get the config directory path (~/.config/quiz-compass/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("quiz-compass")
}

/// Get the default question file path (~/.config/quiz-compass/questions.yaml)
pub fn get_questions_path() -> PathBuf {
    get_config_dir().join("questions.yaml")
}

/// Ensure the config directory exists
pub fn ensure_config_dir() -> Result<()> {
    let config_dir = get_config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).with_context(|| {
            format!(
                "Failed to create config directory at {}",
                config_dir.display()
            )
        })?;
    }
    Ok(())
}

/// Load a question file from YAML
///
/// # Arguments
///
/// * `path` - Optional path to the question file. If None, uses the default
///   path (~/.config/quiz-compass/questions.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The question file does not exist
/// - The question file cannot be read
/// - The YAML cannot be parsed
pub fn load_question_file(path: Option<PathBuf>) -> Result<QuestionFile> {
    let questions_path = path.unwrap_or_else(get_questions_path);

    if !questions_path.exists() {
        anyhow::bail!(
            "Question file not found at {}. Run `quiz-compass init` to create a starter file.",
            questions_path.display()
        );
    }

    let content = fs::read_to_string(&questions_path)
        .with_context(|| format!("Failed to read question file at {}", questions_path.display()))?;

    let file: QuestionFile = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse questions: invalid YAML in {}",
            questions_path.display()
        )
    })?;

    Ok(file)
}

/// Load the engine-facing question list: inactive records are dropped and
/// the weight cascade is applied.
pub fn load_questions(path: Option<PathBuf>) -> Result<Vec<Question>> {
    let file = load_question_file(path)?;
    Ok(file
        .questions
        .iter()
        .filter(|record| record.active)
        .map(QuestionRecord::resolve)
        .collect())
}
