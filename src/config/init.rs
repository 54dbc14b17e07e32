use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::{ensure_config_dir, get_questions_path};

/// Starter question set written by `quiz-compass init`: two questions per
/// axis, one phrased toward each pole, with a mix of shared and split
/// weights to show every field in use.
pub const STARTER_QUESTIONS: &str = r#"# quiz-compass question file
#
# Each question belongs to one of the five axes:
#   Equity vs. Free Market
#   Libertarian vs. Authoritarian
#   Progressive vs. Conservative
#   Secular vs. Religious
#   Globalism vs. Nationalism
#
# direction: which pole the statement supports when the respondent agrees.
# weight / weight_agree / weight_disagree: multipliers, all default to 1.
questions:
  - id: econ-01
    axis: "Equity vs. Free Market"
    direction: Left
    text: "A society should guarantee everyone a basic standard of living."
    weight: 2
  - id: econ-02
    axis: "Equity vs. Free Market"
    direction: Right
    text: "Markets allocate resources better than governments do."
    weight_agree: 1.5
    weight_disagree: 1
  - id: lib-01
    axis: "Libertarian vs. Authoritarian"
    direction: Left
    text: "People should be free to make bad choices about their own lives."
  - id: lib-02
    axis: "Libertarian vs. Authoritarian"
    direction: Right
    text: "Public order is worth some restrictions on personal freedom."
    weight: 1.5
  - id: prog-01
    axis: "Progressive vs. Conservative"
    direction: Left
    text: "Social change, even when disruptive, usually leaves us better off."
  - id: prog-02
    axis: "Progressive vs. Conservative"
    direction: Right
    text: "Traditions carry wisdom that reformers underestimate."
  - id: sec-01
    axis: "Secular vs. Religious"
    direction: Left
    text: "Public policy should be justified without appeal to religion."
  - id: sec-02
    axis: "Secular vs. Religious"
    direction: Right
    text: "Communities are healthier when faith plays a central role."
  - id: glob-01
    axis: "Globalism vs. Nationalism"
    direction: Left
    text: "International cooperation should take precedence over national interest."
  - id: glob-02
    axis: "Globalism vs. Nationalism"
    direction: Right
    text: "A country's first duty is to its own citizens."
    weight: 2
"#;

/// Write the starter question file.
///
/// Uses the default config path when `path` is None (creating the config
/// directory if needed). Refuses to overwrite an existing file unless
/// `force` is set.
pub fn write_starter_questions(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let target = match path {
        Some(p) => p,
        None => {
            ensure_config_dir()?;
            get_questions_path()
        }
    };

    if target.exists() && !force {
        anyhow::bail!(
            "Question file already exists at {}. Pass --force to overwrite it.",
            target.display()
        );
    }

    write_file(&target)?;
    Ok(target)
}

fn write_file(target: &Path) -> Result<()> {
    fs::write(target, STARTER_QUESTIONS)
        .with_context(|| format!("Failed to write question file at {}", target.display()))
}
