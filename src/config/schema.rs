use serde::{Deserialize, Serialize};

use crate::quiz::types::{Direction, Question};

/// Top-level question file.
///
/// Example YAML:
/// ```yaml
/// questions:
///   - id: econ-01
///     axis: "Equity vs. Free Market"
///     direction: Left
///     text: "A society should guarantee everyone a basic standard of living."
///     weight: 2
///   - id: lib-01
///     axis: "Libertarian vs. Authoritarian"
///     direction: Right
///     weight_agree: 1.5
///     weight_disagree: 1
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionFile {
    pub questions: Vec<QuestionRecord>,
}

/// One question as authored. Weights cascade: `weight_agree` and
/// `weight_disagree` fall back to `weight`, which falls back to 1.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    /// Unique question identifier; `_id` is accepted for records exported
    /// from the legacy document store.
    #[serde(alias = "_id")]
    pub id: String,

    /// Axis name: one of the five canonical names or a known alias.
    pub axis: String,

    pub direction: Direction,

    /// Statement shown to the respondent. Optional; only the interactive
    /// runner needs it.
    #[serde(default)]
    pub text: Option<String>,

    /// Shared default for both weights (default: 1)
    #[serde(default)]
    pub weight: Option<f64>,

    /// Multiplier when the respondent agrees
    #[serde(default)]
    pub weight_agree: Option<f64>,

    /// Multiplier when the respondent disagrees
    #[serde(default)]
    pub weight_disagree: Option<f64>,

    /// Inactive questions are kept in the file but never scored
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl QuestionRecord {
    /// Apply the weight cascade and produce the engine-facing question.
    pub fn resolve(&self) -> Question {
        let base = self.weight.unwrap_or(1.0);
        Question {
            id: self.id.clone(),
            axis: self.axis.clone(),
            direction: self.direction,
            weight_agree: self.weight_agree.unwrap_or(base),
            weight_disagree: self.weight_disagree.unwrap_or(base),
        }
    }
}
