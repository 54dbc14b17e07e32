use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which pole of an axis a question is phrased to support when answered
/// affirmatively. `Left` questions push the axis negative, `Right` positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(alias = "left")]
    Left,
    #[serde(alias = "right")]
    Right,
}

/// A quiz item as the scoring engine sees it: weights already defaulted,
/// inactive questions already filtered out.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    /// Axis name as tagged on the record; may be canonical or a known alias.
    pub axis: String,
    pub direction: Direction,
    pub weight_agree: f64,
    pub weight_disagree: f64,
}

/// Responses keyed by question id. Values are Likert integers in [-2, 2]
/// (Strongly Disagree .. Strongly Agree); missing ids mean "not answered".
pub type AnswerMap = BTreeMap<String, i64>;
