pub mod archetypes;
pub mod axes;
pub mod engine;
pub mod validation;

pub use archetypes::{archetype_name, Archetype, ARCHETYPES};
pub use axes::{canonical_axis_name, Axis, AXIS_ALIASES};
pub use engine::{
    axis_letter, calculate_results, compute_axis_scores, determine_archetype,
    determine_axis_positions, determine_position_strengths, reconcile_alias_scores, score_answer,
    AxisResult, AxisScores, ResultRecord,
};
pub use validation::validate_questions;
