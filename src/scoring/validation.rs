use std::collections::HashSet;

use super::axes::Axis;
use crate::config::schema::QuestionRecord;

/// Validate a question set before scoring.
/// Returns all validation errors at once (not just the first).
///
/// The engine itself tolerates bad records by skipping them; this lint
/// exists so content problems surface loudly at the CLI boundary instead
/// of silently shrinking the quiz.
pub fn validate_questions(records: &[QuestionRecord]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (i, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            errors.push(format!("questions[{}].id: must not be empty", i));
        } else if !seen_ids.insert(record.id.as_str()) {
            errors.push(format!("questions[{}].id: duplicate id '{}'", i, record.id));
        }

        if Axis::resolve(&record.axis).is_none() {
            errors.push(format!(
                "questions[{}].axis: '{}' does not resolve to a configured axis",
                i, record.axis
            ));
        }

        check_weight(&mut errors, i, "weight", record.weight);
        check_weight(&mut errors, i, "weight_agree", record.weight_agree);
        check_weight(&mut errors, i, "weight_disagree", record.weight_disagree);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_weight(errors: &mut Vec<String>, index: usize, field: &str, value: Option<f64>) {
    if let Some(weight) = value {
        if !weight.is_finite() || weight <= 0.0 {
            errors.push(format!(
                "questions[{}].{}: must be a positive number, got {}",
                index, field, weight
            ));
        }
    }
}
