use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use super::archetypes::{archetype_name, Archetype, UNKNOWN_ARCHETYPE};
use super::axes::{Axis, AXIS_ALIASES};
use crate::quiz::types::{AnswerMap, Direction, Question};

pub const POSITION_CENTERED: &str = "Centered";
pub const STRENGTH_WEAK: &str = "Weak";
pub const STRENGTH_MODERATE: &str = "Moderate";
pub const STRENGTH_STRONG: &str = "Strong";

/// Accumulated per-axis scores, keyed by the axis name as tagged on the
/// question records (canonical or alias). Aliased entries are folded into
/// their canonical key by `reconcile_alias_scores`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisScores {
    /// Weighted sum of answer contributions (A).
    pub raw_scores: BTreeMap<String, f64>,
    /// Sum of disagree weights over answered questions (B).
    pub disagree_weights: BTreeMap<String, f64>,
    /// Sum of agree weights over answered questions (C).
    pub agree_weights: BTreeMap<String, f64>,
    /// ((A - B) / (B + C)) * 100, clamped to [-100, 100].
    pub raw_normalized_scores: BTreeMap<String, f64>,
    /// 0-100 display scale, rounded.
    pub normalized_scores: BTreeMap<String, f64>,
}

/// One axis entry in the final result, in display-ready form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisResult {
    pub name: String,
    /// 0-100 display score (50 = centered).
    pub score: f64,
    /// Signed -100..100 score used for classification.
    pub raw_score: f64,
    pub user_position: String,
    pub position_strength: String,
    pub left_label: String,
    pub right_label: String,
    pub letter: char,
}

/// Complete engine output, handed verbatim to persistence and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub raw_scores: BTreeMap<String, f64>,
    pub disagree_weights: BTreeMap<String, f64>,
    pub agree_weights: BTreeMap<String, f64>,
    pub normalized_scores: BTreeMap<String, f64>,
    pub raw_normalized_scores: BTreeMap<String, f64>,
    pub axis_positions: BTreeMap<String, String>,
    pub position_strengths: BTreeMap<String, String>,
    pub archetype: Archetype,
    pub axis_results: Vec<AxisResult>,
}

/// Score a single answer.
///
/// The Likert value maps to a base of {-2: -1.0, -1: -0.5, 0: 0.0,
/// 1: 0.5, 2: 1.0}. Agreement selects `weight_agree`, disagreement
/// `weight_disagree`; a `Left` direction negates the product so those
/// questions push the axis negative. Values outside [-2, 2] contribute 0.
pub fn score_answer(
    answer: i64,
    weight_agree: f64,
    weight_disagree: f64,
    direction: Direction,
) -> f64 {
    let base = match answer {
        -2 => -1.0,
        -1 => -0.5,
        0 => 0.0,
        1 => 0.5,
        2 => 1.0,
        other => {
            warn!(answer = other, "answer value outside [-2, 2], treating as neutral");
            return 0.0;
        }
    };
    if base == 0.0 {
        return 0.0;
    }
    let weight = if base > 0.0 { weight_agree } else { weight_disagree };
    let contribution = base * weight;
    match direction {
        Direction::Left => -contribution,
        Direction::Right => contribution,
    }
}

/// Accumulate per-axis score sums and weight pools over all answered
/// questions, then derive both normalized scales.
///
/// Questions whose axis name does not resolve to a configured axis are
/// skipped with a warning; a single bad record never aborts the batch.
/// Note the weight pools grow for every answered question regardless of
/// the answer given, so neutral answers dilute the normalized score.
pub fn compute_axis_scores(questions: &[Question], answers: &AnswerMap) -> AxisScores {
    let mut scores = AxisScores::default();

    for question in questions {
        let Some(&answer) = answers.get(&question.id) else {
            continue;
        };
        if Axis::resolve(&question.axis).is_none() {
            warn!(
                question = %question.id,
                axis = %question.axis,
                "question axis does not resolve to a configured axis, skipping"
            );
            continue;
        }

        let contribution = score_answer(
            answer,
            question.weight_agree,
            question.weight_disagree,
            question.direction,
        );
        let key = question.axis.clone();
        *scores.raw_scores.entry(key.clone()).or_insert(0.0) += contribution;
        *scores.disagree_weights.entry(key.clone()).or_insert(0.0) += question.weight_disagree;
        *scores.agree_weights.entry(key).or_insert(0.0) += question.weight_agree;
    }

    for (name, &raw) in &scores.raw_scores {
        let Some(axis) = Axis::resolve(name) else {
            continue;
        };
        let disagree = scores.disagree_weights.get(name).copied().unwrap_or(0.0);
        let agree = scores.agree_weights.get(name).copied().unwrap_or(0.0);
        scores
            .raw_normalized_scores
            .insert(name.clone(), raw_normalized_score(raw, disagree, agree));
        scores
            .normalized_scores
            .insert(name.clone(), display_score(raw, axis.max_score()));
    }

    scores
}

/// Signed normalization: centers the raw sum against the weight mass that
/// was actually exercised. Defined as 0 for an empty pool; non-finite
/// results also collapse to 0 rather than surfacing.
fn raw_normalized_score(raw: f64, disagree: f64, agree: f64) -> f64 {
    let pool = disagree + agree;
    if pool == 0.0 {
        return 0.0;
    }
    let value = ((raw - disagree) / pool) * 100.0;
    if value.is_finite() {
        value.clamp(-100.0, 100.0)
    } else {
        0.0
    }
}

/// Display normalization: remaps the configured symmetric range
/// [-max_score, max_score] onto 0-100, rounded. Raw sums past the
/// configured bound pin to the ends of the scale.
fn display_score(raw: f64, max_score: f64) -> f64 {
    let value = ((raw + max_score) / (max_score * 2.0)) * 100.0;
    if !value.is_finite() {
        return 0.0;
    }
    let rounded = value.round();
    if rounded <= 0.0 {
        0.0
    } else if rounded >= 100.0 {
        100.0
    } else {
        rounded
    }
}

/// Fold scores accumulated under a deprecated axis name into the canonical
/// key, but only when the canonical key is entirely absent. A canonical
/// entry with a zero-but-valid score is left untouched, and alias entries
/// are never merged into an existing canonical one.
pub fn reconcile_alias_scores(scores: &mut AxisScores) {
    for &(alias, canonical) in AXIS_ALIASES {
        if !scores.raw_scores.contains_key(alias) || scores.raw_scores.contains_key(canonical) {
            continue;
        }
        copy_entry(&mut scores.raw_scores, alias, canonical);
        copy_entry(&mut scores.disagree_weights, alias, canonical);
        copy_entry(&mut scores.agree_weights, alias, canonical);
        copy_entry(&mut scores.raw_normalized_scores, alias, canonical);
        copy_entry(&mut scores.normalized_scores, alias, canonical);
    }
}

fn copy_entry(map: &mut BTreeMap<String, f64>, from: &str, to: &str) {
    if let Some(&value) = map.get(from) {
        map.insert(to.to_string(), value);
    }
}

/// Label each configured axis with the pole the respondent leans toward.
///
/// Sign convention: a negative raw normalized score maps to the axis's
/// right label and a positive one to the left label. This matches the
/// plotting convention the labels were designed against; do not swap it.
/// Axes with no raw entry fall back to the display score around 50.
pub fn determine_axis_positions(
    normalized: &BTreeMap<String, f64>,
    raw_normalized: &BTreeMap<String, f64>,
) -> BTreeMap<String, String> {
    let mut positions = BTreeMap::new();
    for axis in Axis::ALL {
        let name = axis.name();
        let label = match raw_normalized.get(name) {
            Some(&raw) if raw == 0.0 => POSITION_CENTERED,
            Some(&raw) if raw < 0.0 => axis.right_label(),
            Some(_) => axis.left_label(),
            None => {
                let display = normalized.get(name).copied().unwrap_or(50.0);
                if display < 50.0 {
                    axis.right_label()
                } else if display > 50.0 {
                    axis.left_label()
                } else {
                    POSITION_CENTERED
                }
            }
        };
        positions.insert(name.to_string(), label.to_string());
    }
    positions
}

/// Classify how far from center each axis sits: under 30 (absolute raw
/// normalized) is Weak, under 70 Moderate, Strong beyond that. Axes with
/// no raw entry use the display score's distance from 50 instead
/// (under 15 Weak, under 35 Moderate).
pub fn determine_position_strengths(
    normalized: &BTreeMap<String, f64>,
    raw_normalized: &BTreeMap<String, f64>,
) -> BTreeMap<String, String> {
    let mut strengths = BTreeMap::new();
    for axis in Axis::ALL {
        let name = axis.name();
        let label = match raw_normalized.get(name) {
            Some(&raw) => {
                let distance = raw.abs();
                if distance < 30.0 {
                    STRENGTH_WEAK
                } else if distance < 70.0 {
                    STRENGTH_MODERATE
                } else {
                    STRENGTH_STRONG
                }
            }
            None => {
                let distance = (normalized.get(name).copied().unwrap_or(50.0) - 50.0).abs();
                if distance < 15.0 {
                    STRENGTH_WEAK
                } else if distance < 35.0 {
                    STRENGTH_MODERATE
                } else {
                    STRENGTH_STRONG
                }
            }
        };
        strengths.insert(name.to_string(), label.to_string());
    }
    strengths
}

/// One-letter code for an axis, using the same sign convention as
/// positions: a negative raw score (or, lacking one, a display score
/// under 50) selects the second pole's letter.
pub fn axis_letter(axis: Axis, score: f64, raw_score: Option<f64>) -> char {
    let (first, second) = axis.letters();
    match raw_score {
        Some(raw) => {
            if raw < 0.0 {
                second
            } else {
                first
            }
        }
        None => {
            if score < 50.0 {
                second
            } else {
                first
            }
        }
    }
}

/// Concatenate the five axis letters (fixed order) and look the code up in
/// the archetype table.
pub fn determine_archetype(
    normalized: &BTreeMap<String, f64>,
    raw_normalized: &BTreeMap<String, f64>,
) -> Archetype {
    let mut code = String::with_capacity(Axis::ALL.len());
    for axis in Axis::ALL {
        let name = axis.name();
        let score = normalized.get(name).copied().unwrap_or(50.0);
        code.push(axis_letter(axis, score, raw_normalized.get(name).copied()));
    }
    let name = archetype_name(&code).unwrap_or(UNKNOWN_ARCHETYPE).to_string();
    Archetype { code, name }
}

/// Top-level orchestration: accumulate scores, fold legacy alias keys into
/// canonical ones, classify, and assemble one result entry per configured
/// axis in fixed order.
///
/// This function never fails: malformed questions and answers degrade to
/// warnings and zero contributions, so one bad record cannot take down the
/// rest of the quiz result.
pub fn calculate_results(questions: &[Question], answers: &AnswerMap) -> ResultRecord {
    let mut scores = compute_axis_scores(questions, answers);
    reconcile_alias_scores(&mut scores);

    let axis_positions =
        determine_axis_positions(&scores.normalized_scores, &scores.raw_normalized_scores);
    let position_strengths =
        determine_position_strengths(&scores.normalized_scores, &scores.raw_normalized_scores);
    let archetype = determine_archetype(&scores.normalized_scores, &scores.raw_normalized_scores);

    let axis_results = Axis::ALL
        .iter()
        .map(|&axis| {
            let name = axis.name();
            let score = scores.normalized_scores.get(name).copied().unwrap_or(50.0);
            let raw_score = scores.raw_normalized_scores.get(name).copied();
            AxisResult {
                name: name.to_string(),
                score,
                raw_score: raw_score.unwrap_or(0.0),
                user_position: axis_positions
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| POSITION_CENTERED.to_string()),
                position_strength: position_strengths
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| STRENGTH_WEAK.to_string()),
                left_label: axis.left_label().to_string(),
                right_label: axis.right_label().to_string(),
                letter: axis_letter(axis, score, raw_score),
            }
        })
        .collect();

    ResultRecord {
        raw_scores: scores.raw_scores,
        disagree_weights: scores.disagree_weights,
        agree_weights: scores.agree_weights,
        normalized_scores: scores.normalized_scores,
        raw_normalized_scores: scores.raw_normalized_scores,
        axis_positions,
        position_strengths,
        archetype,
        axis_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LIBERTARIAN: &str = "Libertarian vs. Authoritarian";
    const EQUITY: &str = "Equity vs. Free Market";
    const LEGACY_EQUITY: &str = "Equality vs. Markets";

    fn question(id: &str, axis: &str, direction: Direction, wa: f64, wd: f64) -> Question {
        Question {
            id: id.to_string(),
            axis: axis.to_string(),
            direction,
            weight_agree: wa,
            weight_disagree: wd,
        }
    }

    fn answers(entries: &[(&str, i64)]) -> AnswerMap {
        entries
            .iter()
            .map(|(id, value)| (id.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_score_answer_base_mapping() {
        assert_eq!(score_answer(-2, 1.0, 1.0, Direction::Right), -1.0);
        assert_eq!(score_answer(-1, 1.0, 1.0, Direction::Right), -0.5);
        assert_eq!(score_answer(0, 1.0, 1.0, Direction::Right), 0.0);
        assert_eq!(score_answer(1, 1.0, 1.0, Direction::Right), 0.5);
        assert_eq!(score_answer(2, 1.0, 1.0, Direction::Right), 1.0);
    }

    #[test]
    fn test_score_answer_selects_weight_by_sign() {
        // Agreement uses the agree weight, disagreement the disagree weight.
        assert_eq!(score_answer(2, 3.0, 7.0, Direction::Right), 3.0);
        assert_eq!(score_answer(-2, 3.0, 7.0, Direction::Right), -7.0);
        assert_eq!(score_answer(1, 4.0, 9.0, Direction::Right), 2.0);
        assert_eq!(score_answer(-1, 4.0, 9.0, Direction::Right), -4.5);
    }

    #[test]
    fn test_score_answer_left_direction_negates() {
        assert_eq!(score_answer(2, 1.0, 1.0, Direction::Left), -1.0);
        assert_eq!(score_answer(2, 1.0, 1.0, Direction::Right), 1.0);
        assert_eq!(score_answer(-2, 1.0, 1.0, Direction::Left), 1.0);
    }

    #[test]
    fn test_score_answer_neutral_ignores_weights() {
        assert_eq!(score_answer(0, 1000.0, 1000.0, Direction::Left), 0.0);
    }

    #[test]
    fn test_score_answer_invalid_value_contributes_zero() {
        assert_eq!(score_answer(7, 5.0, 5.0, Direction::Right), 0.0);
        assert_eq!(score_answer(-3, 5.0, 5.0, Direction::Left), 0.0);
    }

    #[test]
    fn test_balanced_weights_center_the_axis() {
        // One question, strongly agreed: A = 2, B = 2, C = 2, so the signed
        // scale lands exactly on zero.
        let questions = vec![question("q1", LIBERTARIAN, Direction::Right, 2.0, 2.0)];
        let record = calculate_results(&questions, &answers(&[("q1", 2)]));

        assert_eq!(record.raw_scores[LIBERTARIAN], 2.0);
        assert_eq!(record.disagree_weights[LIBERTARIAN], 2.0);
        assert_eq!(record.agree_weights[LIBERTARIAN], 2.0);
        assert_eq!(record.raw_normalized_scores[LIBERTARIAN], 0.0);
        assert_eq!(record.axis_positions[LIBERTARIAN], POSITION_CENTERED);
        assert_eq!(record.position_strengths[LIBERTARIAN], STRENGTH_WEAK);
    }

    #[test]
    fn test_strong_disagree_pins_the_axis() {
        // Same setup, strongly disagreed: contribution -2 against a pool of
        // 4 gives -100, which classifies as the right pole at full strength.
        let questions = vec![question("q1", LIBERTARIAN, Direction::Right, 2.0, 2.0)];
        let record = calculate_results(&questions, &answers(&[("q1", -2)]));

        assert_eq!(record.raw_scores[LIBERTARIAN], -2.0);
        assert_eq!(record.raw_normalized_scores[LIBERTARIAN], -100.0);
        assert_eq!(record.axis_positions[LIBERTARIAN], "Authoritarian");
        assert_eq!(record.position_strengths[LIBERTARIAN], STRENGTH_STRONG);

        let entry = record
            .axis_results
            .iter()
            .find(|r| r.name == LIBERTARIAN)
            .unwrap();
        assert_eq!(entry.letter, 'A');
        assert_eq!(entry.user_position, "Authoritarian");
    }

    #[test]
    fn test_neutral_answer_keeps_raw_score_but_feeds_pools() {
        let questions = vec![question("q1", EQUITY, Direction::Left, 5.0, 3.0)];
        let record = calculate_results(&questions, &answers(&[("q1", 0)]));

        assert_eq!(record.raw_scores[EQUITY], 0.0);
        assert_eq!(record.disagree_weights[EQUITY], 3.0);
        assert_eq!(record.agree_weights[EQUITY], 5.0);
        // (0 - 3) / 8 * 100
        assert_eq!(record.raw_normalized_scores[EQUITY], -37.5);
    }

    #[test]
    fn test_unanswered_question_contributes_nothing() {
        let questions = vec![
            question("q1", EQUITY, Direction::Right, 2.0, 2.0),
            question("q2", EQUITY, Direction::Right, 50.0, 50.0),
        ];
        let record = calculate_results(&questions, &answers(&[("q1", 2)]));

        // q2 is absent from the pools entirely, not counted as neutral.
        assert_eq!(record.raw_scores[EQUITY], 2.0);
        assert_eq!(record.disagree_weights[EQUITY], 2.0);
        assert_eq!(record.agree_weights[EQUITY], 2.0);
    }

    #[test]
    fn test_unresolvable_axis_is_skipped() {
        let questions = vec![
            question("q1", "Order vs. Chaos", Direction::Right, 2.0, 2.0),
            question("q2", EQUITY, Direction::Right, 1.0, 1.0),
        ];
        let record = calculate_results(&questions, &answers(&[("q1", 2), ("q2", 2)]));

        assert!(!record.raw_scores.contains_key("Order vs. Chaos"));
        assert_eq!(record.raw_scores[EQUITY], 1.0);
        // The record still carries one entry per configured axis.
        assert_eq!(record.axis_results.len(), 5);
    }

    #[test]
    fn test_zero_information_axis_defaults() {
        let record = calculate_results(&[], &AnswerMap::new());

        assert!(record.raw_scores.is_empty());
        for entry in &record.axis_results {
            assert_eq!(entry.score, 50.0);
            assert_eq!(entry.raw_score, 0.0);
            assert_eq!(entry.user_position, POSITION_CENTERED);
            assert_eq!(entry.position_strength, STRENGTH_WEAK);
        }
        assert_eq!(record.archetype.code, "ELPSG");
    }

    #[test]
    fn test_alias_scores_reconciled_into_canonical_axis() {
        let questions = vec![question("q1", LEGACY_EQUITY, Direction::Right, 3.0, 1.0)];
        let record = calculate_results(&questions, &answers(&[("q1", 2)]));

        // A = 3, B = 1, C = 3 -> (3 - 1) / 4 * 100 = 50 under both keys.
        assert_eq!(record.raw_scores[LEGACY_EQUITY], 3.0);
        assert_eq!(record.raw_scores[EQUITY], 3.0);
        assert_eq!(record.raw_normalized_scores[EQUITY], 50.0);

        let entry = record.axis_results.iter().find(|r| r.name == EQUITY).unwrap();
        assert_eq!(entry.raw_score, 50.0);
        assert_eq!(entry.user_position, "Equity");
        assert_eq!(entry.position_strength, STRENGTH_MODERATE);
    }

    #[test]
    fn test_alias_not_merged_when_canonical_present() {
        let questions = vec![
            question("q1", EQUITY, Direction::Right, 1.0, 1.0),
            question("q2", LEGACY_EQUITY, Direction::Right, 9.0, 9.0),
        ];
        let record = calculate_results(&questions, &answers(&[("q1", 2), ("q2", 2)]));

        // Canonical key keeps only its own contribution; the alias bucket is
        // retained in the maps but never folded in.
        assert_eq!(record.raw_scores[EQUITY], 1.0);
        assert_eq!(record.raw_scores[LEGACY_EQUITY], 9.0);
        assert_eq!(record.agree_weights[EQUITY], 1.0);
    }

    #[test]
    fn test_position_sign_convention_is_inverted() {
        let mut raw = BTreeMap::new();
        raw.insert(EQUITY.to_string(), -40.0);
        raw.insert(LIBERTARIAN.to_string(), 40.0);
        let positions = determine_axis_positions(&BTreeMap::new(), &raw);

        // Negative raw -> right label, positive raw -> left label.
        assert_eq!(positions[EQUITY], "Free Market");
        assert_eq!(positions[LIBERTARIAN], "Libertarian");
    }

    #[test]
    fn test_position_fallback_uses_display_score() {
        let mut normalized = BTreeMap::new();
        normalized.insert(EQUITY.to_string(), 30.0);
        normalized.insert(LIBERTARIAN.to_string(), 70.0);
        normalized.insert("Progressive vs. Conservative".to_string(), 50.0);
        let positions = determine_axis_positions(&normalized, &BTreeMap::new());

        assert_eq!(positions[EQUITY], "Free Market");
        assert_eq!(positions[LIBERTARIAN], "Libertarian");
        assert_eq!(positions["Progressive vs. Conservative"], POSITION_CENTERED);
        // Axes missing from both maps read as centered.
        assert_eq!(positions["Secular vs. Religious"], POSITION_CENTERED);
    }

    #[test]
    fn test_strength_thresholds_on_raw_scale() {
        let strengths_for = |value: f64| {
            let mut raw = BTreeMap::new();
            raw.insert(EQUITY.to_string(), value);
            determine_position_strengths(&BTreeMap::new(), &raw)[EQUITY].clone()
        };

        assert_eq!(strengths_for(0.0), STRENGTH_WEAK);
        assert_eq!(strengths_for(-29.9), STRENGTH_WEAK);
        assert_eq!(strengths_for(30.0), STRENGTH_MODERATE);
        assert_eq!(strengths_for(-69.9), STRENGTH_MODERATE);
        assert_eq!(strengths_for(70.0), STRENGTH_STRONG);
        assert_eq!(strengths_for(-100.0), STRENGTH_STRONG);
    }

    #[test]
    fn test_strength_fallback_on_display_scale() {
        let strengths_for = |value: f64| {
            let mut normalized = BTreeMap::new();
            normalized.insert(EQUITY.to_string(), value);
            determine_position_strengths(&normalized, &BTreeMap::new())[EQUITY].clone()
        };

        assert_eq!(strengths_for(50.0), STRENGTH_WEAK);
        assert_eq!(strengths_for(64.9), STRENGTH_WEAK);
        assert_eq!(strengths_for(65.0), STRENGTH_MODERATE);
        assert_eq!(strengths_for(15.1), STRENGTH_MODERATE);
        assert_eq!(strengths_for(15.0), STRENGTH_STRONG);
        assert_eq!(strengths_for(100.0), STRENGTH_STRONG);
    }

    #[test]
    fn test_axis_letter_sign_convention() {
        assert_eq!(axis_letter(Axis::Equity, 50.0, Some(-1.0)), 'F');
        assert_eq!(axis_letter(Axis::Equity, 50.0, Some(1.0)), 'E');
        assert_eq!(axis_letter(Axis::Equity, 50.0, Some(0.0)), 'E');
        // Fallback on the display scale.
        assert_eq!(axis_letter(Axis::Secular, 49.0, None), 'R');
        assert_eq!(axis_letter(Axis::Secular, 50.0, None), 'S');
    }

    #[test]
    fn test_archetype_from_all_left_poles() {
        let questions: Vec<Question> = Axis::ALL
            .iter()
            .enumerate()
            .map(|(i, axis)| question(&format!("q{}", i), axis.name(), Direction::Right, 3.0, 1.0))
            .collect();
        let answer_map: AnswerMap = questions.iter().map(|q| (q.id.clone(), 2)).collect();
        let record = calculate_results(&questions, &answer_map);

        assert_eq!(record.archetype.code, "ELPSG");
        assert_eq!(record.archetype.name, "The Utopian");
    }

    #[test]
    fn test_archetype_from_all_right_poles() {
        let questions: Vec<Question> = Axis::ALL
            .iter()
            .enumerate()
            .map(|(i, axis)| question(&format!("q{}", i), axis.name(), Direction::Left, 3.0, 1.0))
            .collect();
        let answer_map: AnswerMap = questions.iter().map(|q| (q.id.clone(), 2)).collect();
        let record = calculate_results(&questions, &answer_map);

        assert_eq!(record.archetype.code, "FACRN");
        assert_eq!(record.archetype.name, "The Crusader");
    }

    #[test]
    fn test_display_score_rounds_and_pins() {
        // Equity's configured bound is 61: A = 0 sits at 50, the bounds at
        // the ends, and anything past them pins rather than overflowing.
        assert_eq!(display_score(0.0, 61.0), 50.0);
        assert_eq!(display_score(61.0, 61.0), 100.0);
        assert_eq!(display_score(-61.0, 61.0), 0.0);
        assert_eq!(display_score(30.5, 61.0), 75.0);
        assert_eq!(display_score(200.0, 61.0), 100.0);
        assert_eq!(display_score(-200.0, 61.0), 0.0);
    }

    #[test]
    fn test_raw_normalized_empty_pool_is_zero() {
        assert_eq!(raw_normalized_score(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_raw_normalized_non_finite_collapses_to_zero() {
        assert_eq!(raw_normalized_score(f64::NAN, 1.0, 1.0), 0.0);
        assert_eq!(raw_normalized_score(f64::INFINITY, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_results_are_deterministic() {
        let questions = vec![
            question("q1", EQUITY, Direction::Left, 2.0, 1.5),
            question("q2", LIBERTARIAN, Direction::Right, 1.0, 3.0),
            question("q3", "Secular vs. Religious", Direction::Right, 2.5, 2.5),
        ];
        let answer_map = answers(&[("q1", -1), ("q2", 2), ("q3", 1)]);

        let first = calculate_results(&questions, &answer_map);
        let second = calculate_results(&questions, &answer_map);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = calculate_results(&[], &AnswerMap::new());
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("rawScores").is_some());
        assert!(json.get("rawNormalizedScores").is_some());
        assert!(json.get("axisPositions").is_some());
        assert!(json.get("positionStrengths").is_some());
        assert!(json.get("axisResults").is_some());
        let first = &json["axisResults"][0];
        assert!(first.get("userPosition").is_some());
        assert!(first.get("leftLabel").is_some());
    }

    proptest! {
        #[test]
        fn prop_scores_stay_bounded(
            entries in proptest::collection::vec(
                (-4i64..=4, 0.001f64..5000.0, 0.001f64..5000.0, proptest::bool::ANY),
                1..40,
            )
        ) {
            let mut questions = Vec::new();
            let mut answer_map = AnswerMap::new();
            for (i, (answer, wa, wd, left)) in entries.iter().enumerate() {
                let id = format!("q{}", i);
                let direction = if *left { Direction::Left } else { Direction::Right };
                questions.push(question(&id, EQUITY, direction, *wa, *wd));
                answer_map.insert(id, *answer);
            }

            let record = calculate_results(&questions, &answer_map);
            for raw in record.raw_normalized_scores.values() {
                prop_assert!((-100.0..=100.0).contains(raw));
            }
            for display in record.normalized_scores.values() {
                prop_assert!((0.0..=100.0).contains(display));
            }
            prop_assert_eq!(record.archetype.code.len(), 5);
        }

        #[test]
        fn prop_all_neutral_answers_leave_raw_score_at_zero(
            weights in proptest::collection::vec((0.001f64..5000.0, 0.001f64..5000.0), 1..20)
        ) {
            let mut questions = Vec::new();
            let mut answer_map = AnswerMap::new();
            for (i, (wa, wd)) in weights.iter().enumerate() {
                let id = format!("q{}", i);
                questions.push(question(&id, EQUITY, Direction::Left, *wa, *wd));
                answer_map.insert(id, 0);
            }

            let record = calculate_results(&questions, &answer_map);
            prop_assert_eq!(record.raw_scores[EQUITY], 0.0);
        }
    }
}
