use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::engine::{AxisResult, ResultRecord};
use crate::scoring::Archetype;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width left over after the labels and annotations on an axis line.
/// Falls back to a fixed width when stdout is a pipe.
fn bar_width() -> usize {
    const FIXED: usize = LEFT_WIDTH + RIGHT_WIDTH + 30;
    const DEFAULT: usize = 21;
    match get_terminal_width() {
        Some(width) if width > FIXED + 11 => (width - FIXED).min(41),
        Some(_) => 11,
        None => DEFAULT,
    }
}

const LEFT_WIDTH: usize = 11;
const RIGHT_WIDTH: usize = 13;

/// Render a 0-100 display score as a marker on a horizontal track:
/// 0 is the left end, 100 the right, with a tick at the midpoint.
fn axis_bar(score: f64, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let clamped = score.clamp(0.0, 100.0);
    let marker = ((clamped / 100.0) * (width - 1) as f64).round() as usize;
    let center = (width - 1) / 2;
    (0..width)
        .map(|i| {
            if i == marker {
                'o'
            } else if i == center {
                '|'
            } else {
                '-'
            }
        })
        .collect()
}

/// Format the per-axis table: one line per axis with both pole labels, the
/// score bar, and the position/strength classification.
pub fn format_axis_table(record: &ResultRecord, use_colors: bool) -> String {
    let width = bar_width();
    record
        .axis_results
        .iter()
        .map(|entry| format_axis_line(entry, width, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_axis_line(entry: &AxisResult, width: usize, use_colors: bool) -> String {
    let bar = axis_bar(entry.score, width);
    let annotation = format!("{} ({})", entry.user_position, entry.position_strength);

    if use_colors {
        format!(
            "{:>left$} [{}] {:<right$}  {}",
            entry.left_label.cyan(),
            bar,
            entry.right_label.yellow(),
            annotation.bold(),
            left = LEFT_WIDTH,
            right = RIGHT_WIDTH,
        )
    } else {
        format!(
            "{:>left$} [{}] {:<right$}  {}",
            entry.left_label,
            bar,
            entry.right_label,
            annotation,
            left = LEFT_WIDTH,
            right = RIGHT_WIDTH,
        )
    }
}

/// Format a single axis with detailed multi-line output (for verbose mode)
pub fn format_axis_detail(record: &ResultRecord, entry: &AxisResult, use_colors: bool) -> String {
    let raw_sum = record.raw_scores.get(&entry.name).copied().unwrap_or(0.0);
    let agree_pool = record.agree_weights.get(&entry.name).copied().unwrap_or(0.0);
    let disagree_pool = record
        .disagree_weights
        .get(&entry.name)
        .copied()
        .unwrap_or(0.0);

    let body = format!(
        "  Position: {} ({})\n  Display score: {}/100\n  Signed score: {}\n  Raw sum: {} (agree pool {}, disagree pool {})\n  Letter: {}",
        entry.user_position,
        entry.position_strength,
        entry.score,
        entry.raw_score,
        raw_sum,
        agree_pool,
        disagree_pool,
        entry.letter,
    );

    if use_colors {
        format!("{}\n{}", entry.name.bold(), body)
    } else {
        format!("{}\n{}", entry.name, body)
    }
}

/// Format the archetype reveal line
pub fn format_archetype(archetype: &Archetype, use_colors: bool) -> String {
    if use_colors {
        format!(
            "Archetype: {} - {}",
            archetype.code.bold(),
            archetype.name.bold()
        )
    } else {
        format!("Archetype: {} - {}", archetype.code, archetype.name)
    }
}

/// Format results as tab-separated values for scripting
/// Columns: axis, score, rawScore, position, strength, letter
/// (no headers, no colors); a final row carries the archetype.
pub fn format_tsv(record: &ResultRecord) -> String {
    let mut lines: Vec<String> = record
        .axis_results
        .iter()
        .map(|entry| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                entry.name,
                entry.score,
                entry.raw_score,
                entry.user_position,
                entry.position_strength,
                entry.letter
            )
        })
        .collect();
    lines.push(format!(
        "archetype\t{}\t{}",
        record.archetype.code, record.archetype.name
    ));
    lines.join("\n")
}
