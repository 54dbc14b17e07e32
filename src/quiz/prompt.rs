use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::types::AnswerMap;
use crate::config::QuestionRecord;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Parse one prompt line. Empty input skips the question.
fn parse_answer(input: &str) -> Result<Option<i64>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<i64>() {
        Ok(value) if (-2..=2).contains(&value) => Ok(Some(value)),
        _ => Err(format!(
            "invalid answer '{}', expected an integer from -2 to 2",
            input
        )),
    }
}

/// Run through the active questions on the terminal and collect an answer
/// map. Skipped questions are simply absent from the map, matching how
/// unanswered questions arrive from other frontends.
pub fn collect_answers(records: &[QuestionRecord]) -> Result<AnswerMap> {
    let active: Vec<&QuestionRecord> = records.iter().filter(|record| record.active).collect();

    println!("Answer each statement on a -2..2 scale:");
    println!("  -2 strongly disagree, -1 disagree, 0 neutral, 1 agree, 2 strongly agree");
    println!("  Leave blank to skip a question.");

    let mut answers = AnswerMap::new();
    for (i, record) in active.iter().enumerate() {
        println!();
        let statement = record.text.as_deref().unwrap_or(record.id.as_str());
        println!("{}/{}: {}", i + 1, active.len(), statement);
        loop {
            let input = prompt("  Answer [-2..2]: ")?;
            match parse_answer(&input) {
                Ok(Some(value)) => {
                    answers.insert(record.id.clone(), value);
                    break;
                }
                Ok(None) => break,
                Err(message) => println!("  {}. Try again.", message),
            }
        }
    }

    Ok(answers)
}
