//! Formatting utilities for terminal output

use crate::core::{Evaluation, Mark, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One letter tile colored by its mark
#[must_use]
pub fn tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        Some(Mark::Correct) => text.black().on_green().bold(),
        Some(Mark::Present) => text.black().on_yellow().bold(),
        Some(Mark::Absent) => text.white().on_bright_black(),
        None => text.bright_white(),
    }
}

/// A guessed word as a row of colored tiles
#[must_use]
pub fn guess_row(word: &Word, evaluation: &Evaluation) -> String {
    word.as_str()
        .chars()
        .zip(evaluation.marks())
        .map(|(letter, &mark)| tile(letter, Some(mark)).to_string())
        .collect()
}

/// Three keyboard lines, each key colored by its best mark so far
#[must_use]
pub fn keyboard_lines(keys: &[Option<Mark>; 26]) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let tiles: String = row
                .chars()
                .map(|letter| tile(letter, key_mark(keys, letter)).to_string())
                .collect();
            format!("{}{tiles}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Mark recorded for `letter`, if any
#[must_use]
pub fn key_mark(keys: &[Option<Mark>; 26], letter: char) -> Option<Mark> {
    let index = (letter as usize).checked_sub('A' as usize)?;
    keys.get(index).copied().flatten()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural-aware "N guess(es)"
#[must_use]
pub fn guesses_label(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}
