//! Quiz data model, reading order and assembly.
//!
//! The collector produces positioned [`HighlightEntry`] values; this module
//! imposes the deterministic reading order (page, then vertical offset) and
//! folds the ordered sequence into [`QuizItem`] records with a two-state
//! accumulator: no pending question, or a pending question with the answers
//! collected so far.

use crate::color::Role;
use serde::{Deserialize, Serialize};

/// One classified highlight, positioned for reading order.
///
/// Exists only transiently inside a single parse call.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightEntry {
    /// Semantic role derived from the highlight color
    pub role: Role,
    /// Cleaned, whitespace-normalized text (non-empty)
    pub text: String,
    /// Zero-based page index
    pub page_index: usize,
    /// Distance from the top of the page (smaller = higher)
    pub top: f32,
}

/// One quiz question with its ordered answer set.
///
/// `correct_answer_index` is always 0: by the authoring convention of the
/// source material, the first answer highlighted after a question is the
/// correct one. This is a contract of the input format: both answer kinds
/// share the same highlight color, so correctness cannot be inferred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    /// The question text
    pub question: String,
    /// Answer texts in highlight order (never empty)
    pub answers: Vec<String>,
    /// Index of the correct answer within `answers` (always 0)
    pub correct_answer_index: usize,
}

/// Sort entries into reading order: page index ascending, then vertical
/// offset ascending.
///
/// The sort is stable, so entries sharing an exact position keep their
/// encounter order and the output stays deterministic.
pub fn sort_entries(entries: &mut [HighlightEntry]) {
    entries.sort_by(|a, b| {
        a.page_index
            .cmp(&b.page_index)
            .then(crate::utils::safe_float_cmp(a.top, b.top))
    });
}

/// Fold ordered entries into quiz items.
///
/// A question opens a block; answers append to it; the block is emitted when
/// the next question begins (or at the end), but only if it collected at
/// least one answer. A question with no answers before the next question is
/// silently discarded, as are answers seen before any question.
pub fn assemble(mut entries: Vec<HighlightEntry>) -> Vec<QuizItem> {
    sort_entries(&mut entries);

    let mut items = Vec::new();
    let mut current_question: Option<String> = None;
    let mut pending_answers: Vec<String> = Vec::new();

    for entry in entries {
        match entry.role {
            Role::Question => {
                flush(&mut items, &mut current_question, &mut pending_answers);
                current_question = Some(entry.text);
            },
            Role::Answer => pending_answers.push(entry.text),
        }
    }
    flush(&mut items, &mut current_question, &mut pending_answers);

    items
}

fn flush(items: &mut Vec<QuizItem>, question: &mut Option<String>, answers: &mut Vec<String>) {
    if let Some(question) = question.take() {
        if !answers.is_empty() {
            items.push(QuizItem {
                question,
                answers: std::mem::take(answers),
                correct_answer_index: 0,
            });
        }
    }
    answers.clear();
}
