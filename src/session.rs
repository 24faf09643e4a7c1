//! Quiz session state machine.
//!
//! Consumes the finished list of [`QuizItem`]s and tracks progression:
//! which item is current, what the user selected, the running score, and
//! whether the quiz is over. All transitions are pure state updates; once
//! the session is finished, everything but [`QuizSession::restart`] is a
//! no-op.

use crate::quiz::QuizItem;
use serde::{Deserialize, Serialize};

/// Progression state over a fixed list of quiz items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    items: Vec<QuizItem>,
    current_index: usize,
    selected_answer: Option<usize>,
    score: usize,
    finished: bool,
    last_answer_correct: Option<bool>,
}

impl QuizSession {
    /// Start a session over the given items. An empty list is allowed; such
    /// a session has no current item and nothing to answer.
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self {
            items,
            current_index: 0,
            selected_answer: None,
            score: 0,
            finished: false,
            last_answer_correct: None,
        }
    }

    /// The item currently presented, if any.
    pub fn current_item(&self) -> Option<&QuizItem> {
        if self.finished {
            return None;
        }
        self.items.get(self.current_index)
    }

    /// Total number of items in the session.
    pub fn total_questions(&self) -> usize {
        self.items.len()
    }

    /// Number of correctly answered items so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Whether every item has been answered.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The currently selected answer index, if any.
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected_answer
    }

    /// Whether the most recently submitted answer was correct.
    pub fn last_answer_correct(&self) -> Option<bool> {
        self.last_answer_correct
    }

    /// Select an answer for the current item. No-op when the session is
    /// finished, has no current item, or the index is out of range.
    pub fn select_answer(&mut self, index: usize) {
        let Some(item) = self.current_item() else {
            return;
        };
        if index >= item.answers.len() {
            return;
        }
        self.selected_answer = Some(index);
        self.last_answer_correct = None;
    }

    /// Grade the current selection and advance to the next item.
    ///
    /// Returns whether the selection was correct, or `None` when there is
    /// nothing to submit (finished, no current item, or no selection).
    pub fn submit_answer(&mut self) -> Option<bool> {
        let item = self.current_item()?;
        let selected = self.selected_answer?;
        let correct = selected == item.correct_answer_index;

        if correct {
            self.score += 1;
        }
        self.selected_answer = None;
        self.last_answer_correct = Some(correct);
        self.current_index += 1;
        if self.current_index >= self.items.len() {
            self.finished = true;
        }
        Some(correct)
    }

    /// Start over with the same items. No-op when the session holds none.
    pub fn restart(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.items);
        *self = Self::new(items);
    }
}
