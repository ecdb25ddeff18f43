//! Quiz session state machine.

use crate::error::QuizError;
use crate::models::{ItemResult, QuizCollection, QuizItem, Score, SessionStatus, Step};
use std::collections::HashMap;
use std::sync::Arc;

/// One traversal of the collection from the first item to completion.
///
/// The session holds its own snapshot of the collection, so the length it
/// navigates against never changes underneath it.
#[derive(Debug, Clone)]
pub struct QuizSession {
    items: QuizCollection,
    cursor: usize,
    answers: HashMap<usize, String>,
    completed: bool,
}

impl QuizSession {
    pub fn new(items: QuizCollection) -> Self {
        Self {
            items,
            cursor: 0,
            answers: HashMap::new(),
            completed: false,
        }
    }

    /// Adopt a freshly loaded collection. Only an empty session accepts one.
    pub fn attach(&mut self, items: QuizCollection) -> bool {
        if self.status() != SessionStatus::Empty || items.is_empty() {
            return false;
        }
        self.items = items;
        self.cursor = 0;
        self.answers.clear();
        self.completed = false;
        true
    }

    pub fn status(&self) -> SessionStatus {
        if self.items.is_empty() {
            SessionStatus::Empty
        } else if self.completed {
            SessionStatus::Completed
        } else {
            SessionStatus::InProgress
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status() == SessionStatus::Completed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.items.len()
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn current_item(&self) -> Option<&QuizItem> {
        match self.status() {
            SessionStatus::InProgress => self.items.get(self.cursor),
            _ => None,
        }
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn answers(&self) -> &HashMap<usize, String> {
        &self.answers
    }

    pub fn select_answer(&mut self, index: usize, choice: &str) -> Result<(), QuizError> {
        if self.status() == SessionStatus::Completed {
            return Err(QuizError::SessionCompleted);
        }

        let valid = self
            .items
            .get(index)
            .is_some_and(|item| item.has_choice(choice));
        if !valid {
            return Err(QuizError::InvalidSelection {
                index,
                choice: choice.to_string(),
            });
        }

        tracing::debug!(question = index + 1, %choice, "answer selected");
        self.answers.insert(index, choice.to_string());
        Ok(())
    }

    pub fn advance(&mut self) -> Step {
        if self.status() != SessionStatus::InProgress {
            return Step::Ignored;
        }

        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            Step::Moved(self.cursor)
        } else {
            self.completed = true;
            tracing::info!(
                answered = self.answers.len(),
                total = self.items.len(),
                score = %self.score(),
                "quiz completed"
            );
            Step::Completed
        }
    }

    pub fn retreat(&mut self) -> Step {
        if self.status() != SessionStatus::InProgress || self.cursor == 0 {
            return Step::Ignored;
        }
        self.cursor -= 1;
        Step::Moved(self.cursor)
    }

    pub fn restart(&mut self) {
        self.answers.clear();
        self.cursor = 0;
        self.completed = false;
    }

    pub fn score(&self) -> Score {
        let correct = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, item)| self.answer(*i) == Some(item.correct_answer.as_str()))
            .count();

        Score {
            correct,
            total: self.items.len(),
        }
    }

    pub fn results(&self) -> Vec<ItemResult> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = self.answer(i).map(str::to_string);
                ItemResult {
                    question: item.question.clone(),
                    is_correct: selected.as_deref() == Some(item.correct_answer.as_str()),
                    selected,
                    correct_answer: item.correct_answer.clone(),
                }
            })
            .collect()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(Arc::from(Vec::new()))
    }
}
