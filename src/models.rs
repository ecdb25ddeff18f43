use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Identifier of a quiz item as it appears in the remote document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(rename = "Question", alias = "question")]
    pub question: String,
    #[serde(rename = "Choices", alias = "choices")]
    pub choices: Vec<String>,
    #[serde(
        rename = "CorrectAnswer",
        alias = "correctAnswer",
        alias = "correct_answer"
    )]
    pub correct_answer: String,
    #[serde(rename = "Difficulty", alias = "difficulty", default)]
    pub difficulty: Option<String>,
    #[serde(rename = "Topic", alias = "topic", default)]
    pub topic: Option<String>,
    #[serde(
        rename = "LearningObjective",
        alias = "learningObjective",
        alias = "learning_objective",
        default
    )]
    pub learning_objective: Option<String>,
}

impl QuizItem {
    pub fn has_choice(&self, choice: &str) -> bool {
        self.choices.iter().any(|c| c == choice)
    }
}

/// Immutable snapshot of the fetched items, shared between the store and sessions.
pub type QuizCollection = Arc<[QuizItem]>;

/// Where the collection is in its fetch lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadStatus::Failed(_))
    }
}

#[derive(Debug)]
pub enum FetchResponse {
    Loaded(Vec<QuizItem>),
    Failed(crate::error::FetchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Empty,
    InProgress,
    Completed,
}

/// Outcome of a navigation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(usize),
    Completed,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 * 100.0 / self.total as f64
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pct = format!("{:.1}", self.percentage());
        // Only a perfect run reads as 100%.
        if self.correct < self.total && pct == "100.0" {
            pct = "99.9".to_string();
        }
        let pct = pct.strip_suffix(".0").unwrap_or(&pct);
        write!(f, "{}/{} ({}%)", self.correct, self.total, pct)
    }
}

/// One row of the completion review.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemResult {
    pub question: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Summary,
    Flashcards,
}
