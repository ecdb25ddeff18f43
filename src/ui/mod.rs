pub mod layout;
mod flashcards;
mod menu;
mod quiz;
mod summary;

pub use flashcards::draw_flashcards;
pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use quiz::{draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

use crate::models::LoadStatus;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

fn key_hint(key: &str) -> Span<'static> {
    Span::styled(
        key.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// Text and colour describing where the collection is in its load lifecycle.
fn status_message(status: &LoadStatus, count: usize) -> (String, Color) {
    match status {
        LoadStatus::NotStarted => ("Waiting to load items...".to_string(), Color::DarkGray),
        LoadStatus::Loading => ("Loading items...".to_string(), Color::Yellow),
        LoadStatus::Loaded if count == 0 => {
            ("The collection is empty".to_string(), Color::Yellow)
        }
        LoadStatus::Loaded => (format!("{} items loaded", count), Color::Green),
        LoadStatus::Failed(error) => (
            format!("Failed to load items: {} (press r to retry)", error),
            Color::Red,
        ),
    }
}
