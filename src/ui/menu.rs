use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::{key_hint, status_message};
use crate::input::MENU_ENTRIES;
use crate::models::LoadStatus;

pub fn draw_menu(
    f: &mut Frame,
    selected_index: usize,
    status: &LoadStatus,
    item_count: usize,
    source: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Quiz Deck v{}", env!("CARGO_PKG_VERSION")))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = MENU_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if i == selected_index { "> " } else { "  " };
            ListItem::new(format!("{}{}", marker, entry.label())).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default().borders(Borders::ALL).title("Menu"));
    f.render_widget(menu, chunks[1]);

    let (message, color) = status_message(status, item_count);
    let status_content = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Source: {}", source),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let status_panel = Paragraph::new(status_content)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Collection"));
    f.render_widget(status_panel, chunks[2]);

    let mut help_spans = vec![
        key_hint("↑/↓"),
        Span::from(" Navigate  "),
        key_hint("Enter"),
        Span::from(" Select  "),
    ];
    if status.is_failed() {
        help_spans.extend([key_hint("r"), Span::from(" Retry  ")]);
    }
    help_spans.extend([key_hint("q/Ctrl+C"), Span::from(" Quit")]);

    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{screen_text, terminal};

    #[test]
    fn test_menu_shows_entries_and_status() {
        let mut terminal = terminal();
        terminal
            .draw(|f| draw_menu(f, 1, &LoadStatus::Loaded, 5, "http://example.test/q.json"))
            .unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("Take Quiz"));
        assert!(text.contains("> Browse Flashcards"));
        assert!(text.contains("5 items loaded"));
        assert!(text.contains("http://example.test/q.json"));
        assert!(!text.contains("Retry"));
    }

    #[test]
    fn test_menu_offers_retry_after_failure() {
        let mut terminal = terminal();
        let status = LoadStatus::Failed("HTTP 503".to_string());
        terminal
            .draw(|f| draw_menu(f, 0, &status, 0, "src"))
            .unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("Failed to load items: HTTP 503"));
        assert!(text.contains("Retry"));
    }
}
