use super::{key_hint, status_message};
use crate::input::FlashcardBrowser;
use crate::models::{LoadStatus, QuizItem};
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn draw_flashcards(
    f: &mut Frame,
    items: &[QuizItem],
    browser: &FlashcardBrowser,
    status: &LoadStatus,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Flashcards ({})", items.len()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    if items.is_empty() {
        let (message, color) = status_message(status, 0);
        let placeholder = Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(placeholder, chunks[1]);
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        let list_width = body[0].width.saturating_sub(4) as usize;
        let entries: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                ListItem::new(truncate_string(
                    &format!("{}. {}", i + 1, item.question),
                    list_width,
                ))
            })
            .collect();
        let list = List::new(entries)
            .block(Block::default().borders(Borders::ALL).title("Cards"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        let mut list_state = ListState::default().with_selected(Some(browser.selected));
        f.render_stateful_widget(list, body[0], &mut list_state);

        if let Some(item) = items.get(browser.selected) {
            f.render_widget(card(item, browser.revealed), body[1]);
        }
    }

    let mut help_spans = vec![
        key_hint("↑/↓"),
        Span::from(" Navigate  "),
        key_hint("Space"),
        Span::from(" Flip  "),
    ];
    if status.is_failed() {
        help_spans.extend([key_hint("r"), Span::from(" Retry  ")]);
    }
    help_spans.extend([key_hint("Esc"), Span::from(" Back to Menu")]);

    let help = Paragraph::new(Line::from(help_spans))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

fn card(item: &QuizItem, revealed: bool) -> Paragraph<'_> {
    let mut text = Text::default();
    if revealed {
        text.push_line(Line::from(Span::styled(
            "Answer to the question:",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(item.correct_answer.as_str()));
    } else {
        text.push_line(Line::from(Span::styled(
            item.question.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        for choice in &item.choices {
            text.push_line(Line::from(format!("• {}", choice)));
        }
    }

    let title = if revealed { "Back" } else { "Front" };
    Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title))
}
