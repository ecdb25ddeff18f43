use super::{key_hint, status_message};
use crate::input::QuizScreen;
use crate::models::LoadStatus;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::choice_label;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, screen: &QuizScreen, status: &LoadStatus) {
    let layout = calculate_quiz_chunks(f.area());
    let session = &screen.session;

    let Some(item) = session.current_item() else {
        let (message, color) = status_message(status, session.len());
        let placeholder = Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Quiz"));
        f.render_widget(placeholder, layout.question_area);

        let mut help_spans = Vec::new();
        if status.is_failed() {
            help_spans.extend([key_hint("r"), Span::from(" Retry  ")]);
        }
        help_spans.extend([key_hint("Esc"), Span::from(" Back to Menu")]);

        let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, layout.help_area);
        return;
    };

    let mut progress = format!("Question {} / {}", session.cursor() + 1, session.len());
    if let Some(topic) = &item.topic {
        progress.push_str(&format!(" - {}", topic));
    }
    if let Some(difficulty) = &item.difficulty {
        progress.push_str(&format!(" ({})", difficulty));
    }

    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut question_text = Text::from(format!("{}. {}", session.cursor() + 1, item.question));
    if let Some(objective) = &item.learning_objective {
        question_text.push_line(Line::from(""));
        question_text.push_line(Line::from(Span::styled(
            format!("Objective: {}", objective),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let question = Paragraph::new(question_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let selected = session.answer(session.cursor());
    let choices: Vec<ListItem> = item
        .choices
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            let mark = if selected == Some(choice.as_str()) {
                "(•)"
            } else {
                "( )"
            };
            let style = if i == screen.highlighted {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}. {}", mark, choice_label(i), choice)).style(style)
        })
        .collect();

    let mut block = Block::default().borders(Borders::ALL).title("Choices");
    if let Some(error) = &screen.last_error {
        block = block.title_bottom(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(List::new(choices).block(block), layout.choices_area);

    let next_label = if session.is_last() { " End  " } else { " Next  " };
    let help_text = vec![
        Line::from(vec![
            key_hint("↑/↓"),
            Span::from(" Choose  "),
            key_hint("Enter"),
            Span::from(" Select  "),
            key_hint("→/n"),
            Span::from(next_label),
            key_hint("←/p"),
            Span::from(" Previous"),
        ]),
        Line::from(vec![
            key_hint("Esc"),
            Span::from(" Quit to Menu  "),
            key_hint("Ctrl+C"),
            Span::from(" Exit App"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the quiz? Your answers will be discarded.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        key_hint("Ctrl+C"),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
