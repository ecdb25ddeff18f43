use super::key_hint;
use crate::input::QuizScreen;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::truncate_string;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, screen: &QuizScreen) {
    let layout = calculate_summary_chunks(f.area());
    let session = &screen.session;

    let title = Paragraph::new("Quiz Completed!")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score = session.score();
    let answered = session.answers().len();
    let score_text = vec![
        Line::from(Span::styled(
            format!("Your final score is {}", score),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Answered {} of {} questions", answered, score.total)),
    ];
    let score_panel = Paragraph::new(score_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score_panel, layout.score_area);

    let mut review = Text::default();
    for (i, result) in session.results().iter().enumerate() {
        let (mark, color) = if result.is_correct {
            ("[✓]", Color::Green)
        } else {
            ("[✗]", Color::Red)
        };
        review.push_line(Line::from(vec![
            Span::styled(mark, Style::default().fg(color)),
            Span::from(format!(" {}. {}", i + 1, truncate_string(&result.question, 70))),
        ]));
        let selected = result.selected.as_deref().unwrap_or("(no answer)");
        review.push_line(Line::from(format!(
            "   Your Answer: {}",
            truncate_string(selected, 60)
        )));
        if !result.is_correct {
            review.push_line(Line::from(Span::styled(
                format!("   Correct Answer: {}", truncate_string(&result.correct_answer, 57)),
                Style::default().fg(Color::Green),
            )));
        }
        review.push_line(Line::from(""));
    }

    let review_panel = Paragraph::new(review)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Answers"));
    f.render_widget(review_panel, layout.review_area);

    let help_text = vec![Line::from(vec![
        key_hint("r"),
        Span::from(" Restart  "),
        key_hint("m"),
        Span::from(" Main Menu  "),
        key_hint("q/Esc"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizItem;
    use crate::ui::test_support::{screen_text, terminal};
    use std::sync::Arc;

    fn item(question: &str, choices: &[&str], correct: &str) -> QuizItem {
        QuizItem {
            id: None,
            question: question.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_answer: correct.to_string(),
            difficulty: None,
            topic: None,
            learning_objective: None,
        }
    }

    #[test]
    fn test_summary_reports_computed_score() {
        let mut screen = QuizScreen::new(Arc::from(vec![
            item("Q1", &["A", "B"], "A"),
            item("Q2", &["C", "D"], "D"),
            item("Q3", &["E", "F"], "E"),
        ]));
        for (i, choice) in ["A", "D", "F"].iter().enumerate() {
            screen.session.select_answer(i, choice).unwrap();
            screen.session.advance();
        }

        let mut terminal = terminal();
        terminal.draw(|f| draw_summary(f, &screen)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("Quiz Completed!"));
        assert!(text.contains("Your final score is 2/3 (66.7%)"));
        assert!(text.contains("Answered 3 of 3 questions"));
        assert!(text.contains("Your Answer: F"));
        assert!(text.contains("Correct Answer: E"));
    }

    #[test]
    fn test_summary_marks_unanswered() {
        let mut screen = QuizScreen::new(Arc::from(vec![item("Q1", &["A", "B"], "A")]));
        screen.session.advance();

        let mut terminal = terminal();
        terminal.draw(|f| draw_summary(f, &screen)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("0/1 (0%)"));
        assert!(text.contains("(no answer)"));
    }
}
