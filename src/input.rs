use crate::models::{AppState, QuizCollection, SessionStatus, Step};
use crate::session::QuizSession;
use crate::store::DataStore;
use crossterm::event::{KeyCode, KeyEvent};

/// What the event loop has to do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    StartQuiz,
    OpenFlashcards,
    RetryFetch,
    LeaveQuiz,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Quiz,
    Flashcards,
    Quit,
}

pub const MENU_ENTRIES: [MenuEntry; 3] = [MenuEntry::Quiz, MenuEntry::Flashcards, MenuEntry::Quit];

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Quiz => "Take Quiz",
            MenuEntry::Flashcards => "Browse Flashcards",
            MenuEntry::Quit => "Quit",
        }
    }
}

/// A quiz session plus the choice the user is hovering over.
#[derive(Debug, Clone, Default)]
pub struct QuizScreen {
    pub session: QuizSession,
    pub highlighted: usize,
    pub last_error: Option<String>,
}

impl QuizScreen {
    pub fn new(items: QuizCollection) -> Self {
        Self {
            session: QuizSession::new(items),
            highlighted: 0,
            last_error: None,
        }
    }

    /// Point the highlight at the recorded answer for the current item, or the first choice.
    pub fn sync_highlight(&mut self) {
        let cursor = self.session.cursor();
        self.highlighted = self
            .session
            .current_item()
            .and_then(|item| {
                let answer = self.session.answer(cursor)?;
                item.choices.iter().position(|c| c == answer)
            })
            .unwrap_or(0);
        self.last_error = None;
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.sync_highlight();
    }

    /// Apply any finished fetch, then adopt the store's items if this screen is still empty.
    ///
    /// Returns true when the session picked up a collection and jumped to the first item.
    pub fn refresh(&mut self, store: &mut DataStore) -> bool {
        store.poll();
        if !self.session.attach(store.collection()) {
            return false;
        }
        tracing::debug!(count = self.session.len(), "quiz attached late collection");
        self.sync_highlight();
        true
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlashcardBrowser {
    pub selected: usize,
    pub revealed: bool,
}

pub fn handle_menu_input(selected: &mut usize, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up => {
            if *selected > 0 {
                *selected -= 1;
            }
            Action::None
        }
        KeyCode::Down => {
            if *selected < MENU_ENTRIES.len() - 1 {
                *selected += 1;
            }
            Action::None
        }
        KeyCode::Enter => match MENU_ENTRIES.get(*selected) {
            Some(MenuEntry::Quiz) => Action::StartQuiz,
            Some(MenuEntry::Flashcards) => Action::OpenFlashcards,
            Some(MenuEntry::Quit) => Action::Quit,
            None => Action::None,
        },
        KeyCode::Char('r') => Action::RetryFetch,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

pub fn handle_quiz_input(
    screen: &mut QuizScreen,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Action {
    if screen.session.status() == SessionStatus::Empty {
        return match key.code {
            KeyCode::Esc => Action::LeaveQuiz,
            KeyCode::Char('r') => Action::RetryFetch,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuizQuitConfirm;
        }
        KeyCode::Up => {
            if screen.highlighted > 0 {
                screen.highlighted -= 1;
            }
        }
        KeyCode::Down => {
            let choices = screen
                .session
                .current_item()
                .map(|item| item.choices.len())
                .unwrap_or(0);
            if screen.highlighted < choices.saturating_sub(1) {
                screen.highlighted += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cursor = screen.session.cursor();
            let choice = screen
                .session
                .current_item()
                .and_then(|item| item.choices.get(screen.highlighted))
                .cloned();
            if let Some(choice) = choice {
                match screen.session.select_answer(cursor, &choice) {
                    Ok(()) => screen.last_error = None,
                    Err(e) => screen.last_error = Some(e.to_string()),
                }
            }
        }
        KeyCode::Right | KeyCode::Char('n') => match screen.session.advance() {
            Step::Moved(_) => screen.sync_highlight(),
            Step::Completed => *app_state = AppState::Summary,
            Step::Ignored => {}
        },
        KeyCode::Left | KeyCode::Char('p') => {
            if let Step::Moved(_) = screen.session.retreat() {
                screen.sync_highlight();
            }
        }
        _ => {}
    }
    Action::None
}

pub fn handle_quit_confirm_input(key: KeyEvent, app_state: &mut AppState) -> Action {
    match key.code {
        KeyCode::Char('y') => Action::LeaveQuiz,
        KeyCode::Char('n') | KeyCode::Esc => {
            *app_state = AppState::Quiz;
            Action::None
        }
        _ => Action::None,
    }
}

pub fn handle_summary_input(
    screen: &mut QuizScreen,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Action {
    match key.code {
        KeyCode::Char('r') => {
            screen.restart();
            if screen.session.status() == SessionStatus::InProgress {
                *app_state = AppState::Quiz;
            }
            Action::None
        }
        KeyCode::Char('m') => Action::LeaveQuiz,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

pub fn handle_flashcards_input(
    browser: &mut FlashcardBrowser,
    card_count: usize,
    key: KeyEvent,
    app_state: &mut AppState,
) -> Action {
    match key.code {
        KeyCode::Up => {
            if browser.selected > 0 {
                browser.selected -= 1;
                browser.revealed = false;
            }
        }
        KeyCode::Down => {
            if browser.selected < card_count.saturating_sub(1) {
                browser.selected += 1;
                browser.revealed = false;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if card_count > 0 {
                browser.revealed = !browser.revealed;
            }
        }
        KeyCode::Char('r') => return Action::RetryFetch,
        KeyCode::Esc => *app_state = AppState::Menu,
        _ => {}
    }
    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoadStatus, QuizItem};
    use crate::source::StaticSource;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

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

    fn create_test_screen() -> QuizScreen {
        QuizScreen::new(Arc::from(vec![
            item("Q1", &["A", "B"], "A"),
            item("Q2", &["C", "D"], "D"),
            item("Q3", &["E", "F"], "E"),
        ]))
    }

    #[test]
    fn test_menu_navigation_bounds() {
        let mut selected = 0;
        handle_menu_input(&mut selected, key(KeyCode::Up));
        assert_eq!(selected, 0);

        for _ in 0..10 {
            handle_menu_input(&mut selected, key(KeyCode::Down));
        }
        assert_eq!(selected, MENU_ENTRIES.len() - 1);
        assert_eq!(
            handle_menu_input(&mut selected, key(KeyCode::Enter)),
            Action::Quit
        );
    }

    #[test]
    fn test_menu_enter_starts_quiz() {
        let mut selected = 0;
        assert_eq!(
            handle_menu_input(&mut selected, key(KeyCode::Enter)),
            Action::StartQuiz
        );
        selected = 1;
        assert_eq!(
            handle_menu_input(&mut selected, key(KeyCode::Enter)),
            Action::OpenFlashcards
        );
        assert_eq!(
            handle_menu_input(&mut selected, key(KeyCode::Char('r'))),
            Action::RetryFetch
        );
    }

    #[test]
    fn test_select_highlighted_choice() {
        let mut screen = create_test_screen();
        let app_state = &mut AppState::Quiz;

        handle_quiz_input(&mut screen, key(KeyCode::Down), app_state);
        assert_eq!(screen.highlighted, 1);
        handle_quiz_input(&mut screen, key(KeyCode::Down), app_state);
        assert_eq!(screen.highlighted, 1);

        handle_quiz_input(&mut screen, key(KeyCode::Enter), app_state);
        assert_eq!(screen.session.answer(0), Some("B"));

        handle_quiz_input(&mut screen, key(KeyCode::Up), app_state);
        handle_quiz_input(&mut screen, key(KeyCode::Char(' ')), app_state);
        assert_eq!(screen.session.answer(0), Some("A"));
        assert_eq!(screen.session.cursor(), 0);
    }

    #[test]
    fn test_highlight_restored_on_navigation() {
        let mut screen = create_test_screen();
        let app_state = &mut AppState::Quiz;

        handle_quiz_input(&mut screen, key(KeyCode::Down), app_state);
        handle_quiz_input(&mut screen, key(KeyCode::Enter), app_state);

        handle_quiz_input(&mut screen, key(KeyCode::Right), app_state);
        assert_eq!(screen.session.cursor(), 1);
        assert_eq!(screen.highlighted, 0);

        handle_quiz_input(&mut screen, key(KeyCode::Left), app_state);
        assert_eq!(screen.session.cursor(), 0);
        assert_eq!(screen.highlighted, 1);
    }

    #[test]
    fn test_advancing_past_last_item_opens_summary() {
        let mut screen = create_test_screen();
        let app_state = &mut AppState::Quiz;

        for _ in 0..2 {
            handle_quiz_input(&mut screen, key(KeyCode::Char('n')), app_state);
        }
        assert_eq!(*app_state, AppState::Quiz);

        handle_quiz_input(&mut screen, key(KeyCode::Char('n')), app_state);
        assert_eq!(*app_state, AppState::Summary);
        assert!(screen.session.is_completed());
    }

    #[test]
    fn test_escape_asks_for_confirmation() {
        let mut screen = create_test_screen();
        let app_state = &mut AppState::Quiz;

        handle_quiz_input(&mut screen, key(KeyCode::Esc), app_state);
        assert_eq!(*app_state, AppState::QuizQuitConfirm);

        assert_eq!(
            handle_quit_confirm_input(key(KeyCode::Char('n')), app_state),
            Action::None
        );
        assert_eq!(*app_state, AppState::Quiz);

        assert_eq!(
            handle_quit_confirm_input(key(KeyCode::Char('y')), app_state),
            Action::LeaveQuiz
        );
    }

    #[test]
    fn test_empty_session_only_leaves_or_retries() {
        let mut screen = QuizScreen::default();
        let app_state = &mut AppState::Quiz;

        assert_eq!(
            handle_quiz_input(&mut screen, key(KeyCode::Right), app_state),
            Action::None
        );
        assert_eq!(
            handle_quiz_input(&mut screen, key(KeyCode::Enter), app_state),
            Action::None
        );
        assert_eq!(
            handle_quiz_input(&mut screen, key(KeyCode::Char('r')), app_state),
            Action::RetryFetch
        );
        assert_eq!(
            handle_quiz_input(&mut screen, key(KeyCode::Esc), app_state),
            Action::LeaveQuiz
        );
        assert_eq!(*app_state, AppState::Quiz);
    }

    #[test]
    fn test_summary_restart_returns_to_quiz() {
        let mut screen = create_test_screen();
        let app_state = &mut AppState::Quiz;
        handle_quiz_input(&mut screen, key(KeyCode::Enter), app_state);
        for _ in 0..3 {
            handle_quiz_input(&mut screen, key(KeyCode::Right), app_state);
        }
        assert_eq!(*app_state, AppState::Summary);

        handle_summary_input(&mut screen, key(KeyCode::Char('r')), app_state);
        assert_eq!(*app_state, AppState::Quiz);
        assert_eq!(screen.session.cursor(), 0);
        assert!(screen.session.answers().is_empty());

        assert_eq!(
            handle_summary_input(&mut screen, key(KeyCode::Char('m')), app_state),
            Action::LeaveQuiz
        );
    }

    #[test]
    fn test_flashcard_flip_and_navigation() {
        let mut browser = FlashcardBrowser::default();
        let app_state = &mut AppState::Flashcards;

        handle_flashcards_input(&mut browser, 2, key(KeyCode::Enter), app_state);
        assert!(browser.revealed);

        handle_flashcards_input(&mut browser, 2, key(KeyCode::Down), app_state);
        assert_eq!(browser.selected, 1);
        assert!(!browser.revealed);

        handle_flashcards_input(&mut browser, 2, key(KeyCode::Down), app_state);
        assert_eq!(browser.selected, 1);

        handle_flashcards_input(&mut browser, 2, key(KeyCode::Esc), app_state);
        assert_eq!(*app_state, AppState::Menu);
    }

    #[test]
    fn test_flashcards_with_no_cards() {
        let mut browser = FlashcardBrowser::default();
        let app_state = &mut AppState::Flashcards;

        handle_flashcards_input(&mut browser, 0, key(KeyCode::Enter), app_state);
        handle_flashcards_input(&mut browser, 0, key(KeyCode::Down), app_state);
        assert!(!browser.revealed);
        assert_eq!(browser.selected, 0);
    }

    #[test]
    fn test_quiz_opened_while_loading_attaches_late_collection() {
        let mut store = DataStore::new();
        let mut screen = QuizScreen::new(store.collection());
        screen.highlighted = 3;
        screen.last_error = Some("stale".to_string());
        assert!(!screen.refresh(&mut store));

        store.initialize(Arc::new(StaticSource::new(vec![
            item("Q1", &["A", "B"], "A"),
            item("Q2", &["C", "D"], "D"),
        ])));
        assert!(store.wait(Duration::from_secs(5)));
        assert_eq!(store.status(), &LoadStatus::Loaded);

        assert!(screen.refresh(&mut store));
        assert_eq!(screen.session.status(), SessionStatus::InProgress);
        assert_eq!(screen.session.cursor(), 0);
        assert_eq!(screen.session.len(), 2);
        assert_eq!(screen.highlighted, 0);
        assert!(screen.last_error.is_none());

        // A running session keeps its place.
        screen.session.advance();
        assert!(!screen.refresh(&mut store));
        assert_eq!(screen.session.cursor(), 1);
    }
}
