use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use quiz_deck::{
    handle_flashcards_input, handle_menu_input, handle_quit_confirm_input, handle_quiz_input,
    handle_summary_input, logger, Action, AppState, CollectionSource, Config, DataStore,
    FlashcardBrowser, HttpSource, QuizScreen,
};

const TICK: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "quiz-deck", version, about = "Page through a remote quiz deck in the terminal")]
struct Cli {
    /// URL of the JSON array of quiz items
    #[arg(long)]
    source_url: Option<String>,

    /// Path to a TOML config file (defaults to ./quiz-deck.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Give up on the fetch after this many seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Where to write the debug log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

struct App {
    state: AppState,
    store: DataStore,
    source: Arc<dyn CollectionSource>,
    menu_index: usize,
    quiz: Option<QuizScreen>,
    flashcards: FlashcardBrowser,
}

impl App {
    fn draw(&self, f: &mut Frame) {
        match self.state {
            AppState::Menu => quiz_deck::draw_menu(
                f,
                self.menu_index,
                self.store.status(),
                self.store.len(),
                &self.source.describe(),
            ),
            AppState::Quiz => {
                if let Some(quiz) = &self.quiz {
                    quiz_deck::draw_quiz(f, quiz, self.store.status());
                }
            }
            AppState::QuizQuitConfirm => quiz_deck::draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(quiz) = &self.quiz {
                    quiz_deck::draw_summary(f, quiz);
                }
            }
            AppState::Flashcards => {
                let items = self.store.collection();
                quiz_deck::draw_flashcards(f, &items, &self.flashcards, self.store.status());
            }
        }
    }

    /// Apply a finished fetch; a quiz waiting on an empty collection picks it up.
    fn tick(&mut self) {
        match &mut self.quiz {
            Some(quiz) => {
                quiz.refresh(&mut self.store);
            }
            None => {
                self.store.poll();
            }
        }
    }

    fn on_key(&mut self, key: event::KeyEvent) -> Action {
        match self.state {
            AppState::Menu => handle_menu_input(&mut self.menu_index, key),
            AppState::Quiz => match &mut self.quiz {
                Some(quiz) => handle_quiz_input(quiz, key, &mut self.state),
                None => Action::LeaveQuiz,
            },
            AppState::QuizQuitConfirm => handle_quit_confirm_input(key, &mut self.state),
            AppState::Summary => match &mut self.quiz {
                Some(quiz) => handle_summary_input(quiz, key, &mut self.state),
                None => Action::LeaveQuiz,
            },
            AppState::Flashcards => {
                let count = self.store.len();
                handle_flashcards_input(&mut self.flashcards, count, key, &mut self.state)
            }
        }
    }

    /// Returns true when the app should exit.
    fn perform(&mut self, action: Action) -> bool {
        match action {
            Action::None => {}
            Action::StartQuiz => {
                self.quiz = Some(QuizScreen::new(self.store.collection()));
                self.state = AppState::Quiz;
            }
            Action::OpenFlashcards => {
                self.flashcards = FlashcardBrowser::default();
                self.state = AppState::Flashcards;
            }
            Action::RetryFetch => {
                self.store.retry(Arc::clone(&self.source));
            }
            Action::LeaveQuiz => {
                self.quiz = None;
                self.state = AppState::Menu;
            }
            Action::Quit => return true,
        }
        false
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| app.draw(f))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
            let action = app.on_key(key);
            if app.perform(action) {
                return Ok(());
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.source_url {
        config.source_url = url;
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout_secs = Some(secs);
    }
    if let Some(path) = cli.log_file {
        config.log_file = path;
    }

    logger::init(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;
    tracing::info!(source = %config.source_url, timeout = ?config.request_timeout_secs, "starting");

    let source: Arc<dyn CollectionSource> = Arc::new(HttpSource::new(
        &config.source_url,
        config.request_timeout(),
    )?);

    let mut app = App {
        state: AppState::Menu,
        store: DataStore::new(),
        source,
        menu_index: 0,
        quiz: None,
        flashcards: FlashcardBrowser::default(),
    };
    app.store.initialize(Arc::clone(&app.source));

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
