pub mod config;
pub mod error;
pub mod fetch_worker;
pub mod input;
pub mod logger;
pub mod models;
pub mod session;
pub mod source;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use error::{FetchError, QuizError};
pub use input::{
    handle_flashcards_input, handle_menu_input, handle_quit_confirm_input, handle_quiz_input,
    handle_summary_input, Action, FlashcardBrowser, QuizScreen,
};
pub use models::{AppState, LoadStatus, QuizItem, Score, SessionStatus, Step};
pub use session::QuizSession;
pub use source::{CollectionSource, HttpSource, StaticSource};
pub use store::DataStore;
pub use ui::{draw_flashcards, draw_menu, draw_quit_confirmation, draw_quiz, draw_summary};
