pub mod config;
pub mod error;
pub mod models;
pub mod wordlist;

pub use config::QuizConfig;
pub use error::{ParseError, QuizError, Result};
pub use models::{Card, Deck, Stats, WordEntry};
