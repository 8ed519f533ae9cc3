pub mod card;
pub mod deck;
pub mod stats;
pub mod word_entry;

pub use card::{Card, OPTION_COUNT};
pub use deck::{DEFAULT_DECK_LIMIT, Deck, MIN_DECK_SIZE, draw_session_words};
pub use stats::Stats;
pub use word_entry::WordEntry;
