//! One multiple-choice question built from a word entry.

/// Number of answer options shown on every card.
pub const OPTION_COUNT: usize = 4;

/// A single quiz question: the prompt word, its hint, and four shuffled options.
///
/// Cards are immutable once built; the deck replaces its current card instead of
/// mutating it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    word: String,
    description: String,
    translation: String,
    options: [String; OPTION_COUNT],
}

impl Card {
    pub fn new(
        word: String,
        translation: String,
        options: [String; OPTION_COUNT],
        description: String,
    ) -> Self {
        Self {
            word,
            description,
            translation,
            options,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Hint shown once the card has been answered. May be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    /// Returns true if option `n` is the translation. Out-of-range indexes are never correct.
    pub fn is_correct(&self, n: usize) -> bool {
        self.options
            .get(n)
            .is_some_and(|option| *option == self.translation)
    }

    /// Index of the first option equal to the translation.
    ///
    /// Falls back to 0 when no option matches, so 0 is not a "not found" signal.
    /// A card built by [`Deck`](super::Deck) always contains its translation.
    pub fn get_correct(&self) -> usize {
        self.options
            .iter()
            .position(|option| *option == self.translation)
            .unwrap_or(0)
    }
}
