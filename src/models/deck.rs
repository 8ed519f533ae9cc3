//! Deck drives one quiz session over a fixed list of word entries.
//! It hands out one card at a time and keeps the running score.

use super::card::{Card, OPTION_COUNT};
use super::{Stats, WordEntry};
use crate::error::{QuizError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Smallest deck that can produce four distinct options per card.
pub const MIN_DECK_SIZE: usize = OPTION_COUNT;

/// Number of words kept for a session when no limit is configured.
pub const DEFAULT_DECK_LIMIT: usize = 30;

/// Quiz session state: the word sequence, the cursor into it, the active card and the score.
///
/// The deck never reorders or truncates its words; use [`draw_session_words`] to pick
/// the session subset first. Randomness for option sampling comes from `R`.
pub struct Deck<R = StdRng> {
    words: Vec<WordEntry>,
    cursor: usize,
    current: Option<Card>,
    answered: bool,
    correct: usize,
    rng: R,
}

impl Deck<StdRng> {
    /// Creates a deck seeded from the operating system.
    pub fn new(words: Vec<WordEntry>) -> Result<Self> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Creates a deck whose option sampling is reproducible for a given seed.
    pub fn seeded(words: Vec<WordEntry>, seed: u64) -> Result<Self> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    pub fn with_rng(words: Vec<WordEntry>, rng: R) -> Result<Self> {
        if words.len() < MIN_DECK_SIZE {
            return Err(QuizError::NotEnoughWords {
                found: words.len(),
                required: MIN_DECK_SIZE,
            });
        }

        info!(size = words.len(), "deck created");

        Ok(Self {
            words,
            cursor: 0,
            current: None,
            answered: false,
            correct: 0,
            rng,
        })
    }

    /// Builds the card for the next word, or returns None once every word has been shown.
    ///
    /// The cursor does not move past the end, so every call after exhaustion returns None.
    pub fn get_next(&mut self) -> Option<&Card> {
        if self.cursor >= self.size() {
            if self.current.take().is_some() {
                info!(correct = self.correct, size = self.size(), "deck exhausted");
            }
            return None;
        }

        let options = self.random_options(self.cursor);
        let entry = &self.words[self.cursor];
        let card = Card::new(
            entry.word.clone(),
            entry.translation.clone(),
            options,
            entry.description.clone(),
        );
        debug!(position = self.cursor, word = %entry.word, "next card");

        self.cursor += 1;
        self.answered = false;
        self.current = Some(card);
        self.current.as_ref()
    }

    /// Checks option `n` of the current card and counts it when correct.
    ///
    /// Each card can be answered once. Validating without an active card (before the
    /// first `get_next` or after exhaustion) or answering twice is an error and leaves
    /// the score untouched.
    pub fn validate_option(&mut self, n: usize) -> Result<bool> {
        let card = self.current.as_ref().ok_or(QuizError::NoActiveCard)?;
        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }

        let result = card.is_correct(n);
        self.answered = true;
        if result {
            self.correct += 1;
        }
        debug!(option = n, correct = result, "option validated");

        Ok(result)
    }

    pub fn get_stats(&self) -> Stats {
        Stats::new(self.correct, self.size())
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// Number of cards handed out so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.size() - self.cursor
    }

    /// Picks the entry at `index` plus three other distinct entries and returns their
    /// translations in random order.
    fn random_options(&mut self, index: usize) -> [String; OPTION_COUNT] {
        let size = self.size();
        let mut indexes = Vec::with_capacity(OPTION_COUNT);
        indexes.push(index);

        while indexes.len() < OPTION_COUNT {
            let candidate = self.rng.random_range(0..size);
            if !indexes.contains(&candidate) {
                indexes.push(candidate);
            }
        }

        indexes.shuffle(&mut self.rng);
        std::array::from_fn(|i| self.words[indexes[i]].translation.clone())
    }
}

/// Shuffles the full word list and keeps at most `limit` entries for one session.
pub fn draw_session_words<R: Rng + ?Sized>(
    mut words: Vec<WordEntry>,
    limit: usize,
    rng: &mut R,
) -> Vec<WordEntry> {
    words.shuffle(rng);
    words.truncate(limit);
    words
}
