//! Score summary for a quiz session.

/// Running score of a deck.
///
/// `incorrect` is `total - correct`: it counts every card that has not been answered
/// correctly, including cards not reached yet. It only means "answered wrongly" once
/// the whole deck has been traversed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
}

impl Stats {
    pub fn new(correct: usize, total: usize) -> Self {
        Self {
            correct,
            incorrect: total.saturating_sub(correct),
            total,
        }
    }

    /// Share of correct answers as a percentage of the deck size.
    pub fn correct_percent(&self) -> f64 {
        percent(self.correct, self.total)
    }

    /// Share of not-correct cards as a percentage of the deck size.
    pub fn incorrect_percent(&self) -> f64 {
        percent(self.incorrect, self.total)
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
