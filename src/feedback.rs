//! Feedback calculation for Wordle guesses.
//!
//! This module computes the per-letter feedback (wrong/misplaced/correct)
//! a guess receives against an answer.

use crate::word::Word;
use crate::WORD_LENGTH;
use std::fmt;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in the answer, or every occurrence already accounted for
    Wrong,
    /// Letter in the answer at another position
    Misplaced,
    /// Letter in the right position
    Correct,
}

impl Feedback {
    /// Convert to a character for display (B, Y or G)
    pub fn to_char(self) -> char {
        match self {
            Feedback::Wrong => 'B',
            Feedback::Misplaced => 'Y',
            Feedback::Correct => 'G',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Misplaced),
            'b' | 'x' | '0' => Some(Feedback::Wrong),
            _ => None,
        }
    }
}

/// The feedback for a whole guess, one entry per letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackCode(pub [Feedback; WORD_LENGTH]);

impl FeedbackCode {
    pub const ALL_CORRECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    /// Calculate the feedback for a guess against an answer.
    ///
    /// Works on a scratch copy of the answer. The first pass marks exact
    /// matches and consumes those answer letters; the second pass gives
    /// each remaining guess letter the first unconsumed occurrence, if any.
    /// Running the passes in this order keeps a repeated guess letter from
    /// earning more marks than the answer has copies of it.
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let mut remaining = (*answer.letters()).map(Some);
        let mut code = [Feedback::Wrong; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if remaining[i] == Some(guess[i]) {
                code[i] = Feedback::Correct;
                remaining[i] = None;
            }
        }

        for i in 0..WORD_LENGTH {
            if code[i] != Feedback::Wrong {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(guess[i])) {
                code[i] = Feedback::Misplaced;
                *slot = None;
            }
        }

        Self(code)
    }

    pub fn feedbacks(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this code represents a win (all correct)
    pub fn is_win(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    /// Parse a code from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        let feedbacks: Vec<Feedback> = s.chars().map(Feedback::from_char).collect::<Option<_>>()?;
        let arr: [Feedback; WORD_LENGTH] = feedbacks.try_into().ok()?;
        Some(Self(arr))
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|fb| write!(f, "{}", fb.to_char()))
    }
}

/// Calculate feedback straight from strings.
///
/// # Panics
///
/// Both arguments must be valid [`WORD_LENGTH`]-letter words. Everything that
/// reaches the engine has already been validated, so a bad input here is a
/// broken invariant and aborts.
pub fn compute_feedback(guess: &str, answer: &str) -> FeedbackCode {
    let guess = Word::new(guess).unwrap_or_else(|e| panic!("invalid guess: {e}"));
    let answer = Word::new(answer).unwrap_or_else(|e| panic!("invalid answer: {e}"));
    FeedbackCode::calculate(&guess, &answer)
}
