//! Filtering the dictionary down to words consistent with observed feedback.

use crate::feedback::FeedbackCode;
use crate::word::Word;

/// A guess together with the feedback it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub feedback: FeedbackCode,
}

impl Guess {
    pub fn new(word: Word, feedback: FeedbackCode) -> Self {
        Self { word, feedback }
    }

    /// The guess as it would be resolved if `answer` were the solution.
    pub fn against(word: Word, answer: &Word) -> Self {
        Self::new(word, FeedbackCode::calculate(&word, answer))
    }
}

/// Whether `word` could still be the answer given every recorded guess.
pub fn is_viable(word: &Word, guesses: &[Guess]) -> bool {
    guesses
        .iter()
        .all(|guess| FeedbackCode::calculate(&guess.word, word) == guess.feedback)
}

/// Count the dictionary words consistent with `guesses`.
///
/// When `collect` is given, the viable words are appended to it in
/// dictionary order.
pub fn count_viable(
    guesses: &[Guess],
    dictionary: &[Word],
    mut collect: Option<&mut Vec<Word>>,
) -> usize {
    let mut count = 0;
    for word in dictionary.iter().filter(|w| is_viable(w, guesses)) {
        count += 1;
        if let Some(out) = collect.as_deref_mut() {
            out.push(*word);
        }
    }
    count
}

/// Count the dictionary words still viable after playing `guess_words`
/// against a hypothetical `answer`.
pub fn count_viable_for_answer(
    guess_words: &[Word],
    answer: &Word,
    dictionary: &[Word],
    collect: Option<&mut Vec<Word>>,
) -> usize {
    let guesses: Vec<Guess> = guess_words
        .iter()
        .map(|&word| Guess::against(word, answer))
        .collect();
    count_viable(&guesses, dictionary, collect)
}
