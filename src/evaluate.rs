//! Scoring an opening by how far it narrows the candidate list.
//!
//! Every dictionary word is treated in turn as the hidden answer. The
//! opening is played against it, and the number of words still viable
//! afterwards is recorded. Lower is better.

use crate::error::SearchError;
use crate::filter::count_viable_for_answer;
use crate::word::Word;
use log::debug;

/// Remaining-candidate counts at or above this share the last bucket.
pub const HISTOGRAM_CAP: usize = 50;

/// Distribution of remaining-candidate counts, capped at [`HISTOGRAM_CAP`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram([usize; HISTOGRAM_CAP + 1]);

impl Default for Histogram {
    fn default() -> Self {
        Self([0; HISTOGRAM_CAP + 1])
    }
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, remaining: usize) {
        self.0[remaining.min(HISTOGRAM_CAP)] += 1;
    }

    pub fn buckets(&self) -> &[usize; HISTOGRAM_CAP + 1] {
        &self.0
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Bucket index holding the middle sample of the capped distribution.
    ///
    /// Starting from `total / 2`, non-empty bucket counts are subtracted in
    /// order while they are smaller than what is left; the first bucket that
    /// would take it to zero or below is the median. Values past the cap are
    /// indistinguishable here, so this is a median of the capped data, not of
    /// the exact counts.
    pub fn median(&self) -> Option<usize> {
        let mut center = self.total() / 2;
        for (index, &count) in self.0.iter().enumerate() {
            if count == 0 {
                continue;
            }
            if center > count {
                center -= count;
            } else {
                return Some(index);
            }
        }
        None
    }
}

/// Summary score of one opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalResult {
    /// Average number of viable words left, uncapped
    pub mean: f64,
    /// Median bucket of the capped histogram
    pub median: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub histogram: Histogram,
    pub result: EvalResult,
}

/// Evaluate an opening against every word of the dictionary.
pub fn evaluate_opening(opening: &[Word], dictionary: &[Word]) -> Result<Evaluation, SearchError> {
    if dictionary.is_empty() {
        return Err(SearchError::EmptyDictionary);
    }

    let mut histogram = Histogram::new();
    let mut sum = 0usize;
    for answer in dictionary {
        let remaining = count_viable_for_answer(opening, answer, dictionary, None);
        sum += remaining;
        histogram.record(remaining);
    }

    let mean = sum as f64 / dictionary.len() as f64;
    let median = histogram.median().ok_or(SearchError::EmptyDictionary)?;
    debug!(
        "evaluated opening {:?}: mean {:.3}, median {}",
        opening.iter().map(Word::as_str).collect::<Vec<_>>(),
        mean,
        median
    );

    Ok(Evaluation {
        histogram,
        result: EvalResult { mean, median },
    })
}
