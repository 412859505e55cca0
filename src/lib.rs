//! # Wordle Opener
//!
//! Finds the Wordle opening that narrows the candidate list the most.
//!
//! An opening is scored by playing it against every dictionary word as the
//! hidden answer and counting how many words stay consistent with the
//! feedback. The search scores every word of the dictionary as a one-word
//! opening across a pool of worker threads.

pub mod dictionary;
pub mod error;
pub mod evaluate;
pub mod feedback;
pub mod filter;
pub mod pool;
pub mod search;
pub mod word;

pub use dictionary::{load_dictionary_from_file, load_dictionary_from_str, parse_word_list};
pub use error::{PoolError, SearchError, WordError};
pub use evaluate::{evaluate_opening, EvalResult, Evaluation, Histogram, HISTOGRAM_CAP};
pub use feedback::{compute_feedback, Feedback, FeedbackCode};
pub use filter::{count_viable, count_viable_for_answer, is_viable, Guess};
pub use pool::{PoolState, WorkerPool};
pub use search::{
    select_best, RankedOpening, SearchBackend, SearchConfig, SearchCoordinator, SearchReport,
};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;
