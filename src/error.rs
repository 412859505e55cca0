//! Error types shared across the crate.

use thiserror::Error;

/// A string could not be turned into a [`Word`](crate::Word).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("'{word}' has {len} letters, expected {expected}", expected = crate::WORD_LENGTH)]
    WrongLength { word: String, len: usize },
    #[error("'{word}' contains characters other than ASCII letters")]
    NotAlphabetic { word: String },
    #[error("the word list is empty")]
    EmptyList,
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("a worker pool needs at least one thread")]
    NoWorkers,
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("the worker pool has been shut down")]
    ShutDown,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("the dictionary is empty")]
    EmptyDictionary,
    #[error("no opening could be selected from an empty result set")]
    NoCandidates,
    #[error("no result was recorded for dictionary entry {index}")]
    MissingResult { index: usize },
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("failed to build the rayon thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
