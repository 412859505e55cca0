//! Searching the dictionary for the best single-word opening.
//!
//! One evaluation job is built per dictionary word. Each job owns exactly one
//! slot of a pre-sized result array, so no two jobs ever write the same
//! entry. Writes still go through a single lock so a reader never observes a
//! half-written [`EvalResult`].

use crate::error::{PoolError, SearchError};
use crate::evaluate::{evaluate_opening, EvalResult};
use crate::pool::WorkerPool;
use crate::word::Word;
use log::{error, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_THREADS: usize = 7;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// How the per-word evaluations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBackend {
    /// Jobs dispatched onto a [`WorkerPool`]
    #[default]
    Pool,
    /// A rayon parallel iterator over the dictionary
    Rayon,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub threads: usize,
    pub poll_interval: Duration,
    pub backend: SearchBackend,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            poll_interval: DEFAULT_POLL_INTERVAL,
            backend: SearchBackend::default(),
        }
    }
}

/// An opening word together with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedOpening {
    pub index: usize,
    pub word: Word,
    pub result: EvalResult,
}

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub best: RankedOpening,
    /// One result per dictionary word, in dictionary order
    pub results: Vec<EvalResult>,
    pub words: Arc<[Word]>,
    pub elapsed: Duration,
}

impl SearchReport {
    /// The `n` openings with the lowest mean, ties kept in dictionary order.
    pub fn top(&self, n: usize) -> Vec<RankedOpening> {
        let mut ranked: Vec<RankedOpening> = self
            .results
            .iter()
            .zip(self.words.iter())
            .enumerate()
            .map(|(index, (&result, &word))| RankedOpening { index, word, result })
            .collect();
        ranked.sort_by(|a, b| a.result.mean.total_cmp(&b.result.mean));
        ranked.truncate(n);
        ranked
    }
}

/// Pick the result with the strictly lowest mean; the earliest one wins ties.
pub fn select_best(results: &[EvalResult]) -> Result<(usize, EvalResult), SearchError> {
    let (first, rest) = results.split_first().ok_or(SearchError::NoCandidates)?;
    let mut best = (0, *first);
    for (offset, result) in rest.iter().enumerate() {
        if result.mean < best.1.mean {
            best = (offset + 1, *result);
        }
    }
    Ok(best)
}

pub struct SearchCoordinator {
    config: SearchConfig,
}

impl SearchCoordinator {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score every dictionary word as a one-word opening and return the best.
    pub fn find_best_opening(&self, dictionary: Arc<[Word]>) -> Result<SearchReport, SearchError> {
        if dictionary.is_empty() {
            return Err(SearchError::EmptyDictionary);
        }

        let start = Instant::now();
        let results = match self.config.backend {
            SearchBackend::Pool => self.evaluate_with_pool(&dictionary)?,
            SearchBackend::Rayon => evaluate_with_rayon(&dictionary, self.config.threads)?,
        };

        let (index, result) = select_best(&results)?;
        let elapsed = start.elapsed();
        info!(
            "best opening '{}' (mean {:.3}, median {}) found in {:.2?}",
            dictionary[index], result.mean, result.median, elapsed
        );

        Ok(SearchReport {
            best: RankedOpening {
                index,
                word: dictionary[index],
                result,
            },
            results,
            words: dictionary,
            elapsed,
        })
    }

    fn evaluate_with_pool(&self, dictionary: &Arc<[Word]>) -> Result<Vec<EvalResult>, SearchError> {
        let slots: Arc<Mutex<Vec<Option<EvalResult>>>> =
            Arc::new(Mutex::new(vec![None; dictionary.len()]));

        let mut pool = WorkerPool::new(self.config.threads)?;
        for index in 0..dictionary.len() {
            let dictionary = Arc::clone(dictionary);
            let slots = Arc::clone(&slots);
            pool.submit(move || {
                let opening = [dictionary[index]];
                match evaluate_opening(&opening, &dictionary) {
                    Ok(evaluation) => {
                        let mut slots = slots.lock().unwrap_or_else(PoisonError::into_inner);
                        slots[index] = Some(evaluation.result);
                    }
                    Err(e) => error!("evaluating '{}' failed: {e}", dictionary[index]),
                }
            })?;
        }
        info!(
            "submitted {} jobs to {} workers",
            dictionary.len(),
            pool.size()
        );

        loop {
            thread::sleep(self.config.poll_interval);
            let remaining = pool.pending_load();
            info!("worker pool has {remaining} jobs remaining");
            if remaining == 0 {
                break;
            }
        }
        pool.shutdown();

        let slots = slots.lock().unwrap_or_else(PoisonError::into_inner);
        collect_slots(&slots)
    }
}

fn rayon_pool(threads: usize) -> Result<ThreadPool, SearchError> {
    // rayon reads zero threads as "pick a default", so reject it here.
    if threads == 0 {
        return Err(PoolError::NoWorkers.into());
    }
    Ok(ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|id| format!("opener-rayon-{id}"))
        .build()?)
}

fn evaluate_with_rayon(dictionary: &[Word], threads: usize) -> Result<Vec<EvalResult>, SearchError> {
    let pool = rayon_pool(threads)?;
    info!("evaluating {} openings on {threads} rayon threads", dictionary.len());

    pool.install(|| {
        dictionary
            .par_iter()
            .map(|&word| evaluate_opening(&[word], dictionary).map(|evaluation| evaluation.result))
            .collect()
    })
}

fn collect_slots(slots: &[Option<EvalResult>]) -> Result<Vec<EvalResult>, SearchError> {
    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(SearchError::MissingResult { index }))
        .collect()
}
