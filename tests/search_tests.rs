use std::sync::Arc;
use std::time::Duration;
use wordle_opener::{
    evaluate_opening, load_dictionary_from_str, select_best, EvalResult, PoolError,
    SearchBackend, SearchConfig, SearchCoordinator, SearchError, Word,
};

fn get_test_words() -> Arc<[Word]> {
    Arc::from(load_dictionary_from_str(
        "crane\nslate\ntrace\ncrate\nraise\narise\nstare\nroast\ntoast\nbeast\nabbey\ncrepe\nsheer\nfuzzy\n",
    ))
}

fn config(threads: usize, backend: SearchBackend) -> SearchConfig {
    SearchConfig {
        threads,
        poll_interval: Duration::from_millis(10),
        backend,
    }
}

fn result(mean: f64) -> EvalResult {
    EvalResult { mean, median: 0 }
}

#[test]
fn test_select_lowest_mean() {
    let results = [result(3.2), result(1.1), result(5.0)];
    let (index, best) = select_best(&results).unwrap();
    assert_eq!(index, 1);
    assert_eq!(best.mean, 1.1);
}

#[test]
fn test_select_first_on_tie() {
    let (index, _) = select_best(&[result(1.1), result(1.1)]).unwrap();
    assert_eq!(index, 0);
    let (index, _) = select_best(&[result(2.0), result(1.1), result(1.1)]).unwrap();
    assert_eq!(index, 1);
}

#[test]
fn test_select_from_nothing() {
    assert!(matches!(select_best(&[]), Err(SearchError::NoCandidates)));
}

#[test]
fn test_default_config() {
    let config = SearchConfig::default();
    assert_eq!(config.threads, 7);
    assert_eq!(config.poll_interval, Duration::from_millis(500));
    assert_eq!(config.backend, SearchBackend::Pool);
}

#[test]
fn test_pool_search_matches_sequential() {
    let words = get_test_words();
    let expected: Vec<EvalResult> = words
        .iter()
        .map(|&w| evaluate_opening(&[w], &words).unwrap().result)
        .collect();
    let (expected_index, _) = select_best(&expected).unwrap();

    let report = SearchCoordinator::new(config(3, SearchBackend::Pool))
        .find_best_opening(Arc::clone(&words))
        .unwrap();

    assert_eq!(report.results, expected);
    assert_eq!(report.best.index, expected_index);
    assert_eq!(report.best.word, words[expected_index]);
    assert_eq!(report.best.result, expected[expected_index]);
}

#[test]
fn test_backends_agree() {
    let words = get_test_words();
    let pool = SearchCoordinator::new(config(4, SearchBackend::Pool))
        .find_best_opening(Arc::clone(&words))
        .unwrap();
    let rayon = SearchCoordinator::new(config(4, SearchBackend::Rayon))
        .find_best_opening(Arc::clone(&words))
        .unwrap();

    assert_eq!(pool.results, rayon.results);
    assert_eq!(pool.best, rayon.best);
}

#[test]
fn test_more_threads_than_words() {
    let words: Arc<[Word]> = Arc::from(load_dictionary_from_str("crane\nslate\n"));
    let report = SearchCoordinator::new(config(8, SearchBackend::Pool))
        .find_best_opening(words)
        .unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.best.index, 0);
    assert_eq!(report.best.result.mean, 1.0);
}

#[test]
fn test_single_word_dictionary() {
    let words: Arc<[Word]> = Arc::from(load_dictionary_from_str("crane\n"));
    let report = SearchCoordinator::new(config(2, SearchBackend::Pool))
        .find_best_opening(words)
        .unwrap();

    assert_eq!(report.best.word.as_str(), "crane");
    assert_eq!(report.best.result.mean, 1.0);
    assert_eq!(report.best.result.median, 1);
}

#[test]
fn test_empty_dictionary() {
    let words: Arc<[Word]> = Arc::from(Vec::new());
    let result = SearchCoordinator::new(config(2, SearchBackend::Pool)).find_best_opening(words);
    assert!(matches!(result, Err(SearchError::EmptyDictionary)));
}

#[test]
fn test_zero_threads_reported() {
    let result = SearchCoordinator::new(config(0, SearchBackend::Pool))
        .find_best_opening(get_test_words());
    assert!(matches!(result, Err(SearchError::Pool(PoolError::NoWorkers))));
}

#[test]
fn test_zero_threads_reported_for_rayon() {
    let result = SearchCoordinator::new(config(0, SearchBackend::Rayon))
        .find_best_opening(get_test_words());
    assert!(matches!(result, Err(SearchError::Pool(PoolError::NoWorkers))));
}

#[test]
fn test_rayon_single_thread_matches_pool() {
    let words = get_test_words();
    let pool = SearchCoordinator::new(config(2, SearchBackend::Pool))
        .find_best_opening(Arc::clone(&words))
        .unwrap();
    let rayon = SearchCoordinator::new(config(1, SearchBackend::Rayon))
        .find_best_opening(Arc::clone(&words))
        .unwrap();

    assert_eq!(pool.results, rayon.results);
    assert_eq!(pool.best, rayon.best);
}

#[test]
fn test_top_openings_sorted() {
    let words = get_test_words();
    let report = SearchCoordinator::new(config(3, SearchBackend::Pool))
        .find_best_opening(Arc::clone(&words))
        .unwrap();

    let top = report.top(5);
    assert_eq!(top.len(), 5);
    assert_eq!(top[0], report.best);
    for pair in top.windows(2) {
        assert!(pair[0].result.mean <= pair[1].result.mean);
        if pair[0].result.mean == pair[1].result.mean {
            assert!(pair[0].index < pair[1].index);
        }
    }
    assert_eq!(report.top(100).len(), words.len());
}
