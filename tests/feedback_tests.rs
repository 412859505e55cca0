use wordle_opener::{compute_feedback, Feedback, FeedbackCode, Word};

use Feedback::{Correct, Misplaced, Wrong};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

#[test]
fn test_all_correct() {
    let code = compute_feedback("abbey", "abbey");
    assert!(code.is_win());
    assert_eq!(code, FeedbackCode::ALL_CORRECT);
}

#[test]
fn test_all_wrong() {
    let code = compute_feedback("quick", "dream");
    assert_eq!(code, FeedbackCode([Wrong; 5]));
}

#[test]
fn test_partial_match_without_duplicates() {
    let code = compute_feedback("arise", "abbey");
    assert_eq!(code.feedbacks(), &[Correct, Wrong, Wrong, Wrong, Misplaced]);
}

#[test]
fn test_duplicate_letter_one_correct_one_misplaced() {
    let code = compute_feedback("sheer", "crepe");
    assert_eq!(code.feedbacks(), &[Wrong, Wrong, Correct, Misplaced, Misplaced]);
}

#[test]
fn test_duplicate_letters_in_guess() {
    let code = compute_feedback("speed", "creep");
    assert_eq!(code.feedbacks(), &[Wrong, Misplaced, Correct, Correct, Wrong]);
}

#[test]
fn test_duplicate_letters_in_answer() {
    let code = compute_feedback("arose", "creep");
    assert_eq!(code.feedbacks(), &[Wrong, Correct, Wrong, Wrong, Misplaced]);
}

#[test]
fn test_exact_match_consumed_before_misplaced_pass() {
    // The leading 'e's must not steal the answer's only 'e' from the exact match.
    let code = compute_feedback("eerie", "abide");
    assert_eq!(code.feedbacks(), &[Wrong, Wrong, Wrong, Misplaced, Correct]);
    let code = compute_feedback("geese", "creep");
    assert_eq!(code.feedbacks(), &[Wrong, Misplaced, Correct, Wrong, Wrong]);
}

#[test]
fn test_specific_wordle_cases() {
    let code = compute_feedback("sores", "those");
    assert_eq!(code.feedbacks(), &[Misplaced, Misplaced, Wrong, Misplaced, Wrong]);
}

#[test]
fn test_deterministic_and_full_length() {
    let words = ["crane", "sheer", "abbey", "eerie", "llama", "mamma"];
    for guess in words {
        for answer in words {
            let first = FeedbackCode::calculate(&word(guess), &word(answer));
            let second = FeedbackCode::calculate(&word(guess), &word(answer));
            assert_eq!(first, second);
            assert_eq!(first.feedbacks().len(), 5);
            assert_eq!(first.is_win(), guess == answer);
        }
    }
}

#[test]
fn test_case_insensitive_input() {
    assert_eq!(compute_feedback("ARISE", "abbey"), compute_feedback("arise", "ABBEY"));
}

#[test]
#[should_panic(expected = "invalid guess")]
fn test_length_mismatch_is_fatal() {
    compute_feedback("crane", "abbey");
    compute_feedback("cranes", "abbey");
}

#[test]
fn test_code_parse_and_display() {
    let code = FeedbackCode::parse("gybbb").unwrap();
    assert_eq!(code.feedbacks(), &[Correct, Misplaced, Wrong, Wrong, Wrong]);
    assert_eq!(FeedbackCode::parse("21000"), Some(code));
    assert_eq!(code.to_string(), "GYBBB");
}

#[test]
fn test_code_parse_invalid() {
    assert!(FeedbackCode::parse("gybbb1").is_none());
    assert!(FeedbackCode::parse("gybb").is_none());
    assert!(FeedbackCode::parse("gybzb").is_none());
}
