//! crates/hangman/tests/game_flow_test.rs
//!
//! End-to-end round flow through the service facade.
//! Verifies: Start round -> Guess letters / words -> Win or loss -> Next round.

use std::sync::Arc;
use std::thread;

use hangman::{GameError, GameStatus, GuessOutcome, HangmanService, MAX_GUESSES};

/// Extract `(correct, guesses_left, current_state)` from an in-progress outcome.
fn progress(outcome: GuessOutcome) -> (bool, u32, String) {
  match outcome {
    GuessOutcome::InProgress {
      correct,
      guesses_left,
      current_state,
    } => (correct, guesses_left, current_state),
    other => panic!("expected in-progress outcome, got {other:?}"),
  }
}

#[test]
fn re_guess_keeps_counter() {
  let service = HangmanService::new();
  service.start_round("cat");

  let (_, left_first, _) = progress(service.guess_letter("a").unwrap());
  let (correct, left_again, state) = progress(service.guess_letter("a").unwrap());

  assert!(correct);
  assert_eq!(left_first, left_again);
  assert_eq!(state, "*a*");
}

#[test]
fn example_is_won_without_final_duplicate() {
  let service = HangmanService::new();
  let info = service.start_round("example");
  assert_eq!(info.word_length, 7);

  let letters = ["e", "x", "a", "m", "p", "l"];
  let (last, rest) = letters.split_last().unwrap();
  for letter in rest {
    let (correct, _, _) = progress(service.guess_letter(letter).unwrap());
    assert!(correct, "{letter} should be in the word");
  }

  assert_eq!(service.guess_letter(last).unwrap(), GuessOutcome::Won);
  assert_eq!(service.status(), Some(GameStatus::Won));
}

#[test]
fn cat_is_lost_after_six_misses() {
  let service = HangmanService::new();
  service.start_round("cat");

  let misses = ["x", "y", "z", "q", "w", "v"];
  let (last, rest) = misses.split_last().unwrap();
  for (i, letter) in rest.iter().enumerate() {
    let (correct, left, state) = progress(service.guess_letter(letter).unwrap());
    assert!(!correct);
    assert_eq!(left, MAX_GUESSES - (i as u32 + 1));
    assert_eq!(state, "***");
  }

  assert_eq!(
    service.guess_letter(last).unwrap(),
    GuessOutcome::Lost {
      current_state: "***".to_string()
    }
  );
  assert_eq!(service.status(), Some(GameStatus::Lost));
}

#[test]
fn wrong_word_costs_one_guess_and_reveals_nothing() {
  let service = HangmanService::new();
  service.start_round("cat");

  let (correct, left, state) = progress(service.guess_word("cap").unwrap());
  assert!(!correct);
  assert_eq!(left, MAX_GUESSES - 1);
  assert_eq!(state, "***");
}

#[test]
fn exact_word_wins_regardless_of_mask() {
  let service = HangmanService::new();
  service.start_round("cat");
  service.guess_letter("t").unwrap();
  service.guess_letter("z").unwrap();

  assert_eq!(service.guess_word("cat").unwrap(), GuessOutcome::Won);
}

#[test]
fn new_round_discards_previous_state() {
  let service = HangmanService::new();
  service.start_round("cat");
  service.guess_letter("c").unwrap();
  service.guess_letter("z").unwrap();
  service.guess_word("cot").unwrap();

  let info = service.start_round("dog");
  assert_eq!(info.word, "dog");

  // "x" misses in both words; the mask and counter come from the new round only
  let (correct, left, state) = progress(service.guess_letter("x").unwrap());
  assert!(!correct);
  assert_eq!(left, MAX_GUESSES - 1);
  assert_eq!(state, "***");
}

#[test]
fn terminal_round_replays_result() {
  let service = HangmanService::new();
  service.start_round("cat");
  service.guess_word("cat").unwrap();

  assert_eq!(service.guess_letter("z").unwrap(), GuessOutcome::Won);
  assert_eq!(service.guess_word("dog").unwrap(), GuessOutcome::Won);
}

#[test]
fn no_active_round_is_reported() {
  let service = HangmanService::new();
  assert_eq!(service.guess_letter("a"), Err(GameError::NoActiveRound));
  assert_eq!(service.guess_word("word"), Err(GameError::NoActiveRound));
}

#[test]
fn concurrent_misses_are_not_lost() {
  let service = Arc::new(HangmanService::new());
  service.start_round("abcdefghijklmnop");

  // 5 distinct misses from 5 threads: every one must be counted
  let handles: Vec<_> = ["q", "r", "s", "t", "u"]
    .into_iter()
    .map(|letter| {
      let service = Arc::clone(&service);
      thread::spawn(move || service.guess_letter(letter).unwrap())
    })
    .collect();

  for handle in handles {
    handle.join().expect("guess thread panicked");
  }

  let (correct, left, _) = progress(service.guess_letter("a").unwrap());
  assert!(correct);
  assert_eq!(left, MAX_GUESSES - 5);
}

#[test]
fn concurrent_reveals_are_all_applied() {
  let service = Arc::new(HangmanService::new());
  service.start_round("abcdef");

  let handles: Vec<_> = ["a", "b", "c", "d", "e"]
    .into_iter()
    .map(|letter| {
      let service = Arc::clone(&service);
      thread::spawn(move || service.guess_letter(letter).unwrap())
    })
    .collect();

  for handle in handles {
    handle.join().expect("guess thread panicked");
  }

  assert_eq!(service.guess_letter("f").unwrap(), GuessOutcome::Won);
}
