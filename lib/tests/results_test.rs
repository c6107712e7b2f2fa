#[macro_use]
extern crate assert_matches;

use wordle_autoplay::*;

use std::result::Result;

use LetterResult::{Hit, Miss, Present};

fn feedback_for(guess: &str, secret: &str) -> Result<Feedback, WordleError> {
    Ok(evaluate(&Word::new(guess)?, &Word::new(secret)?))
}

const SAMPLE_WORDS: [&str; 12] = [
    "alloy", "lolly", "crane", "crate", "slate", "trace", "boots", "piano", "sassy", "mesas",
    "eerie", "error",
];

#[test]
fn evaluate_correct() -> Result<(), WordleError> {
    assert_eq!(feedback_for("crane", "crane")?, Feedback::SOLVED);
    assert!(feedback_for("crane", "crane")?.is_solved());
    Ok(())
}

#[test]
fn evaluate_is_solved_only_for_the_secret() -> Result<(), WordleError> {
    for guess in SAMPLE_WORDS {
        for secret in SAMPLE_WORDS {
            assert_eq!(
                feedback_for(guess, secret)?.is_solved(),
                guess == secret,
                "{} vs {}",
                guess,
                secret
            );
        }
    }
    Ok(())
}

#[test]
fn evaluate_present_when_no_letters_repeat() -> Result<(), WordleError> {
    for secret in SAMPLE_WORDS {
        let secret = Word::new(secret)?;
        if secret.has_repeated_letters() {
            continue;
        }
        for guess in SAMPLE_WORDS {
            let guess = Word::new(guess)?;
            // A repeated guess letter can be a miss even though it is in the secret.
            if guess.has_repeated_letters() {
                continue;
            }
            let feedback = evaluate(&guess, &secret);
            for (index, result) in feedback.results().iter().enumerate() {
                let letter = guess.letters()[index];
                let expect_present =
                    letter != secret.letters()[index] && secret.contains(letter);
                assert_eq!(*result == Present, expect_present, "{} vs {}", guess, secret);
            }
        }
    }
    Ok(())
}

#[test]
fn evaluate_repeated_letters_are_credited_once() -> Result<(), WordleError> {
    // "alloy" has two l's: one is a hit, so only one more l can be present.
    assert_eq!(
        feedback_for("lolly", "alloy")?,
        Feedback::new([Present, Present, Hit, Miss, Hit])
    );
    // Only one o in "piano", so the second o in "boots" is a miss.
    assert_eq!(
        feedback_for("boots", "piano")?,
        Feedback::new([Miss, Present, Miss, Miss, Miss])
    );
    assert_eq!(
        feedback_for("sassy", "mesas")?,
        Feedback::new([Present, Present, Hit, Miss, Miss])
    );
    Ok(())
}

#[test]
fn evaluate_hit_takes_priority_over_present() -> Result<(), WordleError> {
    // The only e in "crate" is matched in place, so the first e is a miss.
    assert_eq!(
        feedback_for("eerie", "crate")?,
        Feedback::new([Miss, Miss, Present, Miss, Hit])
    );
    Ok(())
}

#[test]
fn evaluate_single_letters() -> Result<(), WordleError> {
    assert_eq!(
        feedback_for("abbbb", "acccc")?,
        Feedback::new([Hit, Miss, Miss, Miss, Miss])
    );
    assert_eq!(
        feedback_for("abbbb", "cccac")?,
        Feedback::new([Present, Miss, Miss, Miss, Miss])
    );
    assert_eq!(feedback_for("abcde", "fghij")?, Feedback::new([Miss; 5]));
    Ok(())
}

#[test]
fn evaluate_crane_against_crate() -> Result<(), WordleError> {
    assert_eq!(
        feedback_for("crane", "crate")?,
        Feedback::new([Hit, Hit, Hit, Miss, Hit])
    );
    Ok(())
}

#[test]
fn feedback_parse_and_display() -> Result<(), WordleError> {
    let feedback: Feedback = "GY..g".parse()?;

    assert_eq!(feedback, Feedback::new([Hit, Present, Miss, Miss, Hit]));
    assert_eq!(feedback.to_string(), "gy..g");
    Ok(())
}

#[test]
fn feedback_parse_invalid() {
    assert_matches!("gy.".parse::<Feedback>(), Err(WordleError::InvalidFeedback(_)));
    assert_matches!("gy..z".parse::<Feedback>(), Err(WordleError::InvalidFeedback(_)));
}

#[test]
fn game_report_solved_in() {
    let solved = GameReport {
        status: GameStatus::Solved { turns: 3 },
        history: Vec::new(),
    };
    let failed = GameReport {
        status: GameStatus::Failed(FailureReason::ExhaustedBudget),
        history: Vec::new(),
    };

    assert_eq!(solved.solved_in(), Some(3));
    assert_eq!(failed.solved_in(), None);
    assert!(failed.status.is_terminal());
    assert!(!GameStatus::InProgress.is_terminal());
}
