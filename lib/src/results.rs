use crate::data::Word;
use crate::data::WORD_LENGTH;
use std::fmt;
use std::io;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter is in the word, at this location.
    Hit,
    /// The letter is in the word, but somewhere else.
    Present,
    /// The letter is not in the word, or every copy of it in the word has already been credited
    /// to another location in the guess.
    Miss,
}

impl LetterResult {
    fn to_digit(self) -> u8 {
        match self {
            LetterResult::Miss => 0,
            LetterResult::Present => 1,
            LetterResult::Hit => 2,
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(LetterResult::Hit),
            'y' | '1' => Some(LetterResult::Present),
            '.' | 'b' | 'x' | '0' => Some(LetterResult::Miss),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            LetterResult::Hit => 'g',
            LetterResult::Present => 'y',
            LetterResult::Miss => '.',
        }
    }
}

/// Number of distinct [`Feedback`] values for a five-letter word (3<sup>5</sup>).
pub const NUM_FEEDBACK_PATTERNS: usize = 243;

/// The clue for each letter of one guess, in the same order as the letters of the guess.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// Feedback for a correctly guessed word.
    pub const SOLVED: Feedback = Feedback([LetterResult::Hit; WORD_LENGTH]);

    pub fn new(results: [LetterResult; WORD_LENGTH]) -> Feedback {
        Feedback(results)
    }

    /// The per-letter results.
    pub fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Whether every letter was a [`LetterResult::Hit`].
    pub fn is_solved(&self) -> bool {
        *self == Feedback::SOLVED
    }

    /// A dense index in `0..NUM_FEEDBACK_PATTERNS`, unique to this feedback. Used to bucket words
    /// without hashing.
    pub fn index(&self) -> usize {
        self.0
            .iter()
            .rev()
            .fold(0, |acc, result| acc * 3 + result.to_digit() as usize)
    }
}

impl fmt::Display for Feedback {
    /// Formats as `g` (hit), `y` (present) and `.` (miss), e.g. `gy..g`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in self.0 {
            write!(f, "{}", result.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = WordleError;

    /// Parses feedback entered by a person. Accepts `g`/`y`/`.` as well as `2`/`1`/`0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let results = s
            .chars()
            .map(|c| {
                LetterResult::from_char(c).ok_or_else(|| {
                    WordleError::InvalidFeedback(format!(
                        "'{}' is not one of '.', 'y', or 'g'",
                        c
                    ))
                })
            })
            .collect::<Result<Vec<LetterResult>, WordleError>>()?;
        let results: [LetterResult; WORD_LENGTH] = results.try_into().map_err(|_| {
            WordleError::InvalidFeedback(format!(
                "expected {} letters but got {}",
                WORD_LENGTH,
                s.chars().count()
            ))
        })?;
        Ok(Feedback(results))
    }
}

/// Indicates that an error occurred while loading words or playing a game.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word did not have exactly [`WORD_LENGTH`] letters.
    #[error("'{word}' has {length} letters, but words must have exactly 5")]
    InvalidWordLength { word: String, length: usize },
    /// A character outside `a-z` was found in a word.
    #[error("unsupported character '{0}'; only the letters a-z are allowed")]
    UnsupportedCharacter(char),
    /// A guess was requested from an empty candidate set. Callers must check for this first.
    #[error("cannot select a guess from an empty candidate set")]
    EmptyCandidateSet,
    /// Feedback text could not be parsed.
    #[error("invalid feedback: {0}")]
    InvalidFeedback(String),
    /// Reading words or feedback failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The result of a single word guess.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessResult {
    pub guess: Word,
    pub feedback: Feedback,
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.feedback)
    }
}

/// Why a game ended without finding the word.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FailureReason {
    /// Every allowed guess was used.
    ExhaustedBudget,
    /// No word in the bank matches all of the feedback. Either the secret is not in the bank, or
    /// some feedback was wrong.
    NoCandidatesLeft,
}

/// The state of a game.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    /// The word was found with the given number of guesses.
    Solved { turns: usize },
    Failed(FailureReason),
}

impl GameStatus {
    /// Whether the game is over, i.e. solved or failed.
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Solved { turns } => write!(f, "solved in {} guesses", turns),
            GameStatus::Failed(FailureReason::ExhaustedBudget) => {
                write!(f, "failed: ran out of guesses")
            }
            GameStatus::Failed(FailureReason::NoCandidatesLeft) => {
                write!(f, "failed: no words match the feedback")
            }
        }
    }
}

/// The outcome of one game, with every guess that was played.
#[derive(Debug, Eq, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameReport {
    pub status: GameStatus,
    pub history: Vec<GuessResult>,
}

impl GameReport {
    /// The number of guesses if the game was solved.
    pub fn solved_in(&self) -> Option<usize> {
        match self.status {
            GameStatus::Solved { turns } => Some(turns),
            _ => None,
        }
    }
}

/// Determines the feedback for `guess` when the hidden word is `secret`.
///
/// Letters are credited in two passes. Exact matches are taken first, and only the copies of a
/// letter that remain in `secret` afterwards can mark other guess letters as present. So a letter
/// that appears once in `secret` is credited to at most one location in `guess`.
///
/// ```
/// use wordle_autoplay::*;
///
/// let feedback = evaluate(&Word::new("lolly")?, &Word::new("alloy")?);
///
/// assert_eq!(feedback.to_string(), "yyg.g");
/// # Ok::<(), WordleError>(())
/// ```
pub fn evaluate(guess: &Word, secret: &Word) -> Feedback {
    let guess = guess.letters();
    let secret = secret.letters();
    let mut available = [0u8; 26];
    for letter in secret {
        available[(letter - b'a') as usize] += 1;
    }

    let mut results = [LetterResult::Miss; WORD_LENGTH];
    for index in 0..WORD_LENGTH {
        if guess[index] == secret[index] {
            results[index] = LetterResult::Hit;
            available[(guess[index] - b'a') as usize] -= 1;
        }
    }
    for index in 0..WORD_LENGTH {
        if results[index] == LetterResult::Hit {
            continue;
        }
        let count = &mut available[(guess[index] - b'a') as usize];
        if *count > 0 {
            results[index] = LetterResult::Present;
            *count -= 1;
        }
    }
    Feedback(results)
}
