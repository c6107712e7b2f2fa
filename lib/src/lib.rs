//! Plays five-letter Wordle automatically.
//!
//! Each turn, a [`GuessSelector`] picks a word from the remaining [`CandidateSet`], an [`Oracle`]
//! reveals the [`Feedback`], and the candidates are narrowed to the words that would have produced
//! that same feedback. A [`Solver`] repeats this until the word is found or the guesses run out.
//!
//! ```
//! use wordle_autoplay::*;
//!
//! let bank = WordBank::from_iterator(["crane", "slate", "trace", "crate"])?;
//! let config = SolverConfig::default();
//! let selector = config.build_selector(&bank);
//!
//! let report = play_game(&Word::new("crate")?, &bank, &selector, config.max_turns)?;
//!
//! assert_eq!(report.status, GameStatus::Solved { turns: 2 });
//! # Ok::<(), WordleError>(())
//! ```

mod config;
mod data;
mod engine;
mod results;
pub mod scorers;
mod stats;

pub use config::*;
pub use data::CandidateSet;
pub use data::Word;
pub use data::WordBank;
pub use data::WORD_LENGTH;
pub use engine::*;
pub use results::*;
pub use stats::*;

/// Building blocks used by the scorers.
pub mod details {
    pub use crate::data::LocatedLetter;
    pub use crate::data::WordCounter;
}
