use crate::data::*;
use crate::engine::*;
use crate::results::WordleError;
use crate::scorers::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of guesses allowed in a standard game.
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Which scoring policy to use when selecting guesses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScoringPolicy {
    /// [`LetterFrequencyScorer`], rewarding distinct letters.
    LetterFrequency,
    /// [`MaxEliminationsScorer`] with [`PartitionMetric::ExpectedSize`].
    #[default]
    ExpectedEliminations,
    /// [`MaxEliminationsScorer`] with [`PartitionMetric::WorstCase`].
    WorstCaseEliminations,
}

/// Settings for playing games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    /// The maximum number of guesses per game.
    pub max_turns: usize,
    pub policy: ScoringPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_turns: DEFAULT_MAX_TURNS,
            policy: ScoringPolicy::default(),
        }
    }
}

impl SolverConfig {
    /// Builds the selector for this config's policy.
    ///
    /// For the elimination policies this precomputes the first turn for `bank`, so build the
    /// selector once and share it between games.
    pub fn build_selector(&self, bank: &WordBank) -> PolicySelector {
        match self.policy {
            ScoringPolicy::LetterFrequency => PolicySelector::LetterFrequency(
                MaxScoreSelector::new(LetterFrequencyScorer::new(true)),
            ),
            ScoringPolicy::ExpectedEliminations => PolicySelector::Eliminations(
                MaxScoreSelector::new(MaxEliminationsScorer::new(
                    bank,
                    PartitionMetric::ExpectedSize,
                )),
            ),
            ScoringPolicy::WorstCaseEliminations => PolicySelector::Eliminations(
                MaxScoreSelector::new(MaxEliminationsScorer::new(bank, PartitionMetric::WorstCase)),
            ),
        }
    }

    /// Starts a new game with this config.
    pub fn new_solver<G: GuessSelector>(&self, bank: &WordBank, selector: G) -> Solver<G> {
        Solver::new(bank, selector, self.max_turns)
    }
}

/// A selector for any [`ScoringPolicy`].
#[derive(Clone, Debug)]
pub enum PolicySelector {
    LetterFrequency(MaxScoreSelector<LetterFrequencyScorer>),
    Eliminations(MaxScoreSelector<MaxEliminationsScorer>),
}

impl PolicySelector {
    /// See [`MaxScoreSelector::rank`].
    pub fn rank(&self, candidates: &CandidateSet, turn_index: usize, n: usize) -> Vec<ScoredWord> {
        match self {
            PolicySelector::LetterFrequency(selector) => selector.rank(candidates, turn_index, n),
            PolicySelector::Eliminations(selector) => selector.rank(candidates, turn_index, n),
        }
    }
}

impl GuessSelector for PolicySelector {
    fn select(&self, candidates: &CandidateSet, turn_index: usize) -> Result<Word, WordleError> {
        match self {
            PolicySelector::LetterFrequency(selector) => selector.select(candidates, turn_index),
            PolicySelector::Eliminations(selector) => selector.select(candidates, turn_index),
        }
    }
}
