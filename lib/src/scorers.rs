use crate::data::*;
use crate::results::evaluate;
use crate::results::NUM_FEEDBACK_PATTERNS;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gives candidate words a score, where the maximum score indicates the best guess.
///
/// Scorers must be deterministic: the same candidates and turn index must always produce the same
/// scores. Ties are broken by the [`MaxScoreSelector`](crate::MaxScoreSelector), not the scorer.
///
/// Two policies are provided. [`MaxEliminationsScorer`] partitions the candidates by the feedback
/// each guess would produce, and prefers guesses that leave the fewest words behind. It needs
/// *O*(*n*<sup>2</sup>) feedback evaluations per turn. [`LetterFrequencyScorer`] only counts
/// letters, so it is much cheaper, but it guesses less well.
pub trait WordScorer {
    /// Scores every word in `candidates` as a possible next guess. The returned scores are in the
    /// same order as the candidates.
    fn score_words(&self, candidates: &CandidateSet, turn_index: usize) -> Vec<i64>;
}

/// Scores words by how common their letters are among the candidates.
///
/// For each location, a word earns 1 point for every candidate with the same letter in the same
/// location. If `reward_distinct_letters` is set, each distinct letter in the word also earns 1
/// point for every candidate that contains that letter anywhere. Repeated letters are only scored
/// once in that case, so words that spend locations on duplicate letters score lower.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterFrequencyScorer {
    reward_distinct_letters: bool,
}

impl LetterFrequencyScorer {
    /// Constructs a `LetterFrequencyScorer`.
    ///
    /// ```
    /// use wordle_autoplay::*;
    /// use wordle_autoplay::scorers::LetterFrequencyScorer;
    ///
    /// let bank = WordBank::from_iterator(["crane", "slate", "trace", "crate"])?;
    /// let selector = MaxScoreSelector::new(LetterFrequencyScorer::new(true));
    ///
    /// assert_eq!(selector.select(&CandidateSet::from_bank(&bank), 0)?, Word::new("crate")?);
    /// # Ok::<(), WordleError>(())
    /// ```
    pub fn new(reward_distinct_letters: bool) -> LetterFrequencyScorer {
        LetterFrequencyScorer {
            reward_distinct_letters,
        }
    }

    /// Scores a single word against the given candidates.
    pub fn score_word(&self, word: &Word, candidates: &[Word]) -> i64 {
        self.score_with_counter(word, &WordCounter::new(candidates))
    }

    fn score_with_counter(&self, word: &Word, counter: &WordCounter) -> i64 {
        let letters = word.letters();
        let mut sum = 0;
        for (index, letter) in letters.iter().enumerate() {
            sum += counter.num_words_with_located_letter(&LocatedLetter::new(*letter, index as u8))
                as i64;
            if self.reward_distinct_letters && !letters[..index].contains(letter) {
                sum += counter.num_words_with_letter(*letter) as i64;
            }
        }
        sum
    }
}

impl Default for LetterFrequencyScorer {
    fn default() -> Self {
        LetterFrequencyScorer::new(true)
    }
}

impl WordScorer for LetterFrequencyScorer {
    fn score_words(&self, candidates: &CandidateSet, _turn_index: usize) -> Vec<i64> {
        let counter = WordCounter::new(candidates);
        candidates
            .iter()
            .map(|word| self.score_with_counter(word, &counter))
            .collect()
    }
}

/// How [`MaxEliminationsScorer`] turns the partition of candidates into a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartitionMetric {
    /// Minimize the expected number of remaining candidates, assuming each candidate is equally
    /// likely to be the secret.
    ExpectedSize,
    /// Minimize the largest number of candidates that could remain.
    WorstCase,
}

/// Scores each guess by how many candidates it is expected to eliminate.
///
/// For each guess, the candidates are grouped by the feedback they would produce if they were the
/// secret. A group of size *m* out of *n* candidates is seen with probability *m*/*n*, and leaves
/// *m* candidates behind.
///
/// * With [`PartitionMetric::ExpectedSize`], the score is *n*<sup>2</sup> - Σ*m*<sup>2</sup>,
///   which is *n* times the expected number of eliminated words.
/// * With [`PartitionMetric::WorstCase`], the score is *n* - max(*m*), the number of words the
///   guess is guaranteed to eliminate.
///
/// Scores are exact integers, so equally good guesses really do tie.
///
/// The first turn always starts from the whole word bank, so [`MaxEliminationsScorer::new`]
/// precomputes those scores once. Clone the scorer to reuse the precomputation across games.
#[derive(Clone, Debug)]
pub struct MaxEliminationsScorer {
    metric: PartitionMetric,
    first_turn_scores: Option<Arc<HashMap<Word, i64>>>,
}

impl MaxEliminationsScorer {
    /// Constructs a `MaxEliminationsScorer` and precomputes the first turn for the given bank.
    /// **Be careful, this is expensive to compute!** It scales in *O*(*n*<sup>2</sup>), where *n*
    /// is the number of words, although the work is spread across threads.
    ///
    /// ```
    /// use wordle_autoplay::*;
    /// use wordle_autoplay::scorers::{MaxEliminationsScorer, PartitionMetric};
    ///
    /// let bank = WordBank::from_iterator(["crane", "slate", "trace", "crate"])?;
    /// let scorer = MaxEliminationsScorer::new(&bank, PartitionMetric::ExpectedSize);
    /// let selector = MaxScoreSelector::new(scorer);
    ///
    /// assert_eq!(selector.select(&CandidateSet::from_bank(&bank), 0)?, Word::new("crane")?);
    /// # Ok::<(), WordleError>(())
    /// ```
    pub fn new(bank: &WordBank, metric: PartitionMetric) -> MaxEliminationsScorer {
        let all_words: &[Word] = bank;
        let first_turn_scores: HashMap<Word, i64> = all_words
            .par_iter()
            .map(|word| (*word, partition_score(word, all_words, metric)))
            .collect();
        MaxEliminationsScorer::from_first_turn_scores(metric, first_turn_scores)
    }

    /// Constructs a `MaxEliminationsScorer` that computes every turn from scratch.
    pub fn without_precomputation(metric: PartitionMetric) -> MaxEliminationsScorer {
        MaxEliminationsScorer {
            metric,
            first_turn_scores: None,
        }
    }

    /// Constructs a `MaxEliminationsScorer` from first-turn scores that were computed earlier, for
    /// example by [`MaxEliminationsScorer::first_turn_scores`] on another scorer.
    pub fn from_first_turn_scores(
        metric: PartitionMetric,
        first_turn_scores: HashMap<Word, i64>,
    ) -> MaxEliminationsScorer {
        MaxEliminationsScorer {
            metric,
            first_turn_scores: Some(Arc::new(first_turn_scores)),
        }
    }

    /// The precomputed first-turn scores, if any.
    pub fn first_turn_scores(&self) -> Option<&HashMap<Word, i64>> {
        self.first_turn_scores.as_deref()
    }

    pub fn metric(&self) -> PartitionMetric {
        self.metric
    }

    /// Scores a single guess against the given candidates, without using the precomputation.
    pub fn score_word(&self, word: &Word, candidates: &[Word]) -> i64 {
        partition_score(word, candidates, self.metric)
    }

    fn cached_first_turn(&self, candidates: &CandidateSet, turn_index: usize) -> Option<Vec<i64>> {
        let scores = self.first_turn_scores.as_ref()?;
        if turn_index != 0 || scores.len() != candidates.len() {
            return None;
        }
        // Same size and every word known means it is the same set of words.
        candidates
            .iter()
            .map(|word| scores.get(word).copied())
            .collect()
    }
}

impl WordScorer for MaxEliminationsScorer {
    fn score_words(&self, candidates: &CandidateSet, turn_index: usize) -> Vec<i64> {
        if let Some(scores) = self.cached_first_turn(candidates, turn_index) {
            return scores;
        }
        let words: &[Word] = candidates;
        words
            .par_iter()
            .map(|word| partition_score(word, words, self.metric))
            .collect()
    }
}

fn partition_score(guess: &Word, candidates: &[Word], metric: PartitionMetric) -> i64 {
    let mut partition_sizes = [0u32; NUM_FEEDBACK_PATTERNS];
    for candidate in candidates {
        partition_sizes[evaluate(guess, candidate).index()] += 1;
    }
    let num_candidates = candidates.len() as i64;
    match metric {
        PartitionMetric::ExpectedSize => {
            let sum_of_squares: i64 = partition_sizes
                .iter()
                .map(|size| *size as i64 * *size as i64)
                .sum();
            num_candidates * num_candidates - sum_of_squares
        }
        PartitionMetric::WorstCase => {
            let largest = partition_sizes.iter().copied().max().unwrap_or(0) as i64;
            num_candidates - largest
        }
    }
}
