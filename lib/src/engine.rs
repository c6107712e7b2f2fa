use crate::data::*;
use crate::results::*;
use crate::scorers::WordScorer;
use log::{debug, info, trace};
use rayon::prelude::*;
use std::result::Result;

/// Chooses the next word to guess.
pub trait GuessSelector {
    /// Selects a guess from `candidates` for the given zero-based turn.
    ///
    /// Must return the same word for the same inputs. Fails with
    /// [`WordleError::EmptyCandidateSet`] if there are no candidates.
    fn select(&self, candidates: &CandidateSet, turn_index: usize) -> Result<Word, WordleError>;
}

impl<G: GuessSelector + ?Sized> GuessSelector for &G {
    fn select(&self, candidates: &CandidateSet, turn_index: usize) -> Result<Word, WordleError> {
        (**self).select(candidates, turn_index)
    }
}

/// A word and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: i64,
}

/// Guesses the candidate with the highest score. Ties go to the word that sorts first.
#[derive(Clone, Debug)]
pub struct MaxScoreSelector<S> {
    scorer: S,
}

impl<S: WordScorer> MaxScoreSelector<S> {
    pub fn new(scorer: S) -> MaxScoreSelector<S> {
        MaxScoreSelector { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Returns up to `n` of the best guesses, best first, in the same order that
    /// [`GuessSelector::select`] prefers them.
    pub fn rank(&self, candidates: &CandidateSet, turn_index: usize, n: usize) -> Vec<ScoredWord> {
        let scores = self.scorer.score_words(candidates, turn_index);
        let mut scored: Vec<ScoredWord> = candidates
            .iter()
            .zip(scores)
            .map(|(word, score)| ScoredWord { word: *word, score })
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        scored.truncate(n);
        scored
    }
}

impl<S: WordScorer> GuessSelector for MaxScoreSelector<S> {
    fn select(&self, candidates: &CandidateSet, turn_index: usize) -> Result<Word, WordleError> {
        let scores = self.scorer.score_words(candidates, turn_index);
        // Candidates are sorted, so keeping the first maximum picks the smallest tied word.
        let mut best: Option<ScoredWord> = None;
        for (word, score) in candidates.iter().zip(scores) {
            if best.map_or(true, |best| score > best.score) {
                best = Some(ScoredWord { word: *word, score });
            }
        }
        let best = best.ok_or(WordleError::EmptyCandidateSet)?;
        trace!(
            "turn {}: best of {} candidates is {} with score {}",
            turn_index,
            candidates.len(),
            best.word,
            best.score
        );
        Ok(best.word)
    }
}

/// Reveals the feedback for each guess.
pub trait Oracle {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, WordleError>;
}

/// Answers with the feedback for a known secret word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretOracle {
    secret: Word,
}

impl SecretOracle {
    pub fn new(secret: Word) -> SecretOracle {
        SecretOracle { secret }
    }

    pub fn secret(&self) -> &Word {
        &self.secret
    }
}

impl Oracle for SecretOracle {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, WordleError> {
        Ok(evaluate(guess, &self.secret))
    }
}

/// Plays a single game, one guess at a time.
///
/// The solver owns the game state: the remaining candidates, the history of guesses, and the
/// status. Games that end are reported through [`GameStatus`], never as errors. Errors only come
/// from the [`Oracle`].
///
/// ```
/// use wordle_autoplay::*;
/// use wordle_autoplay::scorers::LetterFrequencyScorer;
///
/// let bank = WordBank::from_iterator(["crane", "slate", "trace", "crate"])?;
/// let selector = MaxScoreSelector::new(LetterFrequencyScorer::default());
/// let solver = Solver::new(&bank, selector, 6);
///
/// let report = solver.run(&mut SecretOracle::new(Word::new("slate")?))?;
///
/// assert!(report.solved_in().is_some());
/// # Ok::<(), WordleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Solver<G> {
    selector: G,
    max_turns: usize,
    candidates: CandidateSet,
    history: Vec<GuessResult>,
    status: GameStatus,
}

impl<G: GuessSelector> Solver<G> {
    /// Starts a new game where every word in `bank` is a candidate.
    pub fn new(bank: &WordBank, selector: G, max_turns: usize) -> Solver<G> {
        let candidates = CandidateSet::from_bank(bank);
        let status = if max_turns == 0 {
            GameStatus::Failed(FailureReason::ExhaustedBudget)
        } else if candidates.is_empty() {
            GameStatus::Failed(FailureReason::NoCandidatesLeft)
        } else {
            GameStatus::InProgress
        };
        Solver {
            selector,
            max_turns,
            candidates,
            history: Vec::new(),
            status,
        }
    }

    pub fn selector(&self) -> &G {
        &self.selector
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The zero-based index of the next turn.
    pub fn turn_index(&self) -> usize {
        self.history.len()
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Plays one turn and returns the new status. Does nothing if the game is already over.
    pub fn step<O: Oracle + ?Sized>(&mut self, oracle: &mut O) -> Result<GameStatus, WordleError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }
        let turn_index = self.turn_index();
        let guess = self.selector.select(&self.candidates, turn_index)?;
        let feedback = oracle.feedback(&guess)?;
        self.history.push(GuessResult { guess, feedback });

        if feedback.is_solved() {
            self.status = GameStatus::Solved {
                turns: self.history.len(),
            };
            info!("{} after guessing {}", self.status, guess);
            return Ok(self.status);
        }

        self.candidates = self.candidates.filter(&guess, &feedback);
        debug!(
            "turn {}: guessed {}, got {}, {} candidates left",
            turn_index,
            guess,
            feedback,
            self.candidates.len()
        );
        if self.candidates.is_empty() {
            self.status = GameStatus::Failed(FailureReason::NoCandidatesLeft);
        } else if self.history.len() >= self.max_turns {
            self.status = GameStatus::Failed(FailureReason::ExhaustedBudget);
        }
        if self.status.is_terminal() {
            info!("{} after {} guesses", self.status, self.history.len());
        }
        Ok(self.status)
    }

    /// Plays until the game is over.
    pub fn run<O: Oracle + ?Sized>(mut self, oracle: &mut O) -> Result<GameReport, WordleError> {
        while !self.status.is_terminal() {
            self.step(oracle)?;
        }
        Ok(self.into_report())
    }

    /// The status and history so far.
    pub fn into_report(self) -> GameReport {
        GameReport {
            status: self.status,
            history: self.history,
        }
    }
}

/// Plays a game against the given secret word.
///
/// The secret does not need to be in the bank, though the game will then usually end with
/// [`FailureReason::NoCandidatesLeft`].
pub fn play_game<G: GuessSelector>(
    secret: &Word,
    bank: &WordBank,
    selector: G,
    max_turns: usize,
) -> Result<GameReport, WordleError> {
    Solver::new(bank, selector, max_turns).run(&mut SecretOracle::new(*secret))
}

/// Plays one independent game for each secret, in parallel. Reports are returned in the same
/// order as `secrets`.
pub fn play_games<G: GuessSelector + Sync>(
    secrets: &[Word],
    bank: &WordBank,
    selector: &G,
    max_turns: usize,
) -> Result<Vec<GameReport>, WordleError> {
    secrets
        .par_iter()
        .map(|secret| play_game(secret, bank, selector, max_turns))
        .collect()
}
