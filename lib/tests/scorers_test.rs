#[macro_use]
extern crate assert_matches;

use wordle_autoplay::scorers::*;
use wordle_autoplay::*;

use std::result::Result;

const SIX_WORDS: [&str; 6] = ["alpha", "allot", "begot", "below", "endow", "ingot"];

macro_rules! test_scorer {
    ($construct_scorer_from_bank_fn:ident) => {
        #[test]
        fn solve_wordle() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(SIX_WORDS)?;
            let selector = MaxScoreSelector::new($construct_scorer_from_bank_fn(&bank));

            let result = play_game(&Word::new("alpha")?, &bank, selector, bank.len())?;

            assert_matches!(result.status, GameStatus::Solved { .. });
            Ok(())
        }

        #[test]
        fn solve_every_word() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(SIX_WORDS)?;
            let selector = MaxScoreSelector::new($construct_scorer_from_bank_fn(&bank));

            let reports = play_games(&bank, &bank, &selector, bank.len())?;

            for report in reports {
                assert_matches!(report.status, GameStatus::Solved { .. });
            }
            Ok(())
        }

        #[test]
        fn try_solve_unknown_word() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(SIX_WORDS)?;
            let selector = MaxScoreSelector::new($construct_scorer_from_bank_fn(&bank));

            let result = play_game(&Word::new("other")?, &bank, selector, bank.len())?;

            assert_eq!(
                result.status,
                GameStatus::Failed(FailureReason::NoCandidatesLeft)
            );
            Ok(())
        }

        #[test]
        fn select_is_deterministic() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(SIX_WORDS)?;
            let selector = MaxScoreSelector::new($construct_scorer_from_bank_fn(&bank));
            let candidates = CandidateSet::from_bank(&bank);

            let first = selector.select(&candidates, 0)?;

            for _ in 0..5 {
                assert_eq!(selector.select(&candidates, 0)?, first);
            }
            assert_eq!(selector.rank(&candidates, 0, 1)[0].word, first);
            Ok(())
        }

        #[test]
        fn select_from_empty_candidates_fails() -> Result<(), WordleError> {
            let bank = WordBank::from_iterator(SIX_WORDS)?;
            let selector = MaxScoreSelector::new($construct_scorer_from_bank_fn(&bank));
            let empty: CandidateSet = std::iter::empty().collect();

            assert_matches!(
                selector.select(&empty, 1),
                Err(WordleError::EmptyCandidateSet)
            );
            assert!(selector.rank(&empty, 1, 3).is_empty());
            Ok(())
        }
    };
}

mod letter_frequency_scorer {

    use super::*;

    fn create_scorer(_bank: &WordBank) -> LetterFrequencyScorer {
        LetterFrequencyScorer::new(true)
    }

    test_scorer!(create_scorer);

    #[test]
    fn score_word() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(SIX_WORDS)?;
        let scorer = LetterFrequencyScorer::new(true);

        // Located letters, then distinct letters anywhere.
        assert_eq!(
            scorer.score_word(&Word::new("alpha")?, &bank),
            (2 + 2 + 1 + 1 + 1) + (2 + 3 + 1 + 1)
        );
        assert_eq!(
            scorer.score_word(&Word::new("allot")?, &bank),
            (2 + 2 + 2 + 5 + 3) + (2 + 3 + 5 + 3)
        );
        assert_eq!(
            scorer.score_word(&Word::new("begot")?, &bank),
            (2 + 2 + 2 + 5 + 3) + (2 + 3 + 2 + 5 + 3)
        );
        assert_eq!(scorer.score_word(&Word::new("zzzzz")?, &bank), 0);
        Ok(())
    }

    #[test]
    fn select_next_guess() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(SIX_WORDS)?;
        let selector = MaxScoreSelector::new(LetterFrequencyScorer::new(true));

        assert_eq!(
            selector.select(&CandidateSet::from_bank(&bank), 0)?,
            Word::new("begot")?
        );
        Ok(())
    }

    #[test]
    fn ties_go_to_the_first_word() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(SIX_WORDS)?;
        let selector = MaxScoreSelector::new(LetterFrequencyScorer::new(false));
        let candidates = CandidateSet::from_bank(&bank);

        // "allot" and "begot" both score 14 on located letters alone.
        assert_eq!(selector.select(&candidates, 0)?, Word::new("allot")?);
        assert_eq!(
            selector.rank(&candidates, 0, 2),
            vec![
                ScoredWord {
                    word: Word::new("allot")?,
                    score: 14
                },
                ScoredWord {
                    word: Word::new("begot")?,
                    score: 14
                },
            ]
        );
        Ok(())
    }
}

mod expected_eliminations_scorer {

    use super::*;

    fn create_scorer(bank: &WordBank) -> MaxEliminationsScorer {
        MaxEliminationsScorer::new(bank, PartitionMetric::ExpectedSize)
    }

    test_scorer!(create_scorer);

    #[test]
    fn rank_ties_in_word_order() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["crane", "slate", "trace", "crate"])?;
        let selector = MaxScoreSelector::new(create_scorer(&bank));

        let ranked = selector.rank(&CandidateSet::from_bank(&bank), 0, 3);

        // Every word tells the other three apart: 4 * 4 - 4.
        assert_eq!(
            ranked,
            vec![
                ScoredWord {
                    word: Word::new("crane")?,
                    score: 12
                },
                ScoredWord {
                    word: Word::new("crate")?,
                    score: 12
                },
                ScoredWord {
                    word: Word::new("slate")?,
                    score: 12
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn score_word_after_narrowing() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["abbey", "abbot", "about", "zonal", "zooms"])?;
        let scorer = create_scorer(&bank);
        let remaining: CandidateSet = [Word::new("abbot")?, Word::new("about")?]
            .into_iter()
            .collect();

        // Tells the two words apart.
        assert_eq!(scorer.score_word(&Word::new("abbot")?, &remaining), 4 - 2);
        // Every remaining word gives the same feedback.
        assert_eq!(scorer.score_word(&Word::new("zzzzz")?, &remaining), 0);
        // The precomputed first turn is only used for the whole bank.
        assert_eq!(scorer.score_words(&remaining, 0), vec![2, 2]);
        Ok(())
    }

    #[test]
    fn precomputed_first_turn_matches_full_computation() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(SIX_WORDS)?;
        let precomputed = create_scorer(&bank);
        let computed = MaxEliminationsScorer::without_precomputation(PartitionMetric::ExpectedSize);
        let candidates = CandidateSet::from_bank(&bank);

        assert_eq!(
            precomputed.score_words(&candidates, 0),
            computed.score_words(&candidates, 0)
        );
        assert_eq!(precomputed.first_turn_scores().map(|s| s.len()), Some(6));
        assert!(computed.first_turn_scores().is_none());
        Ok(())
    }
}

mod worst_case_eliminations_scorer {

    use super::*;

    fn create_scorer(bank: &WordBank) -> MaxEliminationsScorer {
        MaxEliminationsScorer::new(bank, PartitionMetric::WorstCase)
    }

    test_scorer!(create_scorer);

    #[test]
    fn score_word() -> Result<(), WordleError> {
        let bank = WordBank::from_iterator(["crane", "slate", "trace", "crate"])?;
        let scorer = create_scorer(&bank);

        assert_eq!(scorer.score_word(&Word::new("crane")?, &bank), 3);
        assert_eq!(scorer.score_word(&Word::new("zzzzz")?, &bank), 0);
        Ok(())
    }
}
