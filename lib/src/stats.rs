use crate::results::*;
use std::collections::BTreeMap;
use std::fmt;

/// Aggregate results over many games.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSummary {
    pub num_games: usize,
    pub num_solved: usize,
    /// Number of solved games for each number of guesses.
    pub num_games_per_num_guesses: BTreeMap<usize, usize>,
    pub num_exhausted_budget: usize,
    pub num_no_candidates_left: usize,
    /// Mean number of guesses across solved games, or `None` if no game was solved.
    pub mean_guesses: Option<f64>,
    /// Population standard deviation of the number of guesses across solved games.
    pub std_dev_guesses: Option<f64>,
}

impl SimulationSummary {
    pub fn from_reports<'a, I>(reports: I) -> SimulationSummary
    where
        I: IntoIterator<Item = &'a GameReport>,
    {
        let mut num_games = 0;
        let mut num_exhausted_budget = 0;
        let mut num_no_candidates_left = 0;
        let mut num_guesses_per_game: Vec<usize> = Vec::new();
        for report in reports {
            num_games += 1;
            match report.status {
                GameStatus::Solved { turns } => num_guesses_per_game.push(turns),
                GameStatus::Failed(FailureReason::ExhaustedBudget) => num_exhausted_budget += 1,
                GameStatus::Failed(FailureReason::NoCandidatesLeft) => {
                    num_no_candidates_left += 1
                }
                GameStatus::InProgress => {}
            }
        }

        let mut num_games_per_num_guesses = BTreeMap::new();
        for num_guesses in &num_guesses_per_game {
            *num_games_per_num_guesses.entry(*num_guesses).or_insert(0) += 1;
        }

        let (mean_guesses, std_dev_guesses) = if num_guesses_per_game.is_empty() {
            (None, None)
        } else {
            let count = num_guesses_per_game.len() as f64;
            let mean = num_guesses_per_game.iter().sum::<usize>() as f64 / count;
            let variance = num_guesses_per_game
                .iter()
                .map(|num_guesses| (*num_guesses as f64 - mean).powi(2))
                .sum::<f64>()
                / count;
            (Some(mean), Some(variance.sqrt()))
        };

        SimulationSummary {
            num_games,
            num_solved: num_guesses_per_game.len(),
            num_games_per_num_guesses,
            num_exhausted_budget,
            num_no_candidates_left,
            mean_guesses,
            std_dev_guesses,
        }
    }

    /// The percentage of games that were solved, from 0 to 100.
    pub fn win_percentage(&self) -> f64 {
        if self.num_games == 0 {
            return 0.0;
        }
        100.0 * self.num_solved as f64 / self.num_games as f64
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Won {}/{} ({:.2} %)",
            self.num_solved,
            self.num_games,
            self.win_percentage()
        )?;
        writeln!(f)?;
        writeln!(f, "|Num guesses|Num games|")?;
        writeln!(f, "|-----------|---------|")?;
        for (num_guesses, num_games) in &self.num_games_per_num_guesses {
            writeln!(f, "|{}|{}|", num_guesses, num_games)?;
        }
        if self.num_exhausted_budget > 0 {
            writeln!(f, "|ran out of guesses|{}|", self.num_exhausted_budget)?;
        }
        if self.num_no_candidates_left > 0 {
            writeln!(f, "|no candidates left|{}|", self.num_no_candidates_left)?;
        }
        if let (Some(mean), Some(std_dev)) = (self.mean_guesses, self.std_dev_guesses) {
            writeln!(f)?;
            write!(
                f,
                "**Average number of guesses:** {:.2} +/- {:.2}",
                mean, std_dev
            )?;
        }
        Ok(())
    }
}
