use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fs::File;
use std::io;
use std::io::Write;
use std::time::Instant;
use wordle_autoplay::*;

/// Plays Wordle automatically, where the computer guesses the word.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// The maximum number of guesses per game.
    #[clap(short = 'n', long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// How to choose each guess.
    #[clap(short, long, value_enum, default_value_t = Policy::ExpectedEliminations)]
    policy: Policy,

    #[clap(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Policy {
    /// Prefer words whose letters are common among the remaining words.
    LetterFrequency,
    /// Minimize the expected number of remaining words.
    ExpectedEliminations,
    /// Minimize the largest number of remaining words.
    WorstCaseEliminations,
}

impl From<Policy> for ScoringPolicy {
    fn from(policy: Policy) -> ScoringPolicy {
        match policy {
            Policy::LetterFrequency => ScoringPolicy::LetterFrequency,
            Policy::ExpectedEliminations => ScoringPolicy::ExpectedEliminations,
            Policy::WorstCaseEliminations => ScoringPolicy::WorstCaseEliminations,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve every word in the words file and print the results.
    Benchmark,
    /// Run a single game with the given word.
    Single { word: String },
    /// Run games against words chosen at random from the words file.
    Simulate {
        /// The number of games to play.
        #[clap(short, long, default_value_t = 100)]
        games: usize,
        /// Seed for choosing the words, for repeatable runs.
        #[clap(short, long)]
        seed: Option<u64>,
    },
    /// Run an interactive game against the solver.
    Interactive,
}

fn main() -> Result<(), WordleError> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();
    println!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let word_bank = WordBank::from_reader(words_reader)?;
    println!("There are {} possible words.", word_bank.len());

    let config = SolverConfig {
        max_turns: args.max_turns,
        policy: args.policy.into(),
    };
    info!("using {:?}", config);
    let selector = config.build_selector(&word_bank);

    match args.command {
        Command::Benchmark => run_benchmark(&word_bank, &word_bank, &selector, &config)?,
        Command::Single { word } => {
            play_single_game(&Word::new(&word)?, &word_bank, &selector, &config)?
        }
        Command::Simulate { games, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let secrets: Vec<Word> = (0..games)
                .filter_map(|_| word_bank.choose(&mut rng).copied())
                .collect();
            run_benchmark(&secrets, &word_bank, &selector, &config)?
        }
        Command::Interactive => play_interactive_game(&word_bank, &selector, &config)?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_benchmark(
    secrets: &[Word],
    word_bank: &WordBank,
    selector: &PolicySelector,
    config: &SolverConfig,
) -> Result<(), WordleError> {
    let reports = play_games(secrets, word_bank, selector, config.max_turns)?;
    for (secret, report) in secrets.iter().zip(&reports) {
        if report.solved_in().is_none() {
            warn!("{}: {}", secret, report.status);
        }
    }
    println!("Played {} games. Results:\n", reports.len());
    println!("{}", SimulationSummary::from_reports(&reports));
    Ok(())
}

fn play_single_game(
    word: &Word,
    word_bank: &WordBank,
    selector: &PolicySelector,
    config: &SolverConfig,
) -> Result<(), WordleError> {
    if !word_bank.contains(word) {
        warn!("{} is not in the word list", word);
    }
    let report = play_game(word, word_bank, selector, config.max_turns)?;
    match report.status {
        GameStatus::Solved { turns } => println!("Solved it! It took me {} guesses.", turns),
        GameStatus::Failed(FailureReason::ExhaustedBudget) => println!(
            "I still couldn't solve it after {} guesses :(",
            report.history.len()
        ),
        GameStatus::Failed(FailureReason::NoCandidatesLeft) => {
            println!("No word in the word list matches. Is it in the list?")
        }
        GameStatus::InProgress => {}
    }
    for guess_result in report.history.iter() {
        println!("\t{}", guess_result);
    }
    Ok(())
}

/// Asks a person for the feedback to each guess.
struct StdinOracle;

impl Oracle for StdinOracle {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, WordleError> {
        println!("I'm guessing: {}. How did I do?", guess);
        loop {
            print!("> ");
            io::stdout().flush()?;
            let mut buffer = String::new();
            if io::stdin().read_line(&mut buffer)? == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no more input").into());
            }
            match buffer.parse::<Feedback>() {
                Ok(feedback) => return Ok(feedback),
                Err(error) => println!("{}. Try again.", error),
            }
        }
    }
}

fn play_interactive_game(
    word_bank: &WordBank,
    selector: &PolicySelector,
    config: &SolverConfig,
) -> Result<(), WordleError> {
    let mut oracle = StdinOracle;
    let mut solver = config.new_solver(word_bank, selector);
    println!("Choose a word from the word-list. Press enter once you've chosen.");

    {
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
    }

    println!(
        "I will now try to guess your word.\n\n\
         For each guess, enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         For example, if your word was \"spade\" and the guess was \"soapy\", you would enter \"g.gy.\""
    );

    while !solver.status().is_terminal() {
        let top_guesses = solver
            .selector()
            .rank(solver.candidates(), solver.turn_index(), 3);
        println!(
            "{} words left. Top guesses: {}",
            solver.candidates().len(),
            top_guesses
                .iter()
                .map(|scored| format!("{} ({})", scored.word, scored.score))
                .collect::<Vec<String>>()
                .join(", ")
        );
        solver.step(&mut oracle)?;
    }

    match solver.status() {
        GameStatus::Solved { turns } => println!("I did it! It took me {} guesses.", turns),
        GameStatus::Failed(FailureReason::NoCandidatesLeft) => {
            println!("No word in my list matches that feedback. Was there a typo?")
        }
        _ => println!("I couldn't guess it :("),
    }

    Ok(())
}
