use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_autoplay::scorers::*;
use wordle_autoplay::*;

const WORDS: &str = include_str!("../../data/sample-words.txt");

fn load_bank() -> WordBank {
    WordBank::from_reader(WORDS.as_bytes()).expect("sample words are valid")
}

fn bench_evaluate(c: &mut Criterion) {
    let bank = load_bank();
    c.bench_function("evaluate every pair", |b| {
        b.iter(|| {
            let mut num_solved = 0;
            for guess in bank.iter() {
                for secret in bank.iter() {
                    if evaluate(black_box(guess), black_box(secret)).is_solved() {
                        num_solved += 1;
                    }
                }
            }
            num_solved
        })
    });
}

fn bench_filter(c: &mut Criterion) {
    let bank = load_bank();
    let candidates = CandidateSet::from_bank(&bank);
    let guess = Word::new("crane").unwrap();
    let feedback = evaluate(&guess, &Word::new("slate").unwrap());
    c.bench_function("filter full bank", |b| {
        b.iter(|| candidates.filter(black_box(&guess), black_box(&feedback)))
    });
}

fn bench_play_all_words(c: &mut Criterion) {
    let bank = load_bank();
    let frequency = MaxScoreSelector::new(LetterFrequencyScorer::default());
    let eliminations =
        MaxScoreSelector::new(MaxEliminationsScorer::new(&bank, PartitionMetric::ExpectedSize));

    c.bench_function("play all words, letter frequency", |b| {
        b.iter(|| play_games(&bank, &bank, &frequency, DEFAULT_MAX_TURNS).unwrap())
    });
    c.bench_function("play all words, expected eliminations", |b| {
        b.iter(|| play_games(&bank, &bank, &eliminations, DEFAULT_MAX_TURNS).unwrap())
    });
}

fn bench_first_turn_precomputation(c: &mut Criterion) {
    let bank = load_bank();
    c.bench_function("precompute first turn", |b| {
        b.iter(|| MaxEliminationsScorer::new(black_box(&bank), PartitionMetric::ExpectedSize))
    });
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_filter,
    bench_play_all_words,
    bench_first_turn_precomputation
);
criterion_main!(benches);
