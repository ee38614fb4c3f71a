use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wordle_hardmode::core::{Word, evaluate};
use wordle_hardmode::solver::{GuessSelector, SolutionSpace};
use wordle_hardmode::wordlists::loader::parse_word_list;

fn bench_select(c: &mut Criterion) {
    let dictionary = parse_word_list(include_str!("../data/sample_words.txt"));
    let selector = GuessSelector::new(None);

    c.bench_function("select_full_sample", |b| {
        let space = SolutionSpace::full(&dictionary);
        b.iter(|| selector.select(black_box(&space), true));
    });

    c.bench_function("select_after_slate", |b| {
        let guess = Word::new("slate").unwrap();
        let secret = Word::new("craze").unwrap();
        let space = SolutionSpace::full(&dictionary).filter(&guess, evaluate(&secret, &guess));
        b.iter(|| selector.select(black_box(&space), false));
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let dictionary = parse_word_list(include_str!("../data/sample_words.txt"));

    c.bench_function("evaluate_all_pairs", |b| {
        b.iter(|| {
            let mut perfect = 0;
            for secret in dictionary.words() {
                for guess in dictionary.words() {
                    if evaluate(black_box(secret), black_box(guess)).is_perfect() {
                        perfect += 1;
                    }
                }
            }
            perfect
        });
    });
}

criterion_group!(benches, bench_select, bench_evaluate);
criterion_main!(benches);
