use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phone_analysis::analysis::phone::tokenizer::PhoneTokenizer;
use phone_analysis::core::config::PhoneConfig;

const NUMBERS: &[&str] = &[
    "1-714-803-5949",
    "714-803-5949",
    "(714)803-5949",
    "7148035949@example.com",
    "+1 (323) 842-4386",
    "551697694",
    "abc-def",
];

/// Benchmark single full-token generation
fn bench_generate(c: &mut Criterion) {
    let tokenizer = PhoneTokenizer::new(PhoneConfig::default());

    c.bench_function("phone_generate", |b| {
        b.iter(|| {
            for number in NUMBERS {
                black_box(tokenizer.generate(black_box(number)));
            }
        });
    });
}

/// Benchmark prefix enumeration
fn bench_generate_ngrams(c: &mut Criterion) {
    let tokenizer = PhoneTokenizer::new(PhoneConfig::default().with_ngrams());

    c.bench_function("phone_generate_ngrams", |b| {
        b.iter(|| {
            for number in NUMBERS {
                black_box(tokenizer.generate(black_box(number)));
            }
        });
    });
}

criterion_group!(benches, bench_generate, bench_generate_ngrams);
criterion_main!(benches);
