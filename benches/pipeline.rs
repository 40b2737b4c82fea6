use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use meld_prep::{
    EmbeddingTable, Preprocessor, SentenceVectorizer, StopWords, TextCleaner, Tokenizer,
    UtteranceRow,
};

const LINES: &[&str] = &[
    "Oh my God, he's lost it. He's totally lost it.",
    "Happy birthday, Monica! We got you the biggest cake ever!!",
    "No, no, no. That is a terrible, terrible idea...",
    "So, like, what are we supposed to do now?",
    "I can't believe you'd do this to me, Ross.",
];

const SENTIMENTS: &[&str] = &["negative", "positive", "negative", "neutral", "surprise"];

fn corpus(rows: usize) -> Vec<UtteranceRow> {
    (0..rows)
        .map(|i| {
            UtteranceRow::new(
                UtteranceRow::file_key((i / 10) as u32, (i % 10) as u32),
                LINES[i % LINES.len()],
                SENTIMENTS[i % SENTIMENTS.len()],
            )
        })
        .collect()
}

fn table() -> Arc<EmbeddingTable> {
    let words = [
        "god", "lost", "totally", "happy", "birthday", "monica", "got", "biggest", "cake", "ever",
        "terrible", "idea", "like", "supposed", "believe", "ross",
    ];
    let pairs = words.iter().enumerate().map(|(i, word)| {
        let vector: Vec<f32> = (0..100).map(|d| ((i * 31 + d) % 17) as f32 / 17.0).collect();
        (*word, vector)
    });
    match EmbeddingTable::from_pairs(100, pairs) {
        Ok(table) => Arc::new(table),
        Err(err) => panic!("bench table: {err}"),
    }
}

fn prepare_bench(c: &mut Criterion) {
    let rows = corpus(2_000);
    let sequential = Preprocessor::new(TextCleaner::new(StopWords::english()));
    let parallel = sequential.clone().with_parallel(true);

    c.bench_function("prepare_2000_rows", |b| {
        b.iter(|| black_box(sequential.prepare("train", black_box(&rows))));
    });
    c.bench_function("prepare_2000_rows_parallel", |b| {
        b.iter(|| black_box(parallel.prepare("train", black_box(&rows))));
    });
}

fn encode_vectorize_bench(c: &mut Criterion) {
    let pre = Preprocessor::new(TextCleaner::new(StopWords::english()));
    let split = pre.prepare("train", &corpus(2_000));
    let vocab = pre.build_vocabulary(&split, Tokenizer::Word);
    let vectorizer = SentenceVectorizer::new(table());

    c.bench_function("encode_2000_rows", |b| {
        b.iter(|| black_box(pre.encode(black_box(&split), &vocab)));
    });
    c.bench_function("vectorize_2000_rows_d100", |b| {
        b.iter(|| black_box(pre.vectorize(black_box(&split), &vectorizer)));
    });
}

criterion_group!(benches, prepare_bench, encode_vectorize_bench);
criterion_main!(benches);
