use std::error::Error;
use std::sync::Arc;

use meld_prep::{
    ensure_same_tokenizer, load_embeddings, EmbeddingTable, PrepConfig, Preprocessor,
    SentenceVectorizer, UtteranceRow,
};

const SAMPLE_TRAIN: &[(u32, u32, &str, &str)] = &[
    (0, 0, "Oh my God, he's lost it. He's totally lost it.", "negative"),
    (0, 1, "What?", "neutral"),
    (0, 2, "I am SO happy!!", "positive"),
    (1, 0, "Happy birthday, Monica!", "positive"),
    (1, 1, "to a an", "neutral"),
    (1, 2, "That cake was a terrible idea.", "surprise"),
];

const SAMPLE_DEV: &[(u32, u32, &str, &str)] = &[
    (2, 0, "Great birthday cake!", "positive"),
    (2, 1, "That is terrible news.", "negative"),
];

fn rows(sample: &[(u32, u32, &str, &str)]) -> Vec<UtteranceRow> {
    sample
        .iter()
        .map(|(dialogue, utterance, text, sentiment)| {
            UtteranceRow::new(UtteranceRow::file_key(*dialogue, *utterance), *text, *sentiment)
        })
        .collect()
}

fn demo_table() -> Result<Arc<EmbeddingTable>, Box<dyn Error>> {
    let table = EmbeddingTable::from_pairs(
        4,
        [
            ("happy", [0.1f32, 0.2, 0.0, 0.3]),
            ("birthday", [0.4, 0.1, 0.2, 0.0]),
            ("cake", [0.3, 0.7, 0.1, 0.1]),
            ("terrible", [-0.6, -0.2, 0.1, 0.0]),
            ("great", [0.5, 0.3, 0.0, 0.2]),
            ("god", [0.0, 0.1, 0.5, 0.1]),
        ],
    )?;
    Ok(Arc::new(table))
}

/// Runs the bundled sample rows through the pipeline and prints the outputs
/// as JSON. An optional YAML config path may be given as the first argument.
fn main() -> Result<(), Box<dyn Error>> {
    let log_level = std::env::var("MELD_PREP_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level.as_str())
        .with_target(false)
        .json()
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PrepConfig::from_file(path)?,
        None => PrepConfig::default(),
    };

    let preprocessor = Preprocessor::from_config(&config)?;
    let train = preprocessor.prepare("train", &rows(SAMPLE_TRAIN));
    let dev = preprocessor.prepare("dev", &rows(SAMPLE_DEV));

    let vocab = preprocessor.build_vocabulary(&train, config.vocabulary.tokenizer);
    let table = match &config.embeddings {
        Some(embeddings) => load_embeddings(embeddings)?,
        None => demo_table()?,
    };
    let vectorizer = SentenceVectorizer::with_config(table, config.vectorizer);
    ensure_same_tokenizer(&vocab, &vectorizer)?;

    let encoded_dev = preprocessor.encode(&dev, &vocab);
    let features_dev = preprocessor.vectorize(&dev, &vectorizer);

    println!("{}", serde_json::to_string_pretty(&train.report)?);
    println!("{}", serde_json::to_string_pretty(&vocab)?);
    println!("{}", serde_json::to_string_pretty(&encoded_dev)?);
    println!("{}", serde_json::to_string_pretty(&features_dev)?);

    for (batch, labels) in encoded_dev.batches(config.pipeline.batch_size, config.pipeline.max_seq_len) {
        println!("batch width={} ids={:?} labels={:?}", batch.width, batch.ids, labels);
    }

    Ok(())
}
