//! Utterance cleaning layer.
//!
//! Turns raw MELD utterances into a small, predictable alphabet that the
//! vocabulary and embedding stages can rely on.
//!
//! ## What we do
//!
//! - Optional Unicode NFKC normalization
//! - Lowercasing
//! - Optional Latin-1 → Windows-1252 round trip for mis-decoded transcripts
//! - Character filtering down to `[a-z0-9 .,!?-]` plus whitespace
//! - Stop-word and short-token removal
//! - One shared [`Tokenizer`] rule for every downstream stage
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text, stop words and
//! config in, same [`CleanedText`] out.
//!
//! ## Filtering to nothing is not an error
//!
//! An utterance made only of stop words, single characters or symbols cleans
//! to `None`. That row is meant to be excluded from the dataset, not kept as
//! an empty string.
//!
//! ```rust
//! use cleaner::{StopWords, TextCleaner};
//!
//! let cleaner = TextCleaner::new(StopWords::english());
//! assert_eq!(cleaner.clean("I am SO happy!!").unwrap().as_str(), "happy!!");
//! assert!(cleaner.clean("to a an").is_none());
//! ```

mod config;
mod error;
mod pipeline;
mod recode;
mod stopwords;
mod text;
mod token;

pub use crate::config::CleanerConfig;
pub use crate::error::CleanerError;
pub use crate::pipeline::TextCleaner;
pub use crate::recode::latin1_to_cp1252;
pub use crate::stopwords::StopWords;
pub use crate::text::CleanedText;
pub use crate::token::Tokenizer;

#[cfg(test)]
mod tests {
    use super::*;

    fn small_stop_list() -> StopWords {
        ["i", "am", "so", "to", "a", "an"].into_iter().collect()
    }

    fn is_clean_alphabet(text: &str) -> bool {
        text.chars().all(|c| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '.' | ',' | '!' | '?' | '-')
        })
    }

    #[test]
    fn stop_words_and_case_removed() {
        let cleaner = TextCleaner::new(small_stop_list());
        let out = cleaner.clean("I am SO happy!!").expect("something survives");
        assert_eq!(out.as_str(), "happy!!");
    }

    #[test]
    fn only_stop_words_cleans_to_none() {
        let cleaner = TextCleaner::new(small_stop_list());
        assert_eq!(cleaner.clean("to a an"), None);
        assert_eq!(cleaner.clean("I  x  y  am"), None);
        assert_eq!(cleaner.clean(""), None);
        assert_eq!(cleaner.clean("   \n\t "), None);
    }

    #[test]
    fn special_characters_removed() {
        let cleaner = TextCleaner::new(StopWords::empty());
        let out = cleaner
            .clean("Wh@t's   up, Ross?! #friends (2004) caf\u{e9}")
            .expect("cleaned");
        assert_eq!(out.as_str(), "whts up, ross?! friends 2004 caf");
        assert!(is_clean_alphabet(out.as_str()));
    }

    #[test]
    fn output_alphabet_is_restricted() {
        let cleaner = TextCleaner::new(StopWords::english());
        let inputs = [
            "Hey... HEY! Joey\u{2019}s \u{1f600} PIZZA",
            "\u{0130}stanbul IS far -- isn't it?",
            "Ünïcödé ﬁne STUFF\u{85}here",
            "tabs\tand\nnewlines\r\nhere",
        ];
        for input in inputs {
            if let Some(out) = cleaner.clean(input) {
                assert!(is_clean_alphabet(out.as_str()), "bad output {out:?} for {input:?}");
                assert!(!out.as_str().contains("  "));
                assert_eq!(out.as_str().trim(), out.as_str());
            }
        }
    }

    #[test]
    fn single_characters_dropped() {
        let cleaner = TextCleaner::new(StopWords::empty());
        let out = cleaner.clean("b c ok d no").expect("cleaned");
        assert_eq!(out.as_str(), "ok no");
    }

    #[test]
    fn min_token_len_is_configurable() {
        let cfg = CleanerConfig {
            min_token_len: 3,
            ..Default::default()
        };
        let cleaner = TextCleaner::with_config(StopWords::empty(), cfg).expect("valid");
        assert_eq!(cleaner.clean("ok no yes").unwrap().as_str(), "yes");

        let cfg = CleanerConfig {
            min_token_len: 1,
            ..Default::default()
        };
        let cleaner = TextCleaner::with_config(StopWords::empty(), cfg).expect("valid");
        assert_eq!(cleaner.clean("a b").unwrap().as_str(), "a b");
    }

    #[test]
    fn legacy_recode_changes_c1_boundaries() {
        // U+0085 is whitespace; its cp1252 reading (an ellipsis) is filtered out.
        let plain = TextCleaner::new(StopWords::empty());
        assert_eq!(plain.clean("great\u{85}film").unwrap().as_str(), "great film");

        let cfg = CleanerConfig {
            legacy_recode: true,
            ..Default::default()
        };
        let recoding = TextCleaner::with_config(StopWords::empty(), cfg).expect("valid");
        assert_eq!(recoding.clean("great\u{85}film").unwrap().as_str(), "greatfilm");
    }

    #[test]
    fn legacy_recode_failure_keeps_text() {
        let cfg = CleanerConfig {
            legacy_recode: true,
            ..Default::default()
        };
        let cleaner = TextCleaner::with_config(StopWords::empty(), cfg).expect("valid");
        // The CJK char makes the Latin-1 step impossible, so U+0085 stays whitespace.
        assert_eq!(
            cleaner.clean("great\u{85}film \u{4e16}").unwrap().as_str(),
            "great film"
        );
    }

    #[test]
    fn nfkc_rescues_compatibility_forms() {
        let plain = TextCleaner::new(StopWords::empty());
        assert_eq!(plain.clean("\u{ff27}\u{ff32}\u{ff25}\u{ff21}\u{ff34}"), None);

        let cfg = CleanerConfig {
            normalize_unicode: true,
            ..Default::default()
        };
        let cleaner = TextCleaner::with_config(StopWords::empty(), cfg).expect("valid");
        assert_eq!(
            cleaner
                .clean("\u{ff27}\u{ff32}\u{ff25}\u{ff21}\u{ff34}")
                .unwrap()
                .as_str(),
            "great"
        );
    }

    #[test]
    fn from_config_merges_extra_stop_words() {
        let cfg = CleanerConfig {
            extra_stop_words: vec!["yeah".into()],
            ..Default::default()
        };
        let cleaner = TextCleaner::from_config(&cfg).expect("valid");
        assert_eq!(cleaner.clean("yeah the coffee").unwrap().as_str(), "coffee");
    }

    #[test]
    fn from_config_rejects_unknown_language() {
        let cfg = CleanerConfig {
            stop_word_language: "klingon".into(),
            ..Default::default()
        };
        assert!(matches!(
            TextCleaner::from_config(&cfg),
            Err(CleanerError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn cleaning_is_deterministic() {
        let cleaner = TextCleaner::new(StopWords::english());
        let input = "Well, I don't KNOW... maybe we should go?";
        assert_eq!(cleaner.clean(input), cleaner.clean(input));
    }
}
