use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Tokenization rule shared by every stage that splits cleaned text.
///
/// Vocabulary construction, sequence encoding and sentence vectorizing must
/// agree on token boundaries, otherwise a word seen during training can be
/// missed at encode time ("happy!!" vs "happy"). Each of those stages is
/// configured with one of these rules instead of splitting on its own.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tokenizer {
    /// Split on Unicode whitespace only. Punctuation stays attached
    /// (`"happy!!"` is one token).
    Whitespace,
    /// Split on Unicode word boundaries (UAX #29) and drop whitespace
    /// segments. Punctuation becomes its own token
    /// (`"happy!!"` → `"happy"`, `"!"`, `"!"`).
    #[default]
    Word,
}

impl Tokenizer {
    /// Splits `text` into borrowed tokens, in order.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokens(text).collect()
    }

    /// Lazy form of [`tokenize`](Self::tokenize).
    pub fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self {
            Tokenizer::Whitespace => Box::new(text.split_whitespace()),
            Tokenizer::Word => Box::new(
                text.split_word_bounds()
                    .filter(|segment| !segment.chars().all(char::is_whitespace)),
            ),
        }
    }

    /// Stable short name, used in vocabulary fingerprints.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tokenizer::Whitespace => "whitespace",
            Tokenizer::Word => "word",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_keeps_punctuation_attached() {
        let tokens = Tokenizer::Whitespace.tokenize("  happy!!  great\tfilm ");
        assert_eq!(tokens, vec!["happy!!", "great", "film"]);
    }

    #[test]
    fn word_splits_punctuation() {
        let tokens = Tokenizer::Word.tokenize("happy!! great film");
        assert_eq!(tokens, vec!["happy", "!", "!", "great", "film"]);
    }

    #[test]
    fn word_drops_whitespace_runs() {
        let tokens = Tokenizer::Word.tokenize("  oh   yes ");
        assert_eq!(tokens, vec!["oh", "yes"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(Tokenizer::Word.tokenize("").is_empty());
        assert!(Tokenizer::Whitespace.tokenize("   ").is_empty());
    }

    #[test]
    fn serde_names_are_snake_case() {
        let json = serde_json::to_string(&Tokenizer::Whitespace).unwrap();
        assert_eq!(json, "\"whitespace\"");
        let parsed: Tokenizer = serde_json::from_str("\"word\"").unwrap();
        assert_eq!(parsed, Tokenizer::Word);
    }
}
