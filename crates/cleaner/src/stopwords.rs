//! Stop-word sets.
//!
//! The cleaner only needs membership tests, so [`StopWords`] is a thin
//! wrapper over an `FxHashSet`. The built-in English list is the one shipped
//! by the `stop-words` package the MELD experiments were prepared with.

use fxhash::FxHashSet;

use crate::error::CleanerError;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's",
    "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own",
    "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some",
    "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then",
    "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this",
    "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we",
    "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's",
    "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with",
    "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// A set of words excluded from cleaned text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    /// An empty set; nothing is treated as a stop word.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in English list.
    pub fn english() -> Self {
        ENGLISH.iter().copied().collect()
    }

    /// Looks up a built-in list by language code. `"none"` yields an empty set.
    pub fn for_language(language: &str) -> Result<Self, CleanerError> {
        match language.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::english()),
            "none" | "" => Ok(Self::empty()),
            other => Err(CleanerError::UnsupportedLanguage(other.to_string())),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for StopWords {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_has_common_words() {
        let words = StopWords::english();
        for w in ["i", "am", "so", "the", "to", "a", "an", "you're"] {
            assert!(words.contains(w), "missing {w}");
        }
        assert!(!words.contains("happy"));
        assert_eq!(words.len(), ENGLISH.len());
    }

    #[test]
    fn language_lookup() {
        assert_eq!(StopWords::for_language("EN").unwrap(), StopWords::english());
        assert!(StopWords::for_language("none").unwrap().is_empty());
        assert_eq!(
            StopWords::for_language("xx"),
            Err(CleanerError::UnsupportedLanguage("xx".into()))
        );
    }

    #[test]
    fn extend_adds_custom_words() {
        let mut words = StopWords::empty();
        words.extend(["yeah", "uh"]);
        assert!(words.insert("hmm"));
        assert!(!words.insert("uh"));
        assert_eq!(words.len(), 3);
    }
}
