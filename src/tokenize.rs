//! Tokenization of message bodies into words and emoji glyphs.

use regex::Regex;
use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

use crate::error::Result;

/// Word and emoji occurrences extracted from one message body.
#[derive(Debug, Default, Clone)]
pub struct TokenClasses {
    /// Lower-cased alphabetic words, punctuation stripped, length > 1
    pub words: Vec<String>,
    /// Emoji glyphs, one entry per occurrence
    pub emojis: Vec<String>,
}

/// Splits message bodies into alphabetic words and emoji glyphs.
///
/// Holds the compiled emoji pattern and the English stopword set so they are
/// built once and shared across the whole scan.
pub struct Tokenizer {
    emoji_regex: Regex,
    stopwords: HashSet<String>,
}

impl Tokenizer {
    /// Create a tokenizer with compiled patterns and the English stopword set.
    pub fn new() -> Result<Self> {
        let emoji_regex = Regex::new(r"\p{Emoji_Presentation}")?;

        let stopwords: HashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(ToString::to_string)
            .collect();

        Ok(Self {
            emoji_regex,
            stopwords,
        })
    }

    /// Classify one message body into word and emoji occurrences.
    ///
    /// The body is split on single spaces. Each raw token is stripped down to
    /// its ASCII letters and lower-cased; the result counts as a word only
    /// when more than one character survives, so single-letter words such as
    /// "I" are dropped by design. Each raw token is also scanned for emoji
    /// glyphs independently of how its word form came out, and a token can
    /// contribute several glyph occurrences.
    #[must_use]
    pub fn classify(&self, body: &str) -> TokenClasses {
        let mut classes = TokenClasses::default();

        for token in body.split(' ') {
            let stripped: String = token
                .chars()
                .filter(char::is_ascii_alphabetic)
                .collect::<String>()
                .to_ascii_lowercase();

            if stripped.len() > 1 {
                classes.words.push(stripped);
            }

            for glyph in self.emoji_regex.find_iter(token) {
                classes.emojis.push(glyph.as_str().to_string());
            }
        }

        classes
    }

    /// The stopword set excluded from the word-frequency ranking.
    #[must_use]
    pub fn stopwords(&self) -> &HashSet<String> {
        &self.stopwords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_filter_drops_single_letters() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let classes = tokenizer.classify("Hi I am ok!!");

        assert_eq!(classes.words, vec!["hi", "am", "ok"]);
    }

    #[test]
    fn test_punctuation_and_case_are_stripped() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let classes = tokenizer.classify("Hello, WORLD...");

        assert_eq!(classes.words, vec!["hello", "world"]);
    }

    #[test]
    fn test_two_glyphs_in_one_token() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let classes = tokenizer.classify("nice 😀🎉");

        assert_eq!(classes.emojis, vec!["😀", "🎉"]);
        // The emoji token leaves no alphabetic word behind.
        assert_eq!(classes.words, vec!["nice"]);
    }

    #[test]
    fn test_repeated_glyphs_count_each_occurrence() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        let classes = tokenizer.classify("😀😀 and 😀");

        assert_eq!(classes.emojis.len(), 3);
    }

    #[test]
    fn test_stopword_set_is_populated() {
        let tokenizer = Tokenizer::new().expect("Failed to create tokenizer");
        assert!(tokenizer.stopwords().contains("the"));
    }
}
