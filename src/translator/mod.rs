// Sentence-level Pig Latin translation with configurable character classes.
// The word-level scan/emit loop lives in the `word` submodule.

use anyhow::{bail, Result};

mod word;

/// Character classes steering word scanning and transformation
#[derive(Debug, Clone)]
pub struct TranslationRules {
    /// Punctuation characters that terminate a word like whitespace does
    pub separator_punctuation: Vec<char>,
    /// Letters treated as vowels for rotation and suffix choice
    pub vowels: Vec<char>,
    /// Non-alphabetic characters still allowed inside a word
    pub word_connectors: Vec<char>,
}

impl Default for TranslationRules {
    fn default() -> Self {
        Self {
            separator_punctuation: vec![
                '"', '/', '\\', '!', '?', ',', '.', ':', ';', '[', ']', '(', ')', '{', '}', '&',
            ],
            vowels: vec!['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'],
            word_connectors: vec!['\'', '-'],
        }
    }
}

impl TranslationRules {
    /// Whitespace and the fixed punctuation set end the current word
    pub(crate) fn is_separator(&self, letter: char) -> bool {
        letter.is_whitespace() || self.separator_punctuation.contains(&letter)
    }

    pub(crate) fn is_vowel(&self, letter: char) -> bool {
        self.vowels.contains(&letter)
    }

    /// A-Z, a-z, and the connector characters may appear inside a word;
    /// anything else contaminates it
    pub(crate) fn is_word_char(&self, letter: char) -> bool {
        letter.is_ascii_alphabetic() || self.word_connectors.contains(&letter)
    }
}

// Worst-case output growth per input character: a lone vowel becomes four
// characters ("a" -> "away"), and alternating one-letter words with
// separators stay below 2.5x overall.
const OUTPUT_CAPACITY_FACTOR: usize = 4;

/// Sentence translator with dual cursors over a pre-sized output buffer
pub struct SentenceTranslator {
    rules: TranslationRules,
}

impl SentenceTranslator {
    /// Create new translator with custom rules
    pub fn new(rules: TranslationRules) -> Self {
        Self { rules }
    }

    /// Create translator with the default rule set
    pub fn with_default_rules() -> Self {
        Self::new(TranslationRules::default())
    }

    /// Translate one sentence word by word, preserving casing, punctuation
    /// placement, and whitespace layout. Words containing characters other
    /// than Latin letters, apostrophes, or hyphens pass through verbatim.
    ///
    /// Empty input is the single recoverable failure; interactive callers
    /// re-prompt on it.
    pub fn translate_sentence(&self, input: &str) -> Result<String> {
        if input.is_empty() {
            bail!("conversion not possible: empty input");
        }

        let source: Vec<char> = input.chars().collect();
        // The buffer must never grow mid-conversion; the factor covers the
        // worst case with room to spare.
        let mut output = String::with_capacity(OUTPUT_CAPACITY_FACTOR * input.len());

        let mut read = 0;
        while read < source.len() {
            read = word::transduce_word(&source, read, &mut output, &self.rules);
        }

        debug_assert!(output.len() <= OUTPUT_CAPACITY_FACTOR * input.len());

        Ok(output)
    }
}
