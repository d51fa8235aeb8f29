//! In-memory dictionary backed by a word list

use super::{Dictionary, Language};
use crate::error::Result;
use crate::wordlists::{DICTIONARY, loader};
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::info;

/// A dictionary that recognizes exactly the words it was built from
#[derive(Debug, Clone)]
pub struct WordSetDictionary {
    language: Language,
    words: Vec<String>,
    lookup: FxHashSet<String>,
}

impl WordSetDictionary {
    /// Build a dictionary from already normalized words
    ///
    /// Duplicates are dropped; the first occurrence keeps its position.
    pub fn from_words<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lookup = FxHashSet::default();
        let mut ordered = Vec::new();

        for word in words {
            let word = word.into();
            if lookup.insert(word.clone()) {
                ordered.push(word);
            }
        }

        Self {
            language,
            words: ordered,
            lookup,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(Language::ENGLISH, loader::words_from_slice(DICTIONARY))
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the file is missing, unreadable, or has no words.
    pub fn from_file<P: AsRef<Path>>(language: Language, path: P) -> Result<Self> {
        let words = loader::load_from_file(&path)?;
        let dictionary = Self::from_words(language, words);
        info!(
            "Dictionary ready: {} {} words",
            dictionary.len(),
            dictionary.language
        );
        Ok(dictionary)
    }

    /// Language this dictionary answers for
    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordSetDictionary {
    fn is_recognized_word(&self, word: &str, language: Language) -> bool {
        language == self.language && self.lookup.contains(word)
    }

    fn vocabulary(&self) -> &[String] {
        &self.words
    }
}
