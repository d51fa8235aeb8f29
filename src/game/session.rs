//! Per-game state

use crate::core::RootWord;

/// One game: a root word and the words found for it so far
///
/// Used words are kept most recent first. The list only grows until the session is
/// replaced by a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: RootWord,
    used_words: Vec<String>,
}

impl Session {
    #[must_use]
    pub const fn new(root: RootWord) -> Self {
        Self {
            root,
            used_words: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &RootWord {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Number of words found this session
    #[inline]
    #[must_use]
    pub fn words_found(&self) -> usize {
        self.used_words.len()
    }

    /// Total letters across all words found this session
    #[must_use]
    pub fn letters_found(&self) -> usize {
        self.used_words.iter().map(|w| w.chars().count()).sum()
    }

    pub(crate) fn record(&mut self, word: String) {
        self.used_words.insert(0, word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new(RootWord::new("silkworm").unwrap());
        assert_eq!(session.root().text(), "silkworm");
        assert!(session.used_words().is_empty());
        assert_eq!(session.words_found(), 0);
        assert_eq!(session.letters_found(), 0);
    }

    #[test]
    fn record_keeps_most_recent_first() {
        let mut session = Session::new(RootWord::new("silkworm").unwrap());
        session.record("silk".to_string());
        session.record("worm".to_string());
        session.record("milk".to_string());

        assert_eq!(session.used_words(), &["milk", "worm", "silk"]);
        assert_eq!(session.words_found(), 3);
        assert_eq!(session.letters_found(), 12);
    }
}
