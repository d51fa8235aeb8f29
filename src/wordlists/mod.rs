//! Word lists for Word Scramble
//!
//! Root words and the default dictionary are embedded in the binary; either can be
//! replaced by a newline-delimited file at startup.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        for &word in START_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        // Every root word must itself be a real word
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Root word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn silkworm_is_available() {
        assert!(START_WORDS.contains(&"silkworm"));
        assert!(DICTIONARY.contains(&"silk"));
    }
}
