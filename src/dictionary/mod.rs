//! Dictionary capability
//!
//! Recognizing real words is an external concern. The validator only depends on the
//! `Dictionary` trait, so tests and front ends can plug in any word source.

mod word_set;

pub use word_set::WordSetDictionary;

use std::fmt;

/// Language tag a dictionary answers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language(&'static str);

impl Language {
    /// English, the only language the bundled dictionary covers
    pub const ENGLISH: Self = Self("en");

    /// The BCP 47 style tag, e.g. `"en"`
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that can tell whether a word is real
pub trait Dictionary {
    /// Whether `word` is a recognized word in `language`
    ///
    /// `word` is already normalized to lowercase.
    fn is_recognized_word(&self, word: &str, language: Language) -> bool;

    /// Every word the dictionary knows, if it can enumerate them
    ///
    /// Lookup-only services return an empty slice; hint counts are then zero.
    fn vocabulary(&self) -> &[String] {
        &[]
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_recognized_word(&self, word: &str, language: Language) -> bool {
        (**self).is_recognized_word(word, language)
    }

    fn vocabulary(&self) -> &[String] {
        (**self).vocabulary()
    }
}
