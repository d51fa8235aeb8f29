//! Root word representation
//!
//! A `RootWord` is the fixed word whose letters constrain every submission in a session.

use std::fmt;

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Root word must not be empty"),
            Self::InvalidCharacters => write!(f, "Root word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Normalize raw player input into a candidate word
///
/// Trims surrounding whitespace and lowercases the rest. The result may be empty.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// The lowercase word a session is built around
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootWord {
    text: String,
}

impl RootWord {
    /// Create a root word from raw text
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text is empty or contains anything
    /// other than alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" SilkWorm ").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("").is_err());
    /// assert!(RootWord::new("silk worm").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; a root word is never empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The letters of the word, in order, one entry per occurrence
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.text.chars().collect()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
