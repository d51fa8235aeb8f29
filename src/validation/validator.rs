//! Submission validation
//!
//! Checks run in a fixed order and the first failure decides the reported reason:
//! non-empty, original, possible, real.

use super::rules::{is_original, is_possible};
use crate::core::RootWord;
use crate::dictionary::{Dictionary, Language};
use rayon::prelude::*;
use std::fmt;

/// Why a candidate was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing was typed; ignored without an alert
    EmptyInput,
    /// Already in the used words
    DuplicateWord,
    /// Needs letters the root word does not have
    ImpossibleWord,
    /// Shorter than the policy minimum
    TooShort { min: usize },
    /// Same as the root word while the policy forbids it
    RootWord,
    /// Unknown to the dictionary
    UnrecognizedWord,
}

impl Rejection {
    /// Short alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::EmptyInput => "Nothing entered",
            Self::DuplicateWord => "Word already used",
            Self::ImpossibleWord => "Word not possible",
            Self::TooShort { .. } => "Word too short",
            Self::RootWord => "That's the root word",
            Self::UnrecognizedWord => "Word not recognized",
        }
    }

    /// Explanation naming the rule that failed
    #[must_use]
    pub fn message(self, root: &RootWord) -> String {
        match self {
            Self::EmptyInput => "Type a word first.".to_string(),
            Self::DuplicateWord => "Be more original!".to_string(),
            Self::ImpossibleWord => format!("You can't spell that word from '{root}'!"),
            Self::TooShort { min } => format!("Words need at least {min} letters."),
            Self::RootWord => "You can't just repeat the root word!".to_string(),
            Self::UnrecognizedWord => "You can't just make them up, you know!".to_string(),
        }
    }

    /// Whether the front end should skip the alert entirely
    #[inline]
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::EmptyInput)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Outcome of validating one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Rules that sit on top of the three core checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Minimum number of letters a word needs
    pub min_length: usize,
    /// Whether playing the root word itself counts
    pub allow_root_word: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_length: 1,
            allow_root_word: true,
        }
    }
}

/// Decides whether a candidate may join the used words
///
/// Pure: it reads the root word and history it is handed and never mutates them.
#[derive(Debug, Clone)]
pub struct WordValidator<D> {
    dictionary: D,
    language: Language,
    policy: ValidationPolicy,
}

impl<D: Dictionary> WordValidator<D> {
    /// Create a validator with the default policy
    pub fn new(dictionary: D, language: Language) -> Self {
        Self::with_policy(dictionary, language, ValidationPolicy::default())
    }

    pub const fn with_policy(dictionary: D, language: Language, policy: ValidationPolicy) -> Self {
        Self {
            dictionary,
            language,
            policy,
        }
    }

    #[inline]
    #[must_use]
    pub const fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[inline]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Whether the dictionary knows `candidate`
    #[must_use]
    pub fn is_real(&self, candidate: &str) -> bool {
        !candidate.is_empty() && self.dictionary.is_recognized_word(candidate, self.language)
    }

    /// Validate a normalized candidate against the root word and used words
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    /// use word_scramble::dictionary::{Language, WordSetDictionary};
    /// use word_scramble::validation::{Rejection, Verdict, WordValidator};
    ///
    /// let dictionary = WordSetDictionary::from_words(Language::ENGLISH, ["silk", "worm"]);
    /// let validator = WordValidator::new(dictionary, Language::ENGLISH);
    /// let root = RootWord::new("silkworm").unwrap();
    ///
    /// assert_eq!(validator.validate("silk", &root, &[] as &[&str]), Verdict::Accepted);
    /// assert_eq!(
    ///     validator.validate("silk", &root, &["silk"]),
    ///     Verdict::Rejected(Rejection::DuplicateWord)
    /// );
    /// ```
    pub fn validate<S: AsRef<str>>(
        &self,
        candidate: &str,
        root: &RootWord,
        used_words: &[S],
    ) -> Verdict {
        match self.check(candidate, root, used_words) {
            Ok(()) => Verdict::Accepted,
            Err(rejection) => Verdict::Rejected(rejection),
        }
    }

    fn check<S: AsRef<str>>(
        &self,
        candidate: &str,
        root: &RootWord,
        used_words: &[S],
    ) -> Result<(), Rejection> {
        if candidate.is_empty() {
            return Err(Rejection::EmptyInput);
        }

        if !is_original(candidate, used_words) {
            return Err(Rejection::DuplicateWord);
        }

        if !is_possible(candidate, root) {
            return Err(Rejection::ImpossibleWord);
        }

        self.check_real(candidate, root)
    }

    // Policy checks belong to the real-word stage, ahead of the dictionary lookup
    fn check_real(&self, candidate: &str, root: &RootWord) -> Result<(), Rejection> {
        let min = self.policy.min_length;
        if candidate.chars().count() < min {
            return Err(Rejection::TooShort { min });
        }

        if !self.policy.allow_root_word && candidate == root.text() {
            return Err(Rejection::RootWord);
        }

        if !self.is_real(candidate) {
            return Err(Rejection::UnrecognizedWord);
        }

        Ok(())
    }
}

impl<D: Dictionary + Sync> WordValidator<D> {
    /// Dictionary words that would still be accepted for this root and history
    ///
    /// Scans the dictionary vocabulary in parallel. Returns nothing for
    /// dictionaries that cannot enumerate their words.
    pub fn derivable_words<S: AsRef<str> + Sync>(
        &self,
        root: &RootWord,
        used_words: &[S],
    ) -> Vec<&str> {
        self.dictionary
            .vocabulary()
            .par_iter()
            .map(String::as_str)
            .filter(|word| self.check(word, root, used_words).is_ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSetDictionary;

    fn setup_validator(policy: ValidationPolicy) -> WordValidator<WordSetDictionary> {
        let dictionary = WordSetDictionary::from_words(
            Language::ENGLISH,
            ["silk", "silkworm", "worm", "milk", "i", "silkworms", "zebra"],
        );
        WordValidator::with_policy(dictionary, Language::ENGLISH, policy)
    }

    fn silkworm() -> RootWord {
        RootWord::new("silkworm").unwrap()
    }

    const NO_WORDS: &[&str] = &[];

    #[test]
    fn accepts_real_possible_original_word() {
        let validator = setup_validator(ValidationPolicy::default());
        assert_eq!(
            validator.validate("silk", &silkworm(), NO_WORDS),
            Verdict::Accepted
        );
    }

    #[test]
    fn empty_input_rejected_silently() {
        let validator = setup_validator(ValidationPolicy::default());
        let verdict = validator.validate("", &silkworm(), NO_WORDS);
        assert_eq!(verdict, Verdict::Rejected(Rejection::EmptyInput));
        assert!(Rejection::EmptyInput.is_silent());
        assert!(!Rejection::DuplicateWord.is_silent());
    }

    #[test]
    fn duplicate_word_rejected() {
        let validator = setup_validator(ValidationPolicy::default());
        assert_eq!(
            validator.validate("silk", &silkworm(), &["silk"]),
            Verdict::Rejected(Rejection::DuplicateWord)
        );
    }

    #[test]
    fn impossible_word_rejected() {
        let validator = setup_validator(ValidationPolicy::default());
        // Real word, but needs a second 's'
        assert_eq!(
            validator.validate("silkworms", &silkworm(), NO_WORDS),
            Verdict::Rejected(Rejection::ImpossibleWord)
        );
        assert_eq!(
            validator.validate("zebra", &silkworm(), NO_WORDS),
            Verdict::Rejected(Rejection::ImpossibleWord)
        );
    }

    #[test]
    fn unrecognized_word_rejected() {
        let validator = setup_validator(ValidationPolicy::default());
        assert_eq!(
            validator.validate("wilk", &silkworm(), NO_WORDS),
            Verdict::Rejected(Rejection::UnrecognizedWord)
        );
    }

    #[test]
    fn duplicate_checked_before_possibility() {
        let validator = setup_validator(ValidationPolicy::default());
        // Both used and impossible: the duplicate check wins
        assert_eq!(
            validator.validate("zebra", &silkworm(), &["zebra"]),
            Verdict::Rejected(Rejection::DuplicateWord)
        );
    }

    #[test]
    fn possibility_checked_before_dictionary() {
        let validator = setup_validator(ValidationPolicy::default());
        assert_eq!(
            validator.validate("qqq", &silkworm(), NO_WORDS),
            Verdict::Rejected(Rejection::ImpossibleWord)
        );
    }

    #[test]
    fn root_word_allowed_by_default() {
        let validator = setup_validator(ValidationPolicy::default());
        assert_eq!(
            validator.validate("silkworm", &silkworm(), NO_WORDS),
            Verdict::Accepted
        );
    }

    #[test]
    fn root_word_rejected_when_policy_forbids() {
        let validator = setup_validator(ValidationPolicy {
            allow_root_word: false,
            ..ValidationPolicy::default()
        });
        assert_eq!(
            validator.validate("silkworm", &silkworm(), NO_WORDS),
            Verdict::Rejected(Rejection::RootWord)
        );
        assert_eq!(
            validator.validate("silk", &silkworm(), NO_WORDS),
            Verdict::Accepted
        );
    }

    #[test]
    fn min_length_policy() {
        let validator = setup_validator(ValidationPolicy {
            min_length: 3,
            ..ValidationPolicy::default()
        });
        assert_eq!(
            validator.validate("i", &silkworm(), NO_WORDS),
            Verdict::Rejected(Rejection::TooShort { min: 3 })
        );
        assert_eq!(
            validator.validate("milk", &silkworm(), NO_WORDS),
            Verdict::Accepted
        );

        let lenient = setup_validator(ValidationPolicy::default());
        assert_eq!(
            lenient.validate("i", &silkworm(), NO_WORDS),
            Verdict::Accepted
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let validator = setup_validator(ValidationPolicy::default());
        let used = ["worm"];
        for candidate in ["silk", "worm", "wilk", "zebra", ""] {
            let first = validator.validate(candidate, &silkworm(), &used);
            let second = validator.validate(candidate, &silkworm(), &used);
            assert_eq!(first, second, "verdict for {candidate:?} changed");
        }
    }

    #[test]
    fn accepted_then_inserted_becomes_duplicate() {
        let validator = setup_validator(ValidationPolicy::default());
        let root = silkworm();
        let mut used: Vec<String> = Vec::new();

        assert!(validator.validate("milk", &root, &used).is_accepted());
        used.insert(0, "milk".to_string());
        assert_eq!(
            validator.validate("milk", &root, &used),
            Verdict::Rejected(Rejection::DuplicateWord)
        );
    }

    #[test]
    fn is_real_rejects_empty() {
        let validator = setup_validator(ValidationPolicy::default());
        assert!(validator.is_real("silk"));
        assert!(!validator.is_real(""));
        assert!(!validator.is_real("wilk"));
    }

    #[test]
    fn messages_name_the_rule() {
        let root = silkworm();
        assert!(Rejection::ImpossibleWord.message(&root).contains("silkworm"));
        assert!(Rejection::TooShort { min: 3 }.message(&root).contains('3'));
        assert_eq!(Rejection::DuplicateWord.title(), "Word already used");
        assert_eq!(Rejection::UnrecognizedWord.to_string(), "Word not recognized");
    }

    #[test]
    fn derivable_words_respect_history() {
        let validator = setup_validator(ValidationPolicy::default());
        let mut words = validator.derivable_words(&silkworm(), &["worm"]);
        words.sort_unstable();
        assert_eq!(words, vec!["i", "milk", "silk", "silkworm"]);
    }
}
