//! Game controller
//!
//! Owns the current session and is the only thing that mutates it. Front ends hand it
//! raw input and render the `Outcome` they get back.

use super::Session;
use crate::core::{RootWord, normalize};
use crate::dictionary::Dictionary;
use crate::error::{LoadError, Result};
use crate::validation::{Rejection, Verdict, WordValidator};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Word joined the used words
    Accepted(String),
    /// Empty input; nothing to show
    Ignored,
    /// Word turned down, with the alert to show
    Rejected { reason: Rejection, message: String },
}

impl Outcome {
    /// Alert title for a rejection
    #[must_use]
    pub const fn title(&self) -> Option<&'static str> {
        match self {
            Self::Rejected { reason, .. } => Some(reason.title()),
            Self::Accepted(_) | Self::Ignored => None,
        }
    }
}

/// Drives sessions: picks root words and applies submissions
pub struct Game<D, R = StdRng> {
    validator: WordValidator<D>,
    start_words: Vec<RootWord>,
    session: Session,
    rng: R,
}

impl<D: Dictionary, R: Rng> Game<D, R> {
    /// Start the first session on a random root word
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NoStartWords` if `start_words` is empty, or
    /// `LoadError::InvalidRootWord` if an entry is not a usable root word.
    pub fn new<S: AsRef<str>>(
        start_words: &[S],
        validator: WordValidator<D>,
        mut rng: R,
    ) -> Result<Self> {
        let start_words = start_words
            .iter()
            .map(RootWord::new)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let root = start_words
            .choose(&mut rng)
            .cloned()
            .ok_or(LoadError::NoStartWords)?;
        info!("Starting game with root word '{root}'");

        Ok(Self {
            validator,
            start_words,
            session: Session::new(root),
            rng,
        })
    }

    /// Validate raw input and record it if accepted
    pub fn submit(&mut self, input: &str) -> Outcome {
        let candidate = normalize(input);
        let verdict = self.validator.validate(
            &candidate,
            self.session.root(),
            self.session.used_words(),
        );
        debug!("Submission {candidate:?}: {verdict:?}");

        match verdict {
            Verdict::Accepted => {
                self.session.record(candidate.clone());
                Outcome::Accepted(candidate)
            }
            Verdict::Rejected(reason) if reason.is_silent() => Outcome::Ignored,
            Verdict::Rejected(reason) => Outcome::Rejected {
                reason,
                message: reason.message(self.session.root()),
            },
        }
    }

    /// Replace the session with one on a fresh random root word
    pub fn new_game(&mut self) {
        if let Some(root) = self.start_words.choose(&mut self.rng) {
            info!("New game with root word '{root}'");
            self.session = Session::new(root.clone());
        }
    }

    /// Replace the session with one on the given root word
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidRootWord` if `root` is empty or not alphabetic.
    pub fn restart_with(&mut self, root: &str) -> Result<()> {
        let root = RootWord::new(root)?;
        info!("New game with chosen root word '{root}'");
        self.session = Session::new(root);
        Ok(())
    }
}

impl<D, R> Game<D, R> {
    #[inline]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[inline]
    pub const fn validator(&self) -> &WordValidator<D> {
        &self.validator
    }
}

impl<D: Dictionary + Sync, R> Game<D, R> {
    /// How many more dictionary words could still be played this session
    pub fn hint_count(&self) -> usize {
        self.validator
            .derivable_words(self.session.root(), self.session.used_words())
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Language, WordSetDictionary};
    use rand::SeedableRng;

    fn setup_game(start_words: &[&str]) -> Game<WordSetDictionary> {
        let dictionary = WordSetDictionary::from_words(
            Language::ENGLISH,
            ["silk", "worm", "milk", "silkworm", "ball", "base", "baseball"],
        );
        let validator = WordValidator::new(dictionary, Language::ENGLISH);
        Game::new(start_words, validator, StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn starts_on_a_listed_root_word() {
        let game = setup_game(&["silkworm", "baseball"]);
        let root = game.session().root().text();
        assert!(root == "silkworm" || root == "baseball");
        assert!(game.session().used_words().is_empty());
    }

    #[test]
    fn empty_start_list_is_an_error() {
        let dictionary = WordSetDictionary::from_words(Language::ENGLISH, ["silk"]);
        let validator = WordValidator::new(dictionary, Language::ENGLISH);
        let empty: &[&str] = &[];

        let result = Game::new(empty, validator, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(LoadError::NoStartWords)));
    }

    #[test]
    fn invalid_start_word_is_an_error() {
        let dictionary = WordSetDictionary::from_words(Language::ENGLISH, ["silk"]);
        let validator = WordValidator::new(dictionary, Language::ENGLISH);

        let result = Game::new(&["silk worm"], validator, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(LoadError::InvalidRootWord(_))));
    }

    #[test]
    fn accepted_words_are_recorded_first() {
        let mut game = setup_game(&["silkworm"]);

        assert_eq!(game.submit("silk"), Outcome::Accepted("silk".to_string()));
        assert_eq!(game.submit("  WORM "), Outcome::Accepted("worm".to_string()));
        assert_eq!(game.session().used_words(), &["worm", "silk"]);
    }

    #[test]
    fn duplicate_submission_is_rejected() {
        let mut game = setup_game(&["silkworm"]);
        game.submit("silk");

        let outcome = game.submit("Silk");
        assert_eq!(outcome.title(), Some("Word already used"));
        assert!(matches!(
            outcome,
            Outcome::Rejected {
                reason: Rejection::DuplicateWord,
                ..
            }
        ));
        assert_eq!(game.session().words_found(), 1);
    }

    #[test]
    fn impossible_submission_names_root() {
        let mut game = setup_game(&["silkworm"]);

        match game.submit("silkworms") {
            Outcome::Rejected { reason, message } => {
                assert_eq!(reason, Rejection::ImpossibleWord);
                assert!(message.contains("silkworm"));
            }
            other => panic!("Expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn empty_submission_is_ignored() {
        let mut game = setup_game(&["silkworm"]);

        assert_eq!(game.submit(""), Outcome::Ignored);
        assert_eq!(game.submit("   "), Outcome::Ignored);
        assert_eq!(Outcome::Ignored.title(), None);
        assert!(game.session().used_words().is_empty());
    }

    #[test]
    fn unrecognized_submission_is_rejected() {
        let mut game = setup_game(&["silkworm"]);
        assert!(matches!(
            game.submit("wilk"),
            Outcome::Rejected {
                reason: Rejection::UnrecognizedWord,
                ..
            }
        ));
    }

    #[test]
    fn new_game_clears_used_words() {
        let mut game = setup_game(&["silkworm"]);
        game.submit("silk");
        game.new_game();

        assert_eq!(game.session().root().text(), "silkworm");
        assert!(game.session().used_words().is_empty());
        assert_eq!(game.submit("silk"), Outcome::Accepted("silk".to_string()));
    }

    #[test]
    fn restart_with_explicit_root() {
        let mut game = setup_game(&["silkworm"]);
        game.submit("silk");

        game.restart_with("Baseball").unwrap();
        assert_eq!(game.session().root().text(), "baseball");
        assert!(game.session().used_words().is_empty());
        assert!(game.restart_with("").is_err());
        assert_eq!(game.session().root().text(), "baseball");
    }

    #[test]
    fn hint_count_drops_as_words_are_found() {
        let mut game = setup_game(&["silkworm"]);
        // silk, worm, milk, silkworm
        assert_eq!(game.hint_count(), 4);

        game.submit("milk");
        assert_eq!(game.hint_count(), 3);
    }
}
