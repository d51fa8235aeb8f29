//! Check command
//!
//! Validates a batch of candidates against a fixed root word without any UI.

use crate::core::{RootWord, normalize};
use crate::dictionary::Dictionary;
use crate::game::Session;
use crate::validation::{Verdict, WordValidator};

/// Configuration for checking words
pub struct CheckConfig {
    pub root: String,
    pub used: Vec<String>,
    pub candidates: Vec<String>,
}

/// Result of checking a batch of words
pub struct CheckResult {
    pub root: RootWord,
    pub entries: Vec<CheckEntry>,
}

impl CheckResult {
    /// Number of candidates that were accepted
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.entries.iter().filter(|e| e.verdict.is_accepted()).count()
    }
}

/// A single checked candidate
pub struct CheckEntry {
    pub word: String,
    pub verdict: Verdict,
    pub message: Option<String>,
}

/// Check candidates in order
///
/// Accepted candidates count as used for the ones after them, the same as in a game.
///
/// # Errors
///
/// Returns an error if the root word is empty or contains non-letters.
pub fn check_words<D: Dictionary>(
    config: CheckConfig,
    validator: &WordValidator<D>,
) -> Result<CheckResult, String> {
    let root = RootWord::new(&config.root).map_err(|e| format!("Invalid root word: {e}"))?;

    let mut session = Session::new(root);
    for word in config.used.iter().rev() {
        session.record(normalize(word));
    }

    let mut entries = Vec::with_capacity(config.candidates.len());
    for raw in &config.candidates {
        let word = normalize(raw);
        let verdict = validator.validate(&word, session.root(), session.used_words());

        let message = match verdict {
            Verdict::Accepted => {
                session.record(word.clone());
                None
            }
            Verdict::Rejected(reason) => Some(reason.message(session.root())),
        };

        entries.push(CheckEntry {
            word,
            verdict,
            message,
        });
    }

    Ok(CheckResult {
        root: session.root().clone(),
        entries,
    })
}
