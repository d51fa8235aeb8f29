//! Word rules that need no dictionary

use crate::core::RootWord;

/// Whether `candidate` has not been played yet
///
/// Inputs are normalized to lowercase before they get here, so comparison is exact.
#[must_use]
pub fn is_original<S: AsRef<str>>(candidate: &str, used_words: &[S]) -> bool {
    !used_words.iter().any(|used| used.as_ref() == candidate)
}

/// Whether `candidate` can be spelled from the letters of `root`
///
/// Each root letter may be used once. Letters are consumed from a working copy of the
/// root in candidate order, and the check stops at the first letter with no unused
/// occurrence left. Leftover root letters are fine.
#[must_use]
pub fn is_possible(candidate: &str, root: &RootWord) -> bool {
    let mut available = root.letters();

    for letter in candidate.chars() {
        match available.iter().position(|&c| c == letter) {
            Some(pos) => {
                available.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}
