//! Core domain types for Word Scramble
//!
//! The root word and input normalization. Everything here is pure and has no
//! dependency on word lists, dictionaries, or the terminal.

mod word;

pub use word::{RootWord, WordError, normalize};
