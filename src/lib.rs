//! Word Scramble
//!
//! Build as many words as you can from the letters of a root word. Every word must be
//! new, spelled from the root's letters, and real.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::RootWord;
//! use word_scramble::dictionary::{Language, WordSetDictionary};
//! use word_scramble::validation::{Verdict, WordValidator};
//!
//! let validator = WordValidator::new(WordSetDictionary::embedded(), Language::ENGLISH);
//! let root = RootWord::new("silkworm").unwrap();
//!
//! let used: Vec<String> = Vec::new();
//! assert_eq!(validator.validate("silk", &root, &used), Verdict::Accepted);
//! ```

// Core domain types
pub mod core;

// Word recognition
pub mod dictionary;

// Startup errors
pub mod error;

// Sessions and the game controller
pub mod game;

// Submission rules
pub mod validation;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
