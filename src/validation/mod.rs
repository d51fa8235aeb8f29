//! Word validation
//!
//! Pure checks deciding whether a submitted word may be played.

pub mod rules;
mod validator;

pub use rules::{is_original, is_possible};
pub use validator::{Rejection, ValidationPolicy, Verdict, WordValidator};
