//! Game sessions and the controller that owns them

mod controller;
mod session;

pub use controller::{Game, Outcome};
pub use session::Session;
