//! Game sessions and the registry that holds them
//!
//! `GameSession` is the per-channel state machine; `SessionStore` is the
//! thread-safe map drivers talk to.

mod outcome;
mod session;
mod store;

pub use outcome::{GameView, GuessOutcome, GuessStatus};
pub use session::{GameSession, SessionState};
pub use store::{SessionKey, SessionStore};
