//! Session state and action handlers.
//!
//! The chat transcript and the last search's ranking live in an explicit
//! per-session object. Every user action takes the session, runs the
//! pipeline, mutates the session, and returns what the presentation layer
//! renders; there is no hidden global state.

mod actions;
mod store;

pub use actions::{SearchOutcome, SearchQuery, run_chat, run_search};
pub use store::{Session, SessionId, SessionStore, SessionStoreConfig};
