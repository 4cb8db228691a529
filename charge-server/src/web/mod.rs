//! Web layer for the charging assistant.
//!
//! Provides HTTP endpoints for session management, station search, and
//! chat, plus a minimal HTML frontend.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
