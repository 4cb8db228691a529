//! Station recommendation.
//!
//! This module implements the fixed point-scoring rule that orders fetched
//! stations: proximity, fast-charge connections, and operational status
//! each earn points, and stations are presented best-first.

mod rank;
mod score;

pub use rank::{DEFAULT_PREFERRED_TYPE, ScoredStation, rank_stations};
pub use score::{NOMINAL_MAX_SCORE, score_station};
