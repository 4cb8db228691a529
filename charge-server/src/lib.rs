//! EV charging assistant server.
//!
//! A web application that answers: "where can I charge nearby, and what
//! should I know about it?" It fetches candidate stations from the Open
//! Charge Map directory, ranks them with a fixed point-scoring rule, and
//! grounds a chat assistant's replies in the top results.

pub mod assistant;
pub mod context;
pub mod domain;
pub mod ocm;
pub mod recommend;
pub mod session;
pub mod web;
