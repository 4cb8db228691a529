//! User-action handlers.
//!
//! Each handler takes the session explicitly, runs the pipeline to
//! completion, and returns what the presentation layer renders. Fetch
//! failures degrade to an empty result set with a notice; chat failures
//! arrive as an apologetic reply already formatted by the assistant client.

use tracing::{debug, warn};

use crate::assistant::ChatClient;
use crate::context::{DEFAULT_TOP_N, build_context};
use crate::domain::{ChatMessage, Coordinate, SearchRadius};
use crate::ocm::{OcmClient, resolve_stations};
use crate::recommend::{DEFAULT_PREFERRED_TYPE, ScoredStation, rank_stations};

use super::store::Session;

/// Parameters of a station search.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub origin: Coordinate,
    pub radius: SearchRadius,
    pub max_results: u32,
}

/// What a search action produced.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Ranked stations, best first (also stored in the session).
    pub recommendations: Vec<ScoredStation>,

    /// Human-readable notice for the user.
    pub notice: String,
}

/// Run a station search and store its ranking in the session.
///
/// A fetch error is not propagated: the outcome carries an empty ranking
/// and a notice describing the failure, and the session's stored
/// recommendations are cleared.
pub async fn run_search(
    session: &mut Session,
    ocm: &OcmClient,
    query: &SearchQuery,
) -> SearchOutcome {
    let (stations, fetch_notice) = match ocm
        .fetch_nearby(query.origin, query.radius, query.max_results)
        .await
    {
        Ok(records) => (resolve_stations(&records), None),
        Err(e) => {
            warn!(error = %e, "station fetch failed");
            (Vec::new(), Some(format!("Error fetching stations: {e}")))
        }
    };

    let found = stations.len();
    debug!(found, origin = %query.origin, "ranking fetched stations");

    let recommendations = rank_stations(stations, DEFAULT_PREFERRED_TYPE);
    session.recommendations = recommendations.clone();

    let notice = fetch_notice.unwrap_or_else(|| format!("Found {found} stations!"));

    SearchOutcome {
        recommendations,
        notice,
    }
}

/// Run one chat exchange, grounding the reply in the stored ranking.
///
/// Appends the user message and the assistant reply to the transcript and
/// returns the reply. When no recommendations are stored the assistant is
/// called without context.
pub async fn run_chat(session: &mut Session, assistant: &ChatClient, text: &str) -> ChatMessage {
    session.transcript.push(ChatMessage::user(text));

    let lines = build_context(&session.recommendations, DEFAULT_TOP_N);
    let context = if lines.is_empty() {
        String::new()
    } else {
        format!("Top {DEFAULT_TOP_N} recommended stations:\n{lines}")
    };

    let reply = assistant.converse(text, &context).await;

    let message = ChatMessage::assistant(reply);
    session.transcript.push(message.clone());
    message
}
