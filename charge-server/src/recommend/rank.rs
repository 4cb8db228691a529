//! Station ranking.
//!
//! Ranks fetched stations by the additive scoring rule to present the most
//! useful options first.

use crate::domain::Station;

use super::score::score_station;

/// Default charger-type hint for ranking.
pub const DEFAULT_PREFERRED_TYPE: &str = "Fast";

/// A station with its computed score.
///
/// Ephemeral: recomputed on every search, never persisted.
#[derive(Debug, Clone)]
pub struct ScoredStation {
    pub station: Station,
    pub score: u32,
    pub distance_km: f64,
}

/// Rank stations best-first.
///
/// Sorts by score descending. The sort is stable, so stations with equal
/// scores keep their input order.
pub fn rank_stations(stations: Vec<Station>, preferred_type: &str) -> Vec<ScoredStation> {
    // TODO: fold `preferred_type` into the connection bonus. Scoring
    // currently keys on the fixed fast-level label whatever the hint says.
    let _ = preferred_type;

    let mut scored: Vec<ScoredStation> = stations
        .into_iter()
        .map(|station| {
            let score = score_station(&station);
            let distance_km = station.distance_km;
            ScoredStation {
                station,
                score,
                distance_km,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));

    scored
}
