//! Station scoring rule.
//!
//! A fixed additive heuristic: proximity, fast-charge connections, and
//! operational status each contribute points. There is no learned model.

use crate::domain::Station;

/// Distance under which a station earns the full proximity bonus (km).
const NEAR_THRESHOLD_KM: f64 = 5.0;

/// Distance under which a station earns the reduced proximity bonus (km).
const MID_THRESHOLD_KM: f64 = 10.0;

/// Points for a station closer than `NEAR_THRESHOLD_KM`.
const NEAR_POINTS: u32 = 10;

/// Points for a station between the two thresholds.
const MID_POINTS: u32 = 5;

/// Points per connection whose power-level label marks fast charging.
/// Cumulative across connections, not capped.
const FAST_CONNECTION_POINTS: u32 = 8;

/// Points for an operational station.
const OPERATIONAL_POINTS: u32 = 5;

/// Substring of the power-level label that marks a fast-charge connection.
/// Matched case-sensitively, as received from the directory service.
const FAST_LEVEL_MARKER: &str = "Fast";

/// Nominal maximum used by the display layer ("score/23").
///
/// Not a hard ceiling: the fast-connection bonus is uncapped, so stations
/// with several fast connectors can exceed it.
pub const NOMINAL_MAX_SCORE: u32 = 23;

/// Score a station.
///
/// The 999 km sentinel for unknown distances falls outside both proximity
/// bands, so records without a distance simply earn no proximity points.
pub fn score_station(station: &Station) -> u32 {
    let mut score = 0;

    if station.distance_km < NEAR_THRESHOLD_KM {
        score += NEAR_POINTS;
    } else if station.distance_km < MID_THRESHOLD_KM {
        score += MID_POINTS;
    }

    for connection in &station.connections {
        if connection.level.contains(FAST_LEVEL_MARKER) {
            score += FAST_CONNECTION_POINTS;
        }
    }

    if station.is_operational {
        score += OPERATIONAL_POINTS;
    }

    score
}
