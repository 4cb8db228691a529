//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;
use crate::recommend::{NOMINAL_MAX_SCORE, ScoredStation};

/// Default search origin (San Francisco).
const DEFAULT_LATITUDE: f64 = 37.7749;
const DEFAULT_LONGITUDE: f64 = -122.4194;

/// Default and UI bounds for the search radius, in km.
const DEFAULT_RADIUS_KM: f64 = 10.0;
const MIN_RADIUS_KM: f64 = 5.0;
const MAX_RADIUS_KM: f64 = 50.0;

/// Request to search for stations.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Session id issued by `POST /api/session`
    pub session: String,

    /// Latitude (defaults to San Francisco)
    pub lat: Option<f64>,

    /// Longitude (defaults to San Francisco)
    pub lon: Option<f64>,

    /// Search radius in km (clamped to the slider bounds)
    pub radius_km: Option<f64>,
}

impl StationSearchRequest {
    pub fn latitude(&self) -> f64 {
        self.lat.unwrap_or(DEFAULT_LATITUDE)
    }

    pub fn longitude(&self) -> f64 {
        self.lon.unwrap_or(DEFAULT_LONGITUDE)
    }

    /// Radius with the UI bounds applied.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
            .unwrap_or(DEFAULT_RADIUS_KM)
            .clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
    }
}

/// A station card in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub title: String,
    pub address: String,
    pub town: String,
    pub distance_km: f64,
    pub score: u32,

    /// Nominal score denominator for display ("score/23"). Not a hard
    /// maximum.
    pub score_max: u32,

    pub status: String,

    /// Deduplicated connector-type labels, first-seen order
    pub connectors: Vec<String>,
}

impl StationResult {
    pub fn from_scored(item: &ScoredStation) -> Self {
        Self {
            title: item.station.title.clone(),
            address: item.station.address_line.clone(),
            town: item.station.town.clone(),
            distance_km: item.distance_km,
            score: item.score,
            score_max: NOMINAL_MAX_SCORE,
            status: item.station.status.clone(),
            connectors: item
                .station
                .connector_labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Human-readable notice ("Found 4 stations!" or a degradation message)
    pub notice: String,

    /// Ranked stations, best first
    pub stations: Vec<StationResult>,
}

/// Response when creating a session.
#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session: String,
}

/// Request to send a chat message.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Session id issued by `POST /api/session`
    pub session: String,

    /// The user's message
    pub message: String,
}

/// A transcript entry in responses.
#[derive(Debug, Serialize)]
pub struct MessageResult {
    pub role: String,
    pub content: String,
    pub sent_at: String,
}

impl MessageResult {
    pub fn from_message(message: &ChatMessage) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
            sent_at: message.sent_at.to_rfc3339(),
        }
    }
}

/// Response to a chat message.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The assistant's reply (also the last transcript entry)
    pub reply: MessageResult,

    /// The full transcript so far
    pub transcript: Vec<MessageResult>,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Connection, Station, UNKNOWN_LABEL};

    fn request(lat: Option<f64>, lon: Option<f64>, radius_km: Option<f64>) -> StationSearchRequest {
        StationSearchRequest {
            session: "s".to_string(),
            lat,
            lon,
            radius_km,
        }
    }

    #[test]
    fn search_request_defaults() {
        let req = request(None, None, None);
        assert_eq!(req.latitude(), 37.7749);
        assert_eq!(req.longitude(), -122.4194);
        assert_eq!(req.radius_km(), 10.0);
    }

    #[test]
    fn radius_is_clamped_to_slider_bounds() {
        assert_eq!(request(None, None, Some(1.0)).radius_km(), 5.0);
        assert_eq!(request(None, None, Some(100.0)).radius_km(), 50.0);
        assert_eq!(request(None, None, Some(25.0)).radius_km(), 25.0);
    }

    #[test]
    fn station_result_carries_score_and_denominator() {
        let scored = ScoredStation {
            station: Station {
                title: "Plaza".to_string(),
                address_line: "1 Plaza Way".to_string(),
                town: "Berkeley".to_string(),
                distance_km: 3.2,
                connections: vec![
                    Connection {
                        level: "Fast".to_string(),
                        connector_type: "CCS (Type 2)".to_string(),
                    },
                    Connection {
                        level: "Fast".to_string(),
                        connector_type: "CCS (Type 2)".to_string(),
                    },
                    Connection {
                        level: String::new(),
                        connector_type: "CHAdeMO".to_string(),
                    },
                ],
                is_operational: true,
                status: "Operational".to_string(),
            },
            score: 23,
            distance_km: 3.2,
        };

        let result = StationResult::from_scored(&scored);

        assert_eq!(result.score, 23);
        assert_eq!(result.score_max, 23);
        assert_eq!(result.connectors, vec!["CCS (Type 2)", "CHAdeMO"]);
        assert_eq!(result.town, "Berkeley");
    }

    #[test]
    fn message_result_uses_wire_role() {
        let message = ChatMessage::assistant("hi");
        let result = MessageResult::from_message(&message);

        assert_eq!(result.role, "assistant");
        assert_eq!(result.content, "hi");
        assert!(!result.sent_at.is_empty());
    }

    #[test]
    fn unknown_station_maps_through() {
        let scored = ScoredStation {
            station: Station {
                title: UNKNOWN_LABEL.to_string(),
                address_line: UNKNOWN_LABEL.to_string(),
                town: UNKNOWN_LABEL.to_string(),
                distance_km: 999.0,
                connections: Vec::new(),
                is_operational: false,
                status: UNKNOWN_LABEL.to_string(),
            },
            score: 0,
            distance_km: 999.0,
        };

        let result = StationResult::from_scored(&scored);

        assert_eq!(result.title, "Unknown");
        assert!(result.connectors.is_empty());
    }
}
