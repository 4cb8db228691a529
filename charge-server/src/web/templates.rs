//! Askama templates for the web frontend.

use askama::Template;

use crate::recommend::{NOMINAL_MAX_SCORE, ScoredStation};

/// Chat page with the location form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Station card list fragment (search results).
#[derive(Template)]
#[template(path = "station_list.html")]
pub struct StationListTemplate {
    pub notice: String,
    pub stations: Vec<StationView>,
}

/// A station card prepared for rendering.
pub struct StationView {
    pub rank: usize,
    pub title: String,
    pub address: String,
    pub town: String,
    pub distance: String,
    pub score: String,
    pub status: String,
    pub chargers: String,
}

impl StationView {
    /// Build a view for the card at 1-indexed position `rank`.
    pub fn from_scored(rank: usize, item: &ScoredStation) -> Self {
        let chargers = item.station.connector_labels().join(", ");

        Self {
            rank,
            title: item.station.title.clone(),
            address: item.station.address_line.clone(),
            town: item.station.town.clone(),
            distance: format!("{:.1}", item.distance_km),
            score: format!("{}/{}", item.score, NOMINAL_MAX_SCORE),
            status: item.station.status.clone(),
            chargers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Connection, Station, UNKNOWN_LABEL};

    #[test]
    fn station_view_formats_fields() {
        let scored = ScoredStation {
            station: Station {
                title: "Plaza".to_string(),
                address_line: "1 Plaza Way".to_string(),
                town: "Berkeley".to_string(),
                distance_km: 3.26,
                connections: vec![
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
            distance_km: 3.26,
        };

        let view = StationView::from_scored(1, &scored);

        assert_eq!(view.rank, 1);
        assert_eq!(view.distance, "3.3");
        assert_eq!(view.score, "23/23");
        assert_eq!(view.chargers, "CCS (Type 2), CHAdeMO");
    }

    #[test]
    fn station_view_with_no_connectors() {
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

        let view = StationView::from_scored(3, &scored);

        assert_eq!(view.rank, 3);
        assert_eq!(view.chargers, "");
        assert_eq!(view.score, "0/23");
    }
}
