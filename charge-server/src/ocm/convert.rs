//! Conversion from Open Charge Map DTOs to domain types.
//!
//! This is the only place where the loosely-typed directory payload meets
//! the resolved domain model. Every missing field becomes a documented
//! default here; downstream code never handles absence.

use crate::domain::{Connection, Station, UNKNOWN_DISTANCE_KM, UNKNOWN_LABEL};

use super::types::{ChargePoint, ConnectionInfo};

/// Resolve a raw charge-point record into a `Station`.
///
/// Missing fields default to: text fields → "Unknown", distance → the
/// 999 km sentinel, connections → empty, operational flag → false.
pub fn resolve_station(poi: &ChargePoint) -> Station {
    let address = poi.address_info.as_ref();

    let title = address
        .and_then(|a| a.title.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

    let address_line = address
        .and_then(|a| a.address_line1.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

    let town = address
        .and_then(|a| a.town.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

    let distance_km = address
        .and_then(|a| a.distance)
        .unwrap_or(UNKNOWN_DISTANCE_KM);

    let connections = poi
        .connections
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(resolve_connection)
        .collect();

    let status = poi.status_type.as_ref();

    let is_operational = status.and_then(|s| s.is_operational).unwrap_or(false);

    let status = status
        .and_then(|s| s.title.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

    Station {
        title,
        address_line,
        town,
        distance_km,
        connections,
        is_operational,
        status,
    }
}

fn resolve_connection(info: &ConnectionInfo) -> Connection {
    let level = info
        .level
        .as_ref()
        .and_then(|l| l.title.clone())
        .unwrap_or_default();

    let connector_type = info
        .connection_type
        .as_ref()
        .and_then(|c| c.title.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

    Connection {
        level,
        connector_type,
    }
}

/// Resolve a batch of records.
pub fn resolve_stations(pois: &[ChargePoint]) -> Vec<Station> {
    pois.iter().map(resolve_station).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_complete_record() {
        let json = r#"{
            "ID": 7,
            "AddressInfo": {
                "Title": "Harbor Chargers",
                "AddressLine1": "2 Pier Rd",
                "Town": "Oakland",
                "Distance": 3.0
            },
            "Connections": [
                {
                    "Level": {"Title": "Level 3:  High (Over 40kW) Fast"},
                    "ConnectionType": {"Title": "CHAdeMO"}
                }
            ],
            "StatusType": {"IsOperational": true, "Title": "Operational"}
        }"#;
        let poi: ChargePoint = serde_json::from_str(json).unwrap();

        let station = resolve_station(&poi);

        assert_eq!(station.title, "Harbor Chargers");
        assert_eq!(station.address_line, "2 Pier Rd");
        assert_eq!(station.town, "Oakland");
        assert_eq!(station.distance_km, 3.0);
        assert_eq!(station.connections.len(), 1);
        assert_eq!(station.connections[0].connector_type, "CHAdeMO");
        assert!(station.is_operational);
        assert_eq!(station.status, "Operational");
    }

    #[test]
    fn empty_record_gets_defaults() {
        let poi: ChargePoint = serde_json::from_str(r#"{"ID": 1}"#).unwrap();

        let station = resolve_station(&poi);

        assert_eq!(station.title, UNKNOWN_LABEL);
        assert_eq!(station.address_line, UNKNOWN_LABEL);
        assert_eq!(station.town, UNKNOWN_LABEL);
        assert_eq!(station.distance_km, UNKNOWN_DISTANCE_KM);
        assert!(station.connections.is_empty());
        assert!(!station.is_operational);
        assert_eq!(station.status, UNKNOWN_LABEL);
    }

    #[test]
    fn partially_filled_connection() {
        let json = r#"{
            "Connections": [
                {"Level": {"Title": "Level 2 : Medium (Over 2kW)"}},
                {"ConnectionType": {"Title": "Type 1 (J1772)"}}
            ]
        }"#;
        let poi: ChargePoint = serde_json::from_str(json).unwrap();

        let station = resolve_station(&poi);

        assert_eq!(station.connections.len(), 2);
        assert_eq!(station.connections[0].level, "Level 2 : Medium (Over 2kW)");
        assert_eq!(station.connections[0].connector_type, UNKNOWN_LABEL);
        assert_eq!(station.connections[1].level, "");
        assert_eq!(station.connections[1].connector_type, "Type 1 (J1772)");
    }

    #[test]
    fn operational_flag_defaults_to_false() {
        let json = r#"{"StatusType": {"Title": "Planned For Future Date"}}"#;
        let poi: ChargePoint = serde_json::from_str(json).unwrap();

        let station = resolve_station(&poi);

        assert!(!station.is_operational);
        assert_eq!(station.status, "Planned For Future Date");
    }

    #[test]
    fn resolves_batch_in_order() {
        let json = r#"[
            {"AddressInfo": {"Title": "A"}},
            {"AddressInfo": {"Title": "B"}}
        ]"#;
        let pois: Vec<ChargePoint> = serde_json::from_str(json).unwrap();

        let stations = resolve_stations(&pois);

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].title, "A");
        assert_eq!(stations[1].title, "B");
    }
}
