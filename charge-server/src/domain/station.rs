//! Resolved charging-station types.
//!
//! The directory service omits fields liberally. `ocm::convert` resolves
//! every absence to the defaults defined here, exactly once, so ranking and
//! formatting code operates on plain values and never sees an `Option`.

/// Fallback label for missing text fields (title, address, town, status).
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Sentinel distance (km) for records with no distance information.
///
/// Large enough to fall outside every proximity bonus band.
pub const UNKNOWN_DISTANCE_KM: f64 = 999.0;

/// A charging connector attached to a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Power-level label, e.g. "Level 3:  High (Over 40kW)".
    pub level: String,

    /// Connector-type label, e.g. "CCS (Type 2)".
    pub connector_type: String,
}

/// A charging station with all fields resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station name; `UNKNOWN_LABEL` when the record had none.
    pub title: String,

    /// First address line.
    pub address_line: String,

    /// Town or city.
    pub town: String,

    /// Distance from the search origin in km; `UNKNOWN_DISTANCE_KM` when
    /// the directory service did not report one.
    pub distance_km: f64,

    /// Charging connectors; empty when the record listed none.
    pub connections: Vec<Connection>,

    /// Whether the station is currently operational.
    pub is_operational: bool,

    /// Operational-status label, e.g. "Operational".
    pub status: String,
}

impl Station {
    /// Connector-type labels with duplicates removed, first-seen order.
    pub fn connector_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::with_capacity(self.connections.len());

        for connection in &self.connections {
            let label = connection.connector_type.as_str();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }

        labels
    }
}
