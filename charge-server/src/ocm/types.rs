//! Open Charge Map API response DTOs.
//!
//! These types map directly to the `/v3/poi` JSON response (compact,
//! non-verbose form). They use `Option` liberally because the API omits
//! fields rather than sending null in many cases.

use serde::Deserialize;

/// A charging-station point-of-interest record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChargePoint {
    /// Numeric POI identifier.
    #[serde(rename = "ID")]
    pub id: Option<i64>,

    /// Address and location info, including distance from the query origin.
    pub address_info: Option<AddressInfo>,

    /// Charging connectors at this station.
    pub connections: Option<Vec<ConnectionInfo>>,

    /// Operational status.
    pub status_type: Option<StatusType>,
}

/// Address block of a charge point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressInfo {
    /// Station name.
    pub title: Option<String>,

    /// First address line.
    pub address_line1: Option<String>,

    /// Town or city.
    pub town: Option<String>,

    /// Distance from the query origin, in the unit requested (km here).
    /// Only present on proximity searches.
    pub distance: Option<f64>,
}

/// A single connector on a charge point.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionInfo {
    /// Charging power level.
    pub level: Option<LevelInfo>,

    /// Physical connector type.
    pub connection_type: Option<ConnectionTypeInfo>,
}

/// Power-level descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LevelInfo {
    /// Label, e.g. "Level 3:  High (Over 40kW)" or "Level 2 : Medium (Over 2kW) Fast".
    pub title: Option<String>,
}

/// Connector-type descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionTypeInfo {
    /// Label, e.g. "CCS (Type 2)".
    pub title: Option<String>,
}

/// Operational-status descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusType {
    /// Whether the station is in service.
    pub is_operational: Option<bool>,

    /// Status label, e.g. "Operational".
    pub title: Option<String>,
}
