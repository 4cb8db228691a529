//! Open Charge Map directory-service client.
//!
//! This module provides an HTTP client for the Open Charge Map POI API,
//! which returns charging-station records for a geographic area.
//!
//! Key characteristics of the API:
//! - The compact payload **omits fields** rather than sending null; every
//!   nested DTO field is optional and resolved to defaults in `convert`
//! - `Distance` is only present on proximity searches and is returned in
//!   the unit the query requested (km here)
//! - A non-success status is degraded to an empty result list by the
//!   client; only transport and parse failures surface as errors

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DEFAULT_MAX_RESULTS, OcmClient, OcmConfig};
pub use convert::{resolve_station, resolve_stations};
pub use error::OcmError;
pub use mock::MockOcmClient;
pub use types::{AddressInfo, ChargePoint, ConnectionInfo, ConnectionTypeInfo, LevelInfo, StatusType};
