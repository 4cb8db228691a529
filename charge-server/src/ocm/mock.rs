//! Mock Open Charge Map client for development without API access.
//!
//! Loads sample POI payloads from JSON files and serves them as if they
//! were live responses.

use std::path::Path;

use crate::domain::{Coordinate, SearchRadius};

use super::error::OcmError;
use super::types::ChargePoint;

/// Mock directory-service client that serves data from JSON files.
#[derive(Debug, Clone)]
pub struct MockOcmClient {
    pois: Vec<ChargePoint>,
}

impl MockOcmClient {
    /// Create a mock client by loading every `*.json` file in a directory.
    ///
    /// Each file must contain a POI array in the same shape as the live
    /// `/v3/poi` response.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, OcmError> {
        let data_dir = data_dir.as_ref();
        let mut pois = Vec::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            OcmError::Config(format!("failed to read mock data directory: {e}"))
        })?;

        for entry in entries {
            let entry = entry
                .map_err(|e| OcmError::Config(format!("failed to read directory entry: {e}")))?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path)
                .map_err(|e| OcmError::Config(format!("failed to read {path:?}: {e}")))?;

            let batch: Vec<ChargePoint> = serde_json::from_str(&json).map_err(|e| {
                OcmError::Json {
                    message: format!("failed to parse {path:?}: {e}"),
                }
            })?;

            pois.extend(batch);
        }

        if pois.is_empty() {
            return Err(OcmError::Config(format!(
                "no mock POI files found in {data_dir:?}"
            )));
        }

        Ok(Self { pois })
    }

    /// Fetch charging stations near a coordinate.
    ///
    /// Mimics the real `OcmClient::fetch_nearby` interface. Location
    /// parameters are ignored; mock data is static.
    pub async fn fetch_nearby(
        &self,
        _origin: Coordinate,
        _radius: SearchRadius,
        max_results: u32,
    ) -> Result<Vec<ChargePoint>, OcmError> {
        Ok(self
            .pois
            .iter()
            .take(max_results as usize)
            .cloned()
            .collect())
    }
}
