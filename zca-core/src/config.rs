//! Overlay configuration, loadable from JSON.
//!
//! Every field has a default, so an empty object `{}` is a valid config:
//!
//! ```json
//! { "first_year": 1991, "last_year": 2020, "value_label": "T2MA" }
//! ```

use crate::error::{Result, ZonalError};
use crate::table::DEFAULT_TIME_COLUMN;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// First year overlaid by default.
pub const DEFAULT_FIRST_YEAR: i32 = 1981;

/// Last (highlighted) year overlaid by default.
pub const DEFAULT_LAST_YEAR: i32 = 2024;

/// Region columns selected by default, in panel order.
pub const DEFAULT_REGIONS: [&str; 8] = [
    "GLOBAL",
    "POLAR (N)",
    "HIGH-LATITUDES (N)",
    "MID-LATITUDES (N)",
    "TROPICS",
    "MID-LATITUDES (S)",
    "HIGH-LATITUDES (S)",
    "POLAR (S)",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Name of the CSV date column
    pub time_column: String,
    /// Region columns to plot, in panel order
    pub regions: Vec<String>,
    pub first_year: i32,
    pub last_year: i32,
    /// Figure title; derived from the year range when absent
    pub title: Option<String>,
    /// Short name of the plotted quantity, used in hover text
    pub value_label: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            time_column: DEFAULT_TIME_COLUMN.to_string(),
            regions: DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
            first_year: DEFAULT_FIRST_YEAR,
            last_year: DEFAULT_LAST_YEAR,
            title: None,
            value_label: "SSTA".to_string(),
        }
    }
}

impl OverlayConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: OverlayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        log::info!("[ZCA] config: Loading {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.first_year > self.last_year {
            return Err(ZonalError::InvalidYearRange {
                first: self.first_year,
                last: self.last_year,
            });
        }
        Ok(())
    }

    /// The configured title, or "Zonal Contributions (first-last)".
    pub fn title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            format!("Zonal Contributions ({}-{})", self.first_year, self.last_year)
        })
    }
}
