//! Bridge record model
//!
//! One [`BridgeRecord`] per physical bridge, already normalized from the
//! raw inventory row.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::core::geo::Location;

/// 1-based bridge identity, equal to the record's table position plus one
pub type BridgeId = u32;

/// A single normalized bridge inventory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRecord {
    pub id: BridgeId,
    pub name: String,
    pub highway: String,
    pub location: Location,
    pub year_built: String,
    /// Year of the last major rehabilitation, empty when never rehabilitated
    pub last_major_rehab: String,
    /// Year of the last minor rehabilitation, empty when never rehabilitated
    pub last_minor_rehab: String,
    pub num_spans: u32,
    /// Per-span lengths in meters, one entry per span
    pub span_lengths: Vec<f64>,
    /// Total deck length in meters
    pub length: f64,
    /// Last inspection date as `MM/DD/YYYY`
    pub last_inspected: String,
    /// Condition index history, most recent reading first
    pub bcis: Vec<f64>,
}

impl BridgeRecord {
    /// Most recent BCI reading, if the bridge has ever been scored
    pub fn latest_bci(&self) -> Option<f64> {
        self.bcis.first().copied()
    }

    /// Mean of the BCI history, `None` when the history is empty
    pub fn average_bci(&self) -> Option<f64> {
        if self.bcis.is_empty() {
            return None;
        }
        Some(self.bcis.iter().sum::<f64>() / self.bcis.len() as f64)
    }
}

/// Which rehabilitation year a rehab event updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RehabKind {
    Major,
    Minor,
}

impl RehabKind {
    pub fn from_major_flag(major: bool) -> Self {
        if major {
            Self::Major
        } else {
            Self::Minor
        }
    }
}

/// Year portion of an `MM/DD/YYYY` date, i.e. everything after the second slash
pub fn year_of(date: &str) -> &str {
    date.get(6..).unwrap_or("")
}

/// Check that `date` looks like `MM/DD/YYYY` with a plausible month and day
pub fn validate_date(date: &str) -> Result<()> {
    let invalid = || Error::InvalidInput(format!("date '{date}' is not in MM/DD/YYYY format"));

    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3
        || parts[0].len() != 2
        || parts[1].len() != 2
        || parts[2].len() != 4
        || !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid());
    }

    let month: u32 = parts[0].parse().map_err(|_| invalid())?;
    let day: u32 = parts[1].parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }

    Ok(())
}
