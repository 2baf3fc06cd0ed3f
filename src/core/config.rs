//! Configuration for bridge-triage
//!
//! Defaults reproduce the fixed dispatch tiers; a JSON file can override
//! any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// One (radius, BCI ceiling) eligibility rule for inspector dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityTier {
    pub name: String,
    /// Maximum distance between inspector and bridge, in kilometers
    pub radius_km: f64,
    /// Bridges whose most recent BCI is at or below this value qualify
    pub max_bci: f64,
}

impl PriorityTier {
    pub fn new(name: &str, radius_km: f64, max_bci: f64) -> Self {
        Self {
            name: name.to_string(),
            radius_km,
            max_bci,
        }
    }
}

pub const HIGH_PRIORITY_RADIUS: f64 = 500.0;
pub const HIGH_PRIORITY_BCI: f64 = 60.0;
pub const MEDIUM_PRIORITY_RADIUS: f64 = 250.0;
pub const MEDIUM_PRIORITY_BCI: f64 = 70.0;
pub const LOW_PRIORITY_RADIUS: f64 = 100.0;
pub const LOW_PRIORITY_BCI: f64 = 100.0;

/// The three standard dispatch tiers: worse bridges draw inspectors from farther away
pub fn default_tiers() -> Vec<PriorityTier> {
    vec![
        PriorityTier::new("high", HIGH_PRIORITY_RADIUS, HIGH_PRIORITY_BCI),
        PriorityTier::new("medium", MEDIUM_PRIORITY_RADIUS, MEDIUM_PRIORITY_BCI),
        PriorityTier::new("low", LOW_PRIORITY_RADIUS, LOW_PRIORITY_BCI),
    ]
}

fn default_max_bridges() -> usize {
    10
}

fn default_header_rows() -> usize {
    2
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// Dispatch tiers, evaluated as independent alternatives
    #[serde(default = "default_tiers")]
    pub tiers: Vec<PriorityTier>,

    /// Per-inspector capacity used when the command line does not give one
    #[serde(default = "default_max_bridges")]
    pub max_bridges_per_inspector: usize,

    /// Leading CSV rows to skip before bridge data starts
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            max_bridges_per_inspector: default_max_bridges(),
            header_rows: default_header_rows(),
        }
    }
}

impl TriageConfig {
    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        for tier in &self.tiers {
            if !(tier.radius_km.is_finite() && tier.radius_km >= 0.0) {
                return Err(Error::ConfigError(format!(
                    "tier '{}' has invalid radius {}",
                    tier.name, tier.radius_km
                )));
            }
            if !tier.max_bci.is_finite() {
                return Err(Error::ConfigError(format!(
                    "tier '{}' has invalid BCI ceiling {}",
                    tier.name, tier.max_bci
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers() {
        let config = TriageConfig::default();
        assert_eq!(config.tiers.len(), 3);
        assert_eq!(config.tiers[0], PriorityTier::new("high", 500.0, 60.0));
        assert_eq!(config.tiers[1], PriorityTier::new("medium", 250.0, 70.0));
        assert_eq!(config.tiers[2], PriorityTier::new("low", 100.0, 100.0));
        assert_eq!(config.header_rows, 2);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TriageConfig::from_json(r#"{ "max_bridges_per_inspector": 3 }"#).unwrap();
        assert_eq!(config.max_bridges_per_inspector, 3);
        assert_eq!(config.tiers, default_tiers());
        assert_eq!(config.header_rows, 2);
    }

    #[test]
    fn test_custom_tiers() {
        let json = r#"{ "tiers": [ { "name": "only", "radius_km": 5.0, "max_bci": 50.0 } ] }"#;
        let config = TriageConfig::from_json(json).unwrap();
        assert_eq!(config.tiers, vec![PriorityTier::new("only", 5.0, 50.0)]);
    }

    #[test]
    fn test_invalid_json() {
        let err = TriageConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_negative_radius_rejected() {
        let json = r#"{ "tiers": [ { "name": "bad", "radius_km": -1.0, "max_bci": 50.0 } ] }"#;
        assert!(matches!(
            TriageConfig::from_json(json),
            Err(Error::ConfigError(_))
        ));
    }
}
