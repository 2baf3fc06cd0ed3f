//! # Bridge-triage Library
//!
//! Condition queries and inspector dispatch over a highway bridge inventory.
//!
//! ## Features
//!
//! - **Direct lookups**: bridge identity doubles as table position
//! - **Geospatial queries**: haversine distances, nearest bridge, radius search
//! - **Condition queries**: average BCI, most-recent-BCI thresholds
//! - **Inspector dispatch**: greedy, tiered, capacity-bounded assignment
//! - **Field updates**: record inspections and rehabilitation events in place
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use bridge_triage::{assign_inspectors, IngestOptions, Location, TriageConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut table = bridge_triage::load_bridges(
//!         std::path::Path::new("bridge_data.csv"),
//!         &IngestOptions::default(),
//!     )?;
//!
//!     println!("Average BCI of bridge 3: {}", table.average_bci(3));
//!     println!("Closest to bridge 3: {:?}", table.closest_bridge(3));
//!
//!     let config = TriageConfig::default();
//!     let inspectors = [Location::new(43.10, -80.15), Location::new(45.03, -81.33)];
//!     let plan = assign_inspectors(&table, &inspectors, 5, &config.tiers);
//!     println!("Dispatch plan: {plan:?}");
//!
//!     table.record_inspection(&[1, 2], "09/15/2018", 71.9);
//!     Ok(())
//! }
//! ```

// Re-export core types that users might need
pub use crate::core::assign::{assign_inspectors, is_eligible};
pub use crate::core::config::{default_tiers, PriorityTier, TriageConfig};
pub use crate::core::error::{suggest_highway, Error, Result};
pub use crate::core::geo::{calculate_distance, Location, EARTH_RADIUS_KM};
pub use crate::core::ingest::{load_bridges, read_bridges, IngestOptions, ProgressCallback};
pub use crate::core::query::distance_between;
pub use crate::core::record::{validate_date, BridgeId, BridgeRecord, RehabKind};
pub use crate::core::table::BridgeTable;

// Internal modules
mod core;
