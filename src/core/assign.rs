//! Inspector dispatch
//!
//! Greedy, first-come first-served assignment of bridges to inspectors.
//! Inspectors are served in input order; each claims, in table order, up to
//! `max_bridges` still-unclaimed bridges that satisfy at least one priority
//! tier. A claimed bridge is gone for every later inspector.

use log::debug;

use crate::core::config::PriorityTier;
use crate::core::geo::Location;
use crate::core::record::{BridgeId, BridgeRecord};
use crate::core::table::BridgeTable;

/// Whether `bridge` qualifies for an inspector at `inspector` under any tier.
///
/// Tiers are independent alternatives: the bridge needs to be inside one
/// tier's radius and at or below that same tier's BCI ceiling. Bridges with
/// no BCI reading never qualify.
pub fn is_eligible(bridge: &BridgeRecord, inspector: &Location, tiers: &[PriorityTier]) -> bool {
    let Some(latest) = bridge.latest_bci() else {
        return false;
    };
    let distance = inspector.distance_to(&bridge.location);

    tiers
        .iter()
        .any(|tier| distance <= tier.radius_km && latest <= tier.max_bci)
}

/// Assign bridges to inspectors.
///
/// Returns one list per inspector, in input order; each list holds at most
/// `max_bridges` identities in table order and no identity appears twice
/// across the result.
pub fn assign_inspectors(
    table: &BridgeTable,
    inspectors: &[Location],
    max_bridges: usize,
    tiers: &[PriorityTier],
) -> Vec<Vec<BridgeId>> {
    let mut pool: Vec<BridgeId> = table.ids();
    let mut assignment = Vec::with_capacity(inspectors.len());

    for (index, inspector) in inspectors.iter().enumerate() {
        let mut claimed: Vec<BridgeId> = Vec::new();

        for &id in &pool {
            if claimed.len() >= max_bridges {
                break;
            }
            let Some(bridge) = table.get(id) else {
                continue;
            };
            if is_eligible(bridge, inspector, tiers) {
                claimed.push(id);
            }
        }

        pool.retain(|id| !claimed.contains(id));
        debug!(
            "Inspector {index} at ({}, {}) claimed {} bridge(s), {} left in pool",
            inspector.lat,
            inspector.lon,
            claimed.len(),
            pool.len()
        );
        assignment.push(claimed);
    }

    assignment
}
