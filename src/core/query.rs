//! Read-only queries over a bridge table
//!
//! Every list-returning query yields identities in table order.

use crate::core::geo::{round3, Location};
use crate::core::record::{BridgeId, BridgeRecord};
use crate::core::table::BridgeTable;

/// Distance in kilometers between two bridges, rounded to 3 decimals
pub fn distance_between(a: &BridgeRecord, b: &BridgeRecord) -> f64 {
    round3(a.location.distance_to(&b.location))
}

impl BridgeTable {
    /// Mean BCI of a bridge, or `None` for an unknown id or an empty history
    pub fn average_bci_checked(&self, id: BridgeId) -> Option<f64> {
        self.get(id)?.average_bci()
    }

    /// Mean BCI of a bridge.
    ///
    /// Returns `0.0` for an unknown id or an empty history; that value is a
    /// "no data" marker, not a condition score. Use
    /// [`average_bci_checked`](Self::average_bci_checked) to tell the two apart.
    pub fn average_bci(&self, id: BridgeId) -> f64 {
        self.average_bci_checked(id).unwrap_or(0.0)
    }

    /// Sum of total lengths of bridges on `highway` (exact, case-sensitive match)
    pub fn total_length_on_highway(&self, highway: &str) -> f64 {
        self.iter()
            .filter(|r| r.highway == highway)
            .fold(0.0, |total, r| total + r.length)
    }

    /// Distinct highway designations in order of first appearance
    pub fn highways(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in self.iter() {
            if !seen.contains(&record.highway.as_str()) {
                seen.push(&record.highway);
            }
        }
        seen
    }

    /// Distance between two bridges by id, `None` if either is unknown
    pub fn distance_between_ids(&self, a: BridgeId, b: BridgeId) -> Option<f64> {
        Some(distance_between(self.get(a)?, self.get(b)?))
    }

    /// Identity of the bridge nearest to bridge `id`, never `id` itself.
    ///
    /// Scans in table order starting from the first other bridge and only
    /// switches on a strictly smaller distance, so ties go to the earliest
    /// bridge. Returns `None` if `id` is unknown or the table has no other bridge.
    pub fn closest_bridge(&self, id: BridgeId) -> Option<BridgeId> {
        let target = self.get(id)?;
        let mut closest = self.iter().find(|r| r.id != id)?;
        let mut best = distance_between(closest, target);

        for record in self.iter().filter(|r| r.id != id) {
            let distance = distance_between(record, target);
            if distance < best {
                closest = record;
                best = distance;
            }
        }

        Some(closest.id)
    }

    /// Bridges within `radius_km` of `center` (inclusive)
    pub fn bridges_in_radius(&self, center: Location, radius_km: f64) -> Vec<BridgeId> {
        self.iter()
            .filter(|r| center.distance_to(&r.location) <= radius_km)
            .map(|r| r.id)
            .collect()
    }

    /// Bridges among `ids` whose most recent BCI is at or below `bci`.
    ///
    /// Bridges without any BCI reading never match.
    pub fn bridges_with_bci_below(&self, ids: &[BridgeId], bci: f64) -> Vec<BridgeId> {
        self.iter()
            .filter(|r| ids.contains(&r.id))
            .filter(|r| r.latest_bci().is_some_and(|latest| latest <= bci))
            .map(|r| r.id)
            .collect()
    }

    /// Bridges whose name contains `search`, ignoring case
    pub fn bridges_containing(&self, search: &str) -> Vec<BridgeId> {
        let needle = search.to_lowercase();
        self.iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .map(|r| r.id)
            .collect()
    }
}
