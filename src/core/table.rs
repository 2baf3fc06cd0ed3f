//! In-memory bridge table
//!
//! Records are stored densely: the record with identity `id` always lives
//! at position `id - 1`. Lookups index directly instead of searching, so the
//! invariant is checked once when the table is built and preserved by every
//! mutation (records are updated in place, never added, removed or renumbered).

use log::warn;
use serde::Serialize;

use crate::core::error::{Error, Result};
use crate::core::record::{year_of, BridgeId, BridgeRecord, RehabKind};

/// Dense, identity-ordered collection of bridge records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BridgeTable {
    records: Vec<BridgeRecord>,
}

impl BridgeTable {
    /// Build a table, rejecting records whose identity does not match their position
    pub fn new(records: Vec<BridgeRecord>) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            let expected = index + 1;
            if record.id as usize != expected {
                return Err(Error::InconsistentTable(format!(
                    "record at position {index} has id {} (expected {expected})",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[BridgeRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &BridgeRecord> {
        self.records.iter()
    }

    /// All identities in table order
    pub fn ids(&self) -> Vec<BridgeId> {
        self.records.iter().map(|r| r.id).collect()
    }

    fn index_of(&self, id: BridgeId) -> Option<usize> {
        let index = (id as usize).checked_sub(1)?;
        (index < self.records.len()).then_some(index)
    }

    /// Record with identity `id`, or `None` when `id` is outside the table
    pub fn get(&self, id: BridgeId) -> Option<&BridgeRecord> {
        self.index_of(id).map(|i| &self.records[i])
    }

    fn get_mut(&mut self, id: BridgeId) -> Option<&mut BridgeRecord> {
        let index = self.index_of(id)?;
        Some(&mut self.records[index])
    }

    /// Record a new inspection for every listed bridge present in the table.
    ///
    /// Sets the last-inspected date and prepends `bci` as the newest reading.
    /// Identities outside the table are ignored. A record listed more than
    /// once is still updated only once. Returns the number of records updated.
    pub fn record_inspection(&mut self, ids: &[BridgeId], date: &str, bci: f64) -> usize {
        for &id in ids {
            if self.index_of(id).is_none() {
                warn!("Ignoring inspection for unknown bridge {id}");
            }
        }

        let mut updated = 0;
        for record in self.records.iter_mut().filter(|r| ids.contains(&r.id)) {
            record.last_inspected = date.to_string();
            record.bcis.insert(0, bci);
            updated += 1;
        }
        updated
    }

    /// Record a rehabilitation event on one bridge.
    ///
    /// Overwrites exactly one of the two rehab-year fields with the year of
    /// `date`. Returns `false` without touching anything if `id` is unknown.
    pub fn record_rehab(&mut self, id: BridgeId, date: &str, kind: RehabKind) -> bool {
        let Some(record) = self.get_mut(id) else {
            warn!("Ignoring rehab for unknown bridge {id}");
            return false;
        };

        let year = year_of(date).to_string();
        match kind {
            RehabKind::Major => record.last_major_rehab = year,
            RehabKind::Minor => record.last_minor_rehab = year,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_data::three_bridges;

    #[test]
    fn test_get_valid_ids() {
        let table = three_bridges();
        for id in 1..=3 {
            assert_eq!(table.get(id).map(|r| r.id), Some(id));
        }
        assert_eq!(
            table.get(1).map(|r| r.name.as_str()),
            Some("Highway 24 Underpass at Highway 403")
        );
    }

    #[test]
    fn test_get_out_of_range() {
        let table = three_bridges();
        assert!(table.get(42).is_none());
        assert!(table.get(4).is_none());
        assert!(table.get(0).is_none());
    }

    #[test]
    fn test_new_rejects_gaps() {
        let mut records = three_bridges().records().to_vec();
        records.remove(1);
        let err = BridgeTable::new(records).unwrap_err();
        assert!(matches!(err, Error::InconsistentTable(_)));
    }

    #[test]
    fn test_record_inspection_prepends() {
        let mut table = three_bridges();
        let updated = table.record_inspection(&[1], "09/15/2018", 71.9);
        assert_eq!(updated, 1);

        let bridge = table.get(1).unwrap();
        assert_eq!(bridge.last_inspected, "09/15/2018");
        assert_eq!(
            bridge.bcis,
            vec![71.9, 72.3, 69.5, 70.0, 70.3, 70.5, 70.7, 72.9]
        );

        // Untouched bridges keep their data
        assert_eq!(table.get(2), three_bridges().get(2));
        assert_eq!(table.get(3), three_bridges().get(3));
    }

    #[test]
    fn test_record_inspection_ignores_unknown_and_duplicates() {
        let mut table = three_bridges();
        let updated = table.record_inspection(&[3, 42, 3], "01/02/2020", 88.0);
        assert_eq!(updated, 1);
        assert_eq!(table.get(3).unwrap().bcis.len(), 9);
        assert_eq!(table.get(3).unwrap().bcis[0], 88.0);
        assert_eq!(table.get(3).unwrap().bcis[1..], three_bridges().get(3).unwrap().bcis[..]);
    }

    #[test]
    fn test_record_rehab_minor() {
        let mut table = three_bridges();
        assert!(table.record_rehab(1, "09/15/2018", RehabKind::Minor));

        let bridge = table.get(1).unwrap();
        assert_eq!(bridge.last_minor_rehab, "2018");
        assert_eq!(bridge.last_major_rehab, "2014");
    }

    #[test]
    fn test_record_rehab_major() {
        let mut table = three_bridges();
        assert!(table.record_rehab(2, "09/15/2019", RehabKind::Major));

        let bridge = table.get(2).unwrap();
        assert_eq!(bridge.last_major_rehab, "2019");
        assert_eq!(bridge.last_minor_rehab, "2007");
    }

    #[test]
    fn test_record_rehab_unknown_id() {
        let mut table = three_bridges();
        assert!(!table.record_rehab(42, "09/15/2018", RehabKind::Minor));
        assert_eq!(table, three_bridges());
    }
}
