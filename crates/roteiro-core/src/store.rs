//! In-memory chronological store of itinerary records.

use log::debug;

use crate::{
    error::{Result, RoteiroError},
    models::ItineraryRecord,
};

/// What [`ItineraryStore::upsert`] did with the submitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The record was appended.
    Created,
    /// The selected record was overwritten; holds the record it replaced.
    Updated { replaced: Box<ItineraryRecord> },
}

/// Ordered collection of records plus the single edit selection.
///
/// Iteration order is always non-decreasing by sort key; records with equal
/// keys keep their insertion order. Positions change whenever the store is
/// re-sorted, so callers must not keep positions across mutations.
#[derive(Debug, Clone, Default)]
pub struct ItineraryStore {
    records: Vec<ItineraryRecord>,
    selected: Option<usize>,
}

impl ItineraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces a record, then re-sorts.
    ///
    /// With a selection active the selected slot is overwritten and the
    /// selection cleared; otherwise the record is appended. The record's new
    /// position is not reported.
    pub fn upsert(&mut self, record: ItineraryRecord) -> UpsertOutcome {
        let outcome = match self.selected.take() {
            Some(index) => {
                let replaced = std::mem::replace(&mut self.records[index], record);
                debug!("Replaced itinerary entry at position {index}");
                UpsertOutcome::Updated {
                    replaced: Box::new(replaced),
                }
            }
            None => {
                self.records.push(record);
                debug!("Appended itinerary entry ({} total)", self.records.len());
                UpsertOutcome::Created
            }
        };
        self.sort();
        outcome
    }

    /// Selects the record at `index` so the next upsert overwrites it.
    ///
    /// # Errors
    ///
    /// Returns `RoteiroError::IndexOutOfRange` and leaves the selection
    /// unchanged if there is no record at `index`.
    pub fn select(&mut self, index: usize) -> Result<&ItineraryRecord> {
        let len = self.records.len();
        let record = self
            .records
            .get(index)
            .ok_or(RoteiroError::IndexOutOfRange { index, len })?;
        self.selected = Some(index);
        Ok(record)
    }

    /// Drops the selection; the next upsert appends.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Position of the record the next upsert will overwrite.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Removes a single record and clears the selection.
    ///
    /// # Errors
    ///
    /// Returns `RoteiroError::IndexOutOfRange` if there is no record at
    /// `index`; the store is left untouched.
    pub fn remove(&mut self, index: usize) -> Result<ItineraryRecord> {
        let len = self.records.len();
        if index >= len {
            return Err(RoteiroError::IndexOutOfRange { index, len });
        }
        self.selected = None;
        Ok(self.records.remove(index))
    }

    /// Empties the store and clears the selection.
    ///
    /// Asking the user for confirmation is up to the caller.
    pub fn delete_all(&mut self) {
        debug!("Clearing {} itinerary entries", self.records.len());
        self.records.clear();
        self.selected = None;
    }

    /// Replaces every record at once, as an import does.
    pub fn replace_all(&mut self, records: Vec<ItineraryRecord>) {
        self.records = records;
        self.selected = None;
        self.sort();
    }

    /// Records in chronological order.
    pub fn all(&self) -> &[ItineraryRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ItineraryRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sort(&mut self) {
        self.records.sort_by_key(ItineraryRecord::sort_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SubmitTrip;

    fn record(origin: &str, date: &str, time: &str) -> ItineraryRecord {
        ItineraryRecord::build(
            &SubmitTrip {
                origin: origin.to_string(),
                destination: "Porto".to_string(),
                category: "Cultural".to_string(),
                date: date.to_string(),
                time: time.to_string(),
                notes: None,
            },
            "",
        )
        .expect("valid record")
    }

    fn origins(store: &ItineraryStore) -> Vec<&str> {
        store.all().iter().map(ItineraryRecord::origin).collect()
    }

    #[test]
    fn test_upsert_appends_in_chronological_order() {
        let mut store = ItineraryStore::new();
        assert_eq!(store.upsert(record("B", "16/08/2025", "09:00")), UpsertOutcome::Created);
        store.upsert(record("C", "16/08/2025", "18:00"));
        store.upsert(record("A", "15/08/2025", "23:59"));

        assert_eq!(origins(&store), vec!["A", "B", "C"]);
        assert!(store
            .all()
            .windows(2)
            .all(|pair| pair[0].sort_key() <= pair[1].sort_key()));
    }

    #[test]
    fn test_equal_keys_keep_insertion_order() {
        let mut store = ItineraryStore::new();
        store.upsert(record("first", "01/01/2026", "10:00"));
        store.upsert(record("second", "01/01/2026", "10:00"));
        store.upsert(record("early", "01/01/2026", "08:00"));
        assert_eq!(origins(&store), vec!["early", "first", "second"]);
    }

    #[test]
    fn test_upsert_with_selection_replaces_and_resorts() {
        let mut store = ItineraryStore::new();
        store.upsert(record("A", "15/08/2025", "09:00"));
        store.upsert(record("B", "16/08/2025", "09:00"));

        store.select(0).expect("valid index");
        let outcome = store.upsert(record("A2", "17/08/2025", "09:00"));

        assert!(
            matches!(outcome, UpsertOutcome::Updated { ref replaced } if replaced.origin() == "A")
        );
        assert_eq!(origins(&store), vec!["B", "A2"]);
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_selection_is_cleared_after_upsert() {
        let mut store = ItineraryStore::new();
        store.upsert(record("A", "15/08/2025", "09:00"));
        store.select(0).expect("valid index");
        store.upsert(record("A", "15/08/2025", "09:00"));
        assert_eq!(store.selected(), None);

        store.upsert(record("B", "15/08/2025", "10:00"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_select_out_of_range_keeps_selection() {
        let mut store = ItineraryStore::new();
        store.upsert(record("A", "15/08/2025", "09:00"));
        store.select(0).expect("valid index");

        let err = store.select(3).unwrap_err();
        assert!(matches!(err, RoteiroError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(store.selected(), Some(0));
    }

    #[test]
    fn test_deselect() {
        let mut store = ItineraryStore::new();
        store.upsert(record("A", "15/08/2025", "09:00"));
        store.select(0).expect("valid index");
        store.deselect();
        store.upsert(record("B", "15/08/2025", "09:00"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut store = ItineraryStore::new();
        store.upsert(record("A", "15/08/2025", "09:00"));
        store.upsert(record("B", "16/08/2025", "09:00"));
        store.select(1).expect("valid index");

        let removed = store.remove(0).expect("valid index");
        assert_eq!(removed.origin(), "A");
        assert_eq!(origins(&store), vec!["B"]);
        assert_eq!(store.selected(), None);

        assert!(store.remove(5).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_all_clears_records_and_selection() {
        let mut store = ItineraryStore::new();
        store.upsert(record("A", "15/08/2025", "09:00"));
        store.select(0).expect("valid index");
        store.delete_all();
        assert!(store.is_empty());
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_replace_all_sorts_and_clears_selection() {
        let mut store = ItineraryStore::new();
        store.upsert(record("old", "01/01/2020", "09:00"));
        store.select(0).expect("valid index");

        store.replace_all(vec![
            record("late", "02/01/2026", "09:00"),
            record("early", "01/01/2026", "09:00"),
        ]);
        assert_eq!(origins(&store), vec!["early", "late"]);
        assert_eq!(store.selected(), None);
    }
}
