//! In-memory ledger store and class catalog.
//!
//! Thread-safe via `RwLock`-guarded maps. Linear scans are fine at the
//! scale this backend targets (development, testing, single-tenant
//! deployments); the Postgres adapter is the path for anything larger.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::core::error::StoreError;
use crate::core::ledger::{ClassCatalog, EnrollmentStore};
use crate::core::types::{
    ClassId, ClassOffering, EnrollmentRecord, EnrollmentState, RecordId, StudentId,
};

/// In-memory backend implementing both the ledger and the catalog.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<RecordId, EnrollmentRecord>>,
    classes: RwLock<HashMap<ClassId, ClassOffering>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of ledger records, terminal states included.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.read().len()
    }
}

impl EnrollmentStore for InMemoryStore {
    fn insert(&self, record: EnrollmentRecord) -> Result<(), StoreError> {
        let mut records = self.records.write();
        if records.contains_key(&record.id) {
            return Err(StoreError::Duplicate);
        }
        records.insert(record.id, record);
        Ok(())
    }

    fn update(&self, record: EnrollmentRecord) -> Result<(), StoreError> {
        let mut records = self.records.write();
        if !records.contains_key(&record.id) {
            return Err(StoreError::RecordNotFound);
        }
        records.insert(record.id, record);
        Ok(())
    }

    fn find_active(
        &self,
        class_id: ClassId,
        student_id: StudentId,
    ) -> Result<Option<EnrollmentRecord>, StoreError> {
        let records = self.records.read();
        Ok(records
            .values()
            .find(|r| {
                r.class_id == class_id && r.student_id == student_id && !r.state.is_terminal()
            })
            .cloned())
    }

    fn records_for_class(&self, class_id: ClassId) -> Result<Vec<EnrollmentRecord>, StoreError> {
        let records = self.records.read();
        Ok(records
            .values()
            .filter(|r| r.class_id == class_id)
            .cloned()
            .collect())
    }

    fn waitlisted_for_class(
        &self,
        class_id: ClassId,
    ) -> Result<Vec<EnrollmentRecord>, StoreError> {
        let records = self.records.read();
        let mut waiting: Vec<EnrollmentRecord> = records
            .values()
            .filter(|r| r.class_id == class_id && r.state == EnrollmentState::Waitlisted)
            .cloned()
            .collect();
        // FIFO: first to wait sorts first; position breaks ms-resolution ties.
        waiting.sort_by_key(|r| (r.waitlisted_at_ms, r.waitlist_position));
        Ok(waiting)
    }
}

impl ClassCatalog for InMemoryStore {
    fn class(&self, class_id: ClassId) -> Result<Option<ClassOffering>, StoreError> {
        Ok(self.classes.read().get(&class_id).cloned())
    }

    fn insert_class(&self, offering: ClassOffering) -> Result<(), StoreError> {
        let mut classes = self.classes.write();
        if classes.contains_key(&offering.id) {
            return Err(StoreError::Duplicate);
        }
        classes.insert(offering.id, offering);
        Ok(())
    }

    fn update_class(&self, offering: ClassOffering) -> Result<(), StoreError> {
        let mut classes = self.classes.write();
        if !classes.contains_key(&offering.id) {
            return Err(StoreError::RecordNotFound);
        }
        classes.insert(offering.id, offering);
        Ok(())
    }

    fn active_classes(&self) -> Result<Vec<ClassOffering>, StoreError> {
        Ok(self
            .classes
            .read()
            .values()
            .filter(|c| c.active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn insert_rejects_duplicate_record_id() {
        let store = InMemoryStore::new();
        let record = EnrollmentRecord::new_enrolled(Uuid::new_v4(), Uuid::new_v4(), 1);
        store.insert(record.clone()).unwrap();
        assert!(matches!(
            store.insert(record),
            Err(StoreError::Duplicate)
        ));
    }

    #[test]
    fn update_requires_existing_record() {
        let store = InMemoryStore::new();
        let record = EnrollmentRecord::new_enrolled(Uuid::new_v4(), Uuid::new_v4(), 1);
        assert!(matches!(
            store.update(record),
            Err(StoreError::RecordNotFound)
        ));
    }

    #[test]
    fn find_active_ignores_terminal_records() {
        let store = InMemoryStore::new();
        let class = Uuid::new_v4();
        let student = Uuid::new_v4();

        let mut dropped = EnrollmentRecord::new_enrolled(class, student, 1);
        dropped.mark_dropped(2);
        store.insert(dropped).unwrap();
        assert!(store.find_active(class, student).unwrap().is_none());

        let live = EnrollmentRecord::new_waitlisted(class, student, 1, 3);
        store.insert(live).unwrap();
        let found = store.find_active(class, student).unwrap().unwrap();
        assert_eq!(found.state, EnrollmentState::Waitlisted);
    }

    #[test]
    fn waitlist_comes_back_in_fifo_order() {
        let store = InMemoryStore::new();
        let class = Uuid::new_v4();
        let late = EnrollmentRecord::new_waitlisted(class, Uuid::new_v4(), 3, 300);
        let early = EnrollmentRecord::new_waitlisted(class, Uuid::new_v4(), 1, 100);
        let mid = EnrollmentRecord::new_waitlisted(class, Uuid::new_v4(), 2, 200);
        store.insert(late.clone()).unwrap();
        store.insert(early.clone()).unwrap();
        store.insert(mid.clone()).unwrap();

        let waiting = store.waitlisted_for_class(class).unwrap();
        let ids: Vec<RecordId> = waiting.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![early.id, mid.id, late.id]);
    }

    #[test]
    fn active_classes_filters_inactive() {
        let store = InMemoryStore::new();
        let active = ClassOffering::new("Basic");
        let mut inactive = ClassOffering::new("Basic");
        inactive.active = false;
        store.insert_class(active.clone()).unwrap();
        store.insert_class(inactive).unwrap();

        let listed = store.active_classes().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, active.id);
    }
}
