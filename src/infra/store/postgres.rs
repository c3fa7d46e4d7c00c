//! Postgres-backed ledger store adapter (schema and interface stubs).
//!
//! The relational store is an external collaborator; this adapter carries
//! the schema that collaborator needs — including the partial unique index
//! that gives insert-with-duplicate-rejection for live `(class, student)`
//! pairs — while the actual client wiring is left to the integration layer.

use crate::core::error::StoreError;
use crate::core::ledger::{ClassCatalog, EnrollmentStore};
use crate::core::types::{ClassId, ClassOffering, EnrollmentRecord, StudentId};

/// Postgres ledger adapter placeholder.
pub struct PostgresStore;

impl PostgresStore {
    /// Migration statements for the enrollment ledger and class catalog.
    #[must_use]
    pub fn migrations() -> &'static [&'static str] {
        &[
            r"
CREATE TABLE IF NOT EXISTS ca_classes (
    id UUID PRIMARY KEY,
    offering_type TEXT NOT NULL,
    max_seats INT,
    duration_min INT NOT NULL,
    price_cents BIGINT NOT NULL,
    teacher_id UUID,
    active BOOLEAN NOT NULL DEFAULT TRUE,
    overflow_source UUID REFERENCES ca_classes (id),
    overflow_reason TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_ca_classes_active ON ca_classes (active);
",
            r"
CREATE TABLE IF NOT EXISTS ca_enrollments (
    id UUID PRIMARY KEY,
    class_id UUID NOT NULL REFERENCES ca_classes (id),
    student_id UUID NOT NULL,
    state TEXT NOT NULL,
    waitlist_position INT,
    enrolled_at TIMESTAMPTZ,
    waitlisted_at TIMESTAMPTZ,
    dropped_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_ca_enrollments_live_pair
    ON ca_enrollments (class_id, student_id)
    WHERE state IN ('enrolled', 'waitlisted');
CREATE INDEX IF NOT EXISTS idx_ca_enrollments_class_state ON ca_enrollments (class_id, state);
CREATE INDEX IF NOT EXISTS idx_ca_enrollments_waitlist
    ON ca_enrollments (class_id, waitlisted_at)
    WHERE state = 'waitlisted';
",
        ]
    }
}

impl EnrollmentStore for PostgresStore {
    fn insert(&self, _record: EnrollmentRecord) -> Result<(), StoreError> {
        Err(StoreError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }

    fn update(&self, _record: EnrollmentRecord) -> Result<(), StoreError> {
        Err(StoreError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }

    fn find_active(
        &self,
        _class_id: ClassId,
        _student_id: StudentId,
    ) -> Result<Option<EnrollmentRecord>, StoreError> {
        Err(StoreError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }

    fn records_for_class(&self, _class_id: ClassId) -> Result<Vec<EnrollmentRecord>, StoreError> {
        Err(StoreError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }

    fn waitlisted_for_class(
        &self,
        _class_id: ClassId,
    ) -> Result<Vec<EnrollmentRecord>, StoreError> {
        Err(StoreError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }
}

impl ClassCatalog for PostgresStore {
    fn class(&self, _class_id: ClassId) -> Result<Option<ClassOffering>, StoreError> {
        Err(StoreError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }

    fn insert_class(&self, _offering: ClassOffering) -> Result<(), StoreError> {
        Err(StoreError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }

    fn update_class(&self, _offering: ClassOffering) -> Result<(), StoreError> {
        Err(StoreError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }

    fn active_classes(&self) -> Result<Vec<ClassOffering>, StoreError> {
        Err(StoreError::Backend(
            "postgres store not wired to database client".into(),
        ))
    }
}
