//! Ledger store abstractions.
//!
//! The enrollment ledger and the class catalog live in an external store;
//! these traits are the boundary this core consumes. Backends must be
//! internally thread-safe — the check-then-claim atomicity on top of them
//! is provided by the admission controller's per-class lock, not by the
//! store.

use crate::core::error::StoreError;
use crate::core::types::{ClassId, ClassOffering, EnrollmentRecord, StudentId};

/// Append/update log of enrollment records.
pub trait EnrollmentStore: Send + Sync {
    /// Insert a new record, rejecting a duplicate record id.
    fn insert(&self, record: EnrollmentRecord) -> Result<(), StoreError>;

    /// Replace an existing record by id.
    fn update(&self, record: EnrollmentRecord) -> Result<(), StoreError>;

    /// The non-terminal record for a `(class, student)` pair, if any.
    /// At most one can exist; duplicate admission is rejected upstream.
    fn find_active(
        &self,
        class_id: ClassId,
        student_id: StudentId,
    ) -> Result<Option<EnrollmentRecord>, StoreError>;

    /// All records for a class, terminal states included.
    fn records_for_class(&self, class_id: ClassId) -> Result<Vec<EnrollmentRecord>, StoreError>;

    /// Waitlisted records for a class in FIFO order: `waitlisted_at`
    /// ascending, position as the tie-break.
    fn waitlisted_for_class(&self, class_id: ClassId)
        -> Result<Vec<EnrollmentRecord>, StoreError>;
}

/// Read/write access to the class catalog.
pub trait ClassCatalog: Send + Sync {
    /// Fetch one offering by id.
    fn class(&self, class_id: ClassId) -> Result<Option<ClassOffering>, StoreError>;

    /// Insert a new offering, rejecting a duplicate class id.
    fn insert_class(&self, offering: ClassOffering) -> Result<(), StoreError>;

    /// Replace an existing offering by id, e.g. an operator capacity change.
    fn update_class(&self, offering: ClassOffering) -> Result<(), StoreError>;

    /// All offerings currently marked active.
    fn active_classes(&self) -> Result<Vec<ClassOffering>, StoreError>;
}
