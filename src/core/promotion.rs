//! Waitlist promotion: fill freed seats in FIFO order and keep positions
//! contiguous.
//!
//! Promotion order is strictly by `waitlisted_at` ascending: the first to
//! wait is the first promoted, and renumbering never reorders by any other
//! key. After every mutation the positions of the remaining waitlisted
//! records form `1..n` with no gaps and no duplicates.

use crate::core::admission::AdmissionService;
use crate::core::error::AdmissionError;
use crate::core::ledger::{ClassCatalog, EnrollmentStore};
use crate::core::types::{ClassId, PromotionOutcome};
use crate::util::clock::now_ms;

impl<S> AdmissionService<S>
where
    S: EnrollmentStore + ClassCatalog,
{
    /// Promote the earliest-waitlisted student into a free seat.
    ///
    /// Invoked automatically after every [`Self::drop_student`]; call it in
    /// a loop after a capacity increase to fill every new seat.
    pub fn promote_next(&self, class_id: ClassId) -> Result<PromotionOutcome, AdmissionError> {
        let lock = self.locks().class_lock(class_id);
        let _guard = lock.lock();
        self.promote_next_locked(class_id)
    }

    /// Promotion body; the caller must hold the class lock.
    pub(crate) fn promote_next_locked(
        &self,
        class_id: ClassId,
    ) -> Result<PromotionOutcome, AdmissionError> {
        let snap = self.snapshot(class_id)?;
        if snap.available_spots == 0 {
            tracing::debug!(%class_id, "no free seat, promotion skipped");
            return Ok(PromotionOutcome::NoSeatAvailable);
        }

        let waiting = self.store().waitlisted_for_class(class_id)?;
        let Some(mut head) = waiting.into_iter().next() else {
            tracing::debug!(%class_id, "waitlist empty, nothing to promote");
            return Ok(PromotionOutcome::WaitlistEmpty);
        };

        let promoted_student = head.student_id;
        head.promote(now_ms());
        self.store().update(head)?;
        tracing::info!(%class_id, student_id = %promoted_student, "waitlisted student promoted");
        self.record_audit(class_id, &promoted_student.to_string(), "promote", None);

        self.renumber_waitlist(class_id)?;
        Ok(PromotionOutcome::Promoted(promoted_student))
    }

    /// Re-number the remaining waitlist into a contiguous `1..n` sequence
    /// ordered by `waitlisted_at` ascending. The caller must hold the class
    /// lock. Records already at their position are not rewritten.
    pub(crate) fn renumber_waitlist(&self, class_id: ClassId) -> Result<(), AdmissionError> {
        let waiting = self.store().waitlisted_for_class(class_id)?;
        let now = now_ms();
        for (index, mut record) in waiting.into_iter().enumerate() {
            let position = u32::try_from(index + 1).unwrap_or(u32::MAX);
            if record.waitlist_position == Some(position) {
                continue;
            }
            record.waitlist_position = Some(position);
            record.updated_at_ms = now;
            self.store().update(record)?;
        }
        Ok(())
    }
}
