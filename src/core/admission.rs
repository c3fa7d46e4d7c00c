//! Admission controller: the enroll/waitlist/drop state machine.
//!
//! Owns the correctness-critical "check capacity, then claim the seat"
//! sequence. Every mutating operation for a class runs inside that class's
//! mutex from the [`ClassLocks`] registry, so two concurrent callers can
//! never both observe one free seat and both take it. Reads used purely for
//! reporting go through [`AdmissionService::snapshot`] without the lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::audit::{build_admission_event, AuditSink};
use crate::core::error::AdmissionError;
use crate::core::ledger::{ClassCatalog, EnrollmentStore};
use crate::core::locks::ClassLocks;
use crate::core::planner::{OverflowPlanner, OverflowThresholds, SplitRecommendation};
use crate::core::policy::{CapacityPolicy, CapacityValidation};
use crate::core::snapshot::{compute_snapshot, CapacitySnapshot};
use crate::core::types::{
    AdmissionOutcome, ClassId, DropOutcome, EnrollmentRecord, EnrollmentState, PromotionOutcome,
    RejectReason, StudentId,
};
use crate::util::clock::now_ms;

/// Configuration values for admission enforcement.
#[derive(Debug, Clone, Copy)]
pub struct AdmissionLimits {
    /// Maximum waitlisted students per class before outright rejection.
    pub waitlist_limit: u32,
}

impl Default for AdmissionLimits {
    fn default() -> Self {
        Self { waitlist_limit: 10 }
    }
}

/// The admission service: capacity policy, per-class serialization, and the
/// enrollment state machine over a ledger store.
///
/// `S` is the external store providing the enrollment ledger and the class
/// catalog. The service is `Send + Sync`; share it behind an `Arc` and call
/// it from any number of threads.
pub struct AdmissionService<S> {
    store: Arc<S>,
    policy: CapacityPolicy,
    limits: AdmissionLimits,
    thresholds: OverflowThresholds,
    locks: ClassLocks,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl<S> AdmissionService<S> {
    /// Create a new service over a ledger store.
    #[must_use]
    pub fn new(store: Arc<S>, policy: CapacityPolicy, limits: AdmissionLimits) -> Self {
        Self {
            store,
            policy,
            limits,
            thresholds: OverflowThresholds::default(),
            locks: ClassLocks::new(),
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(audit)));
        self
    }

    /// Override the overflow planner thresholds.
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: OverflowThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// The ledger store backing this service.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub(crate) const fn locks(&self) -> &ClassLocks {
        &self.locks
    }

    /// The capacity policy in effect.
    #[must_use]
    pub const fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// The limits in effect.
    #[must_use]
    pub const fn limits(&self) -> &AdmissionLimits {
        &self.limits
    }

    pub(crate) fn record_audit(
        &self,
        class_id: ClassId,
        student_id: &str,
        action: &str,
        detail: Option<String>,
    ) {
        if let Some(audit_sink) = &self.audit {
            let mut sink = audit_sink.lock();
            // Keyed by a fresh uuid: timestamps alone collide within a
            // millisecond and the Postgres sink treats the key as primary.
            sink.record(build_admission_event(
                format!("{class_id}-{student_id}-{action}-{}", uuid::Uuid::new_v4()),
                class_id.to_string(),
                student_id,
                action,
                detail,
            ));
        }
    }

    /// Validate a requested capacity against the policy table for its
    /// offering type. Pure; never touches the store.
    #[must_use]
    pub fn validate_capacity(&self, offering_type: &str, requested: u32) -> CapacityValidation {
        self.policy.validate(offering_type, requested)
    }
}

impl<S> AdmissionService<S>
where
    S: EnrollmentStore + ClassCatalog,
{
    /// Compute the current capacity snapshot for a class.
    ///
    /// Takes no lock: safe to call concurrently with any number of readers
    /// and writers, at the cost of possible staleness. Admission decisions
    /// re-read under the class lock and never rely on this view.
    pub fn snapshot(&self, class_id: ClassId) -> Result<CapacitySnapshot, AdmissionError> {
        let offering = self
            .store
            .class(class_id)?
            .ok_or(AdmissionError::ClassNotFound(class_id))?;
        let records = self.store.records_for_class(class_id)?;
        Ok(compute_snapshot(
            &offering,
            &records,
            &self.policy,
            self.limits.waitlist_limit,
        ))
    }

    /// Admit a student: a seat if one is free, else a waitlist position if
    /// the waitlist has room, else rejection. Duplicate requests for a pair
    /// with a live record are rejected.
    ///
    /// The duplicate check, the capacity read, and the record write execute
    /// as one critical section under the class lock.
    pub fn admit(
        &self,
        class_id: ClassId,
        student_id: StudentId,
    ) -> Result<AdmissionOutcome, AdmissionError> {
        let lock = self.locks.class_lock(class_id);
        let _guard = lock.lock();

        let offering = self
            .store
            .class(class_id)?
            .ok_or(AdmissionError::ClassNotFound(class_id))?;

        if let Some(existing) = self.store.find_active(class_id, student_id)? {
            let reason = if existing.state == EnrollmentState::Waitlisted {
                RejectReason::AlreadyWaitlisted
            } else {
                RejectReason::AlreadyEnrolled
            };
            tracing::warn!(%class_id, %student_id, ?reason, "duplicate admission rejected");
            self.record_audit(
                class_id,
                &student_id.to_string(),
                "reject",
                Some(format!("{reason:?}")),
            );
            return Ok(AdmissionOutcome::Rejected(reason));
        }

        let records = self.store.records_for_class(class_id)?;
        let snap = compute_snapshot(&offering, &records, &self.policy, self.limits.waitlist_limit);
        let now = now_ms();

        if snap.available_spots > 0 {
            let record = EnrollmentRecord::new_enrolled(class_id, student_id, now);
            let record_id = record.id;
            self.store.insert(record)?;
            tracing::info!(
                %class_id,
                %student_id,
                seats_used = snap.current_enrolled + 1,
                max_capacity = snap.max_capacity,
                "student enrolled"
            );
            self.record_audit(class_id, &student_id.to_string(), "admit", None);
            return Ok(AdmissionOutcome::Enrolled { record_id });
        }

        if snap.can_accept_waitlist {
            let position = snap.waiting_list_count + 1;
            let record = EnrollmentRecord::new_waitlisted(class_id, student_id, position, now);
            let record_id = record.id;
            self.store.insert(record)?;
            tracing::info!(%class_id, %student_id, position, "student waitlisted");
            self.record_audit(
                class_id,
                &student_id.to_string(),
                "waitlist",
                Some(format!("position {position}")),
            );
            return Ok(AdmissionOutcome::Waitlisted {
                record_id,
                position,
            });
        }

        tracing::warn!(%class_id, %student_id, "class and waitlist full, admission rejected");
        self.record_audit(
            class_id,
            &student_id.to_string(),
            "reject",
            Some("ClassFullAndWaitlistFull".into()),
        );
        Ok(AdmissionOutcome::Rejected(
            RejectReason::ClassFullAndWaitlistFull,
        ))
    }

    /// Drop a student's live record, then promote the head of the waitlist
    /// into any open seat.
    ///
    /// Drop and promotion are one critical section: a concurrent `admit`
    /// cannot slip into the freed seat ahead of the head of the waitlist.
    /// Promotion runs even when the dropped student was only waitlisted,
    /// since a seat may already be open after an operator capacity raise.
    /// The outcome reports who was promoted so the caller can notify them.
    pub fn drop_student(
        &self,
        class_id: ClassId,
        student_id: StudentId,
    ) -> Result<DropOutcome, AdmissionError> {
        let lock = self.locks.class_lock(class_id);
        let _guard = lock.lock();

        let Some(mut record) = self.store.find_active(class_id, student_id)? else {
            tracing::debug!(%class_id, %student_id, "drop requested for a student with no live record");
            return Ok(DropOutcome::NotEnrolled);
        };

        let freed_seat = record.state == EnrollmentState::Enrolled;
        record.mark_dropped(now_ms());
        self.store.update(record)?;
        tracing::info!(%class_id, %student_id, freed_seat, "student dropped");
        self.record_audit(class_id, &student_id.to_string(), "drop", None);

        let promoted = match self.promote_next_locked(class_id)? {
            PromotionOutcome::Promoted(promoted_student) => Some(promoted_student),
            PromotionOutcome::NoSeatAvailable | PromotionOutcome::WaitlistEmpty => {
                // No promotion to renumber behind; close any gap directly.
                self.renumber_waitlist(class_id)?;
                None
            }
        };
        Ok(DropOutcome::Dropped { promoted })
    }

    /// Classes whose utilization warrants operator attention.
    ///
    /// Delegates to the overflow planner over the same store; see
    /// [`OverflowPlanner::classes_needing_attention`].
    pub fn classes_needing_attention(&self) -> Result<Vec<SplitRecommendation>, AdmissionError> {
        self.planner().classes_needing_attention()
    }

    /// Spawn an overflow sibling for an over-subscribed class.
    ///
    /// Delegates to the overflow planner; see
    /// [`OverflowPlanner::create_overflow_class`].
    pub fn create_overflow_class(&self, source_class_id: ClassId) -> Result<ClassId, AdmissionError> {
        let new_class_id = self.planner().create_overflow_class(source_class_id)?;
        self.record_audit(
            source_class_id,
            "-",
            "overflow",
            Some(format!("spawned {new_class_id}")),
        );
        Ok(new_class_id)
    }

    /// A planner sharing this service's store, policy, and thresholds.
    #[must_use]
    pub fn planner(&self) -> OverflowPlanner<S> {
        OverflowPlanner::new(
            Arc::clone(&self.store),
            self.policy.clone(),
            self.thresholds,
            self.limits.waitlist_limit,
        )
    }
}
