//! Plain-data types shared across admission components.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a class offering.
pub type ClassId = Uuid;
/// Identifier of a student.
pub type StudentId = Uuid;
/// Identifier of an enrollment record.
pub type RecordId = Uuid;
/// Identifier of a teacher assigned to a class.
pub type TeacherId = Uuid;

/// State of an enrollment record in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentState {
    /// Student occupies a seat.
    Enrolled,
    /// Student holds a waitlist position.
    Waitlisted,
    /// Student gave up the seat or the waitlist position.
    Dropped,
    /// Student finished the class.
    Completed,
}

impl EnrollmentState {
    /// Terminal states never transition again and do not occupy capacity.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Dropped | Self::Completed)
    }
}

/// One row of the enrollment ledger.
///
/// Records are never physically deleted; terminal states are retained so
/// the statistics component can aggregate lifetime history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    /// Unique record identifier.
    pub id: RecordId,
    /// Class this record belongs to.
    pub class_id: ClassId,
    /// Student this record belongs to.
    pub student_id: StudentId,
    /// Current lifecycle state.
    pub state: EnrollmentState,
    /// Set on transition into `Enrolled`, milliseconds since epoch.
    pub enrolled_at_ms: Option<u128>,
    /// Set on transition into `Waitlisted`, milliseconds since epoch.
    pub waitlisted_at_ms: Option<u128>,
    /// Set on transition into `Dropped`, milliseconds since epoch.
    pub dropped_at_ms: Option<u128>,
    /// Position in the waitlist, present only while `Waitlisted`.
    /// Positions for one class form a contiguous `1..n` sequence.
    pub waitlist_position: Option<u32>,
    /// Creation timestamp, milliseconds since epoch.
    pub created_at_ms: u128,
    /// Last mutation timestamp, milliseconds since epoch.
    pub updated_at_ms: u128,
}

impl EnrollmentRecord {
    /// Create a record directly in the `Enrolled` state.
    #[must_use]
    pub fn new_enrolled(class_id: ClassId, student_id: StudentId, now: u128) -> Self {
        Self {
            id: Uuid::new_v4(),
            class_id,
            student_id,
            state: EnrollmentState::Enrolled,
            enrolled_at_ms: Some(now),
            waitlisted_at_ms: None,
            dropped_at_ms: None,
            waitlist_position: None,
            created_at_ms: now,
            updated_at_ms: now,
        }
    }

    /// Create a record in the `Waitlisted` state at the given position.
    #[must_use]
    pub fn new_waitlisted(
        class_id: ClassId,
        student_id: StudentId,
        position: u32,
        now: u128,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            class_id,
            student_id,
            state: EnrollmentState::Waitlisted,
            enrolled_at_ms: None,
            waitlisted_at_ms: Some(now),
            dropped_at_ms: None,
            waitlist_position: Some(position),
            created_at_ms: now,
            updated_at_ms: now,
        }
    }

    /// Transition a waitlisted record into a seat.
    pub fn promote(&mut self, now: u128) {
        self.state = EnrollmentState::Enrolled;
        self.enrolled_at_ms = Some(now);
        self.waitlist_position = None;
        self.updated_at_ms = now;
    }

    /// Transition a non-terminal record to `Dropped`.
    pub fn mark_dropped(&mut self, now: u128) {
        self.state = EnrollmentState::Dropped;
        self.dropped_at_ms = Some(now);
        self.waitlist_position = None;
        self.updated_at_ms = now;
    }
}

/// Link from a spawned overflow class back to its over-subscribed source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverflowClassLink {
    /// Class the overflow instance was cloned from.
    pub source_class_id: ClassId,
    /// Why the overflow class was created.
    pub reason: String,
    /// Creation timestamp, milliseconds since epoch.
    pub created_at_ms: u128,
}

/// A schedulable unit as seen by this core.
///
/// Owned by an external catalog; admission only reads the identity, the
/// offering type (which drives capacity policy), and the declared seat
/// count. The remaining fields exist so an overflow class can be cloned
/// faithfully from its source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassOffering {
    /// Unique class identifier.
    pub id: ClassId,
    /// Offering type name, the key into the capacity policy table.
    pub offering_type: String,
    /// Declared maximum seats; falls back to the policy default when unset.
    pub max_seats: Option<u32>,
    /// Session duration in minutes.
    pub duration_min: u32,
    /// Price in cents.
    pub price_cents: u64,
    /// Assigned teacher, if any.
    pub teacher_id: Option<TeacherId>,
    /// Whether the class accepts admissions and appears in planner scans.
    pub active: bool,
    /// Present when this class was spawned as an overflow instance.
    pub overflow_of: Option<OverflowClassLink>,
}

impl ClassOffering {
    /// Create an active offering of the given type with a fresh identifier.
    #[must_use]
    pub fn new(offering_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            offering_type: offering_type.into(),
            max_seats: None,
            duration_min: 60,
            price_cents: 0,
            teacher_id: None,
            active: true,
            overflow_of: None,
        }
    }

    /// Set the declared seat count.
    #[must_use]
    pub const fn with_max_seats(mut self, max_seats: u32) -> Self {
        self.max_seats = Some(max_seats);
        self
    }

    /// Set the session duration in minutes.
    #[must_use]
    pub const fn with_duration_min(mut self, duration_min: u32) -> Self {
        self.duration_min = duration_min;
        self
    }

    /// Set the price in cents.
    #[must_use]
    pub const fn with_price_cents(mut self, price_cents: u64) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Assign a teacher.
    #[must_use]
    pub const fn with_teacher(mut self, teacher_id: TeacherId) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    /// Clone the schedulable attributes into a new overflow offering
    /// linked back to this class.
    #[must_use]
    pub fn spawn_overflow(&self, reason: impl Into<String>, now: u128) -> Self {
        Self {
            id: Uuid::new_v4(),
            offering_type: self.offering_type.clone(),
            max_seats: self.max_seats,
            duration_min: self.duration_min,
            price_cents: self.price_cents,
            teacher_id: self.teacher_id,
            active: true,
            overflow_of: Some(OverflowClassLink {
                source_class_id: self.id,
                reason: reason.into(),
                created_at_ms: now,
            }),
        }
    }
}

/// Why an admission request was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The student already occupies a seat in this class.
    AlreadyEnrolled,
    /// The student already holds a waitlist position in this class.
    AlreadyWaitlisted,
    /// All seats are taken and the waitlist is at its ceiling.
    ClassFullAndWaitlistFull,
}

/// Result of an admission request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionOutcome {
    /// Student was given a seat.
    Enrolled {
        /// The ledger record created for the seat.
        record_id: RecordId,
    },
    /// Student was placed on the waitlist.
    Waitlisted {
        /// The ledger record created for the waitlist entry.
        record_id: RecordId,
        /// Assigned position, `1`-based.
        position: u32,
    },
    /// Request was turned away.
    Rejected(RejectReason),
}

/// Result of dropping a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropOutcome {
    /// The student's record was transitioned to `Dropped`.
    Dropped {
        /// The student promoted into the freed seat, when one was.
        /// The caller is expected to notify them.
        promoted: Option<StudentId>,
    },
    /// The student holds no seat and no waitlist position in this class.
    NotEnrolled,
}

/// Result of a promotion attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionOutcome {
    /// The earliest-waitlisted student took the free seat.
    Promoted(StudentId),
    /// All seats are occupied; nothing to do.
    NoSeatAvailable,
    /// A seat is free but nobody is waiting.
    WaitlistEmpty,
}
