//! Point-in-time capacity accounting derived from the ledger.
//!
//! A snapshot is a pure function of the enrollment records for one class.
//! Nothing caches or mutates it, which rules out stale-counter bugs at the
//! cost of one extra read per admission decision.

use serde::{Deserialize, Serialize};

use crate::core::policy::CapacityPolicy;
use crate::core::types::{ClassId, ClassOffering, EnrollmentRecord, EnrollmentState};

/// Computed capacity facts for one class at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySnapshot {
    /// Class the snapshot describes.
    pub class_id: ClassId,
    /// Records currently in the `Enrolled` state.
    pub current_enrolled: u32,
    /// Declared seat count, or the policy default for the offering type.
    pub max_capacity: u32,
    /// Records currently in the `Waitlisted` state.
    pub waiting_list_count: u32,
    /// `max(0, max_capacity - current_enrolled)`.
    pub available_spots: u32,
    /// Whether every seat is occupied.
    pub is_full: bool,
    /// Whether the waitlist is below its ceiling.
    pub can_accept_waitlist: bool,
    /// `current_enrolled / max_capacity` as a rounded percentage.
    pub capacity_utilization: u32,
}

fn count_in_state(records: &[EnrollmentRecord], state: EnrollmentState) -> u32 {
    let n = records.iter().filter(|r| r.state == state).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Rounded percentage, `0` when the denominator is zero.
#[must_use]
pub fn rounded_pct(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    // Integer rounding; values stay far below u32 overflow territory
    // because u64 arithmetic is used for the intermediate product.
    let scaled = u64::from(numerator) * 100 + u64::from(denominator) / 2;
    u32::try_from(scaled / u64::from(denominator)).unwrap_or(u32::MAX)
}

/// Compute the capacity snapshot for one class from its ledger records.
///
/// `records` must be all records for the class; terminal states are
/// ignored here and only matter to statistics.
#[must_use]
pub fn compute_snapshot(
    offering: &ClassOffering,
    records: &[EnrollmentRecord],
    policy: &CapacityPolicy,
    waitlist_limit: u32,
) -> CapacitySnapshot {
    let max_capacity = offering
        .max_seats
        .unwrap_or_else(|| policy.default_capacity(&offering.offering_type));
    let current_enrolled = count_in_state(records, EnrollmentState::Enrolled);
    let waiting_list_count = count_in_state(records, EnrollmentState::Waitlisted);
    let available_spots = max_capacity.saturating_sub(current_enrolled);

    CapacitySnapshot {
        class_id: offering.id,
        current_enrolled,
        max_capacity,
        waiting_list_count,
        available_spots,
        is_full: available_spots == 0,
        can_accept_waitlist: waiting_list_count < waitlist_limit,
        capacity_utilization: rounded_pct(current_enrolled, max_capacity),
    }
}
