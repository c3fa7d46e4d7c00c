//! Enrollment statistics: lifetime aggregation per class.
//!
//! Reporting only. Feeds nothing back into admission decisions, so it reads
//! without the class lock and tolerates a stale view.

use serde::{Deserialize, Serialize};

use crate::core::admission::AdmissionService;
use crate::core::error::AdmissionError;
use crate::core::ledger::{ClassCatalog, EnrollmentStore};
use crate::core::policy::CapacityPolicy;
use crate::core::snapshot::rounded_pct;
use crate::core::types::{ClassId, ClassOffering, EnrollmentRecord, EnrollmentState};

/// Aggregated lifetime counts and ratios for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStats {
    /// Class the stats describe.
    pub class_id: ClassId,
    /// Records currently in the `Enrolled` state.
    pub enrolled: u32,
    /// Records currently in the `Waitlisted` state.
    pub waitlisted: u32,
    /// Records in the `Dropped` state, lifetime.
    pub dropped: u32,
    /// Records in the `Completed` state, lifetime.
    pub completed: u32,
    /// `enrolled / max_capacity` as a rounded percentage.
    pub capacity_utilization: u32,
    /// `enrolled / (enrolled + waitlisted)` as a rounded percentage,
    /// `0` when nobody is enrolled or waiting.
    pub waitlist_conversion_rate: u32,
}

impl ClassStats {
    /// All-zero stats for a class unknown to the catalog.
    #[must_use]
    pub const fn zeroed(class_id: ClassId) -> Self {
        Self {
            class_id,
            enrolled: 0,
            waitlisted: 0,
            dropped: 0,
            completed: 0,
            capacity_utilization: 0,
            waitlist_conversion_rate: 0,
        }
    }
}

/// Aggregate all historical records for one class into stats.
#[must_use]
pub fn aggregate_stats(
    class_id: ClassId,
    offering: Option<&ClassOffering>,
    records: &[EnrollmentRecord],
    policy: &CapacityPolicy,
) -> ClassStats {
    let Some(offering) = offering else {
        return ClassStats::zeroed(class_id);
    };

    let mut enrolled = 0u32;
    let mut waitlisted = 0u32;
    let mut dropped = 0u32;
    let mut completed = 0u32;
    for record in records {
        match record.state {
            EnrollmentState::Enrolled => enrolled += 1,
            EnrollmentState::Waitlisted => waitlisted += 1,
            EnrollmentState::Dropped => dropped += 1,
            EnrollmentState::Completed => completed += 1,
        }
    }

    let max_capacity = offering
        .max_seats
        .unwrap_or_else(|| policy.default_capacity(&offering.offering_type));

    ClassStats {
        class_id,
        enrolled,
        waitlisted,
        dropped,
        completed,
        capacity_utilization: rounded_pct(enrolled, max_capacity),
        waitlist_conversion_rate: rounded_pct(enrolled, enrolled + waitlisted),
    }
}

impl<S> AdmissionService<S>
where
    S: EnrollmentStore + ClassCatalog,
{
    /// Lifetime statistics for a class.
    ///
    /// An unknown class yields zeroed stats rather than an error; this is a
    /// reporting surface and absence reads as "nothing happened".
    pub fn stats(&self, class_id: ClassId) -> Result<ClassStats, AdmissionError> {
        let offering = self.store().class(class_id)?;
        let records = self.store().records_for_class(class_id)?;
        Ok(aggregate_stats(
            class_id,
            offering.as_ref(),
            &records,
            self.policy(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn zeroed_for_unknown_class() {
        let class_id = Uuid::new_v4();
        let stats = aggregate_stats(class_id, None, &[], &CapacityPolicy::default());
        assert_eq!(stats, ClassStats::zeroed(class_id));
    }

    #[test]
    fn lifetime_counts_and_rates() {
        let class = ClassOffering::new("Basic").with_max_seats(6);
        let mut records = Vec::new();
        for _ in 0..3 {
            records.push(EnrollmentRecord::new_enrolled(class.id, Uuid::new_v4(), 1));
        }
        records.push(EnrollmentRecord::new_waitlisted(
            class.id,
            Uuid::new_v4(),
            1,
            2,
        ));
        let mut gone = EnrollmentRecord::new_enrolled(class.id, Uuid::new_v4(), 1);
        gone.mark_dropped(3);
        records.push(gone);
        let mut done = EnrollmentRecord::new_enrolled(class.id, Uuid::new_v4(), 1);
        done.state = EnrollmentState::Completed;
        records.push(done);

        let stats = aggregate_stats(class.id, Some(&class), &records, &CapacityPolicy::default());
        assert_eq!(stats.enrolled, 3);
        assert_eq!(stats.waitlisted, 1);
        assert_eq!(stats.dropped, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.capacity_utilization, 50);
        assert_eq!(stats.waitlist_conversion_rate, 75);
    }

    #[test]
    fn conversion_rate_zero_when_empty() {
        let class = ClassOffering::new("Basic").with_max_seats(6);
        let stats = aggregate_stats(class.id, Some(&class), &[], &CapacityPolicy::default());
        assert_eq!(stats.waitlist_conversion_rate, 0);
        assert_eq!(stats.capacity_utilization, 0);
    }
}
