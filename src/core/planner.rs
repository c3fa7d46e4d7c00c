//! Overflow planner: utilization scanning and overflow-class spawning.
//!
//! When the admission controller and the waitlist promoter cannot fit more
//! students into one class, the planner is the release valve: it flags
//! classes pinned at or near maximum capacity and can clone an
//! over-subscribed class into a sibling "overflow" instance. It never moves
//! students between classes; reassignment is a separate workflow.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::error::AdmissionError;
use crate::core::ledger::{ClassCatalog, EnrollmentStore};
use crate::core::policy::CapacityPolicy;
use crate::core::snapshot::compute_snapshot;
use crate::core::types::{ClassId, ClassOffering};

/// Utilization percentages at which the planner raises recommendations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OverflowThresholds {
    /// Above this utilization, recommend raising the class capacity.
    pub increase_capacity_pct: u32,
    /// Above this utilization (but not yet full), recommend a new class.
    pub create_new_pct: u32,
}

impl Default for OverflowThresholds {
    fn default() -> Self {
        Self {
            increase_capacity_pct: 85,
            create_new_pct: 90,
        }
    }
}

/// What the planner suggests doing about a hot class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    /// Raise `max_seats` within policy bounds.
    IncreaseCapacity,
    /// Class is at capacity; split demand into an overflow sibling.
    Split,
    /// Nearly full; schedule an additional class instance.
    CreateNew,
}

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    /// Worth scheduling soon.
    Medium,
    /// Demand is already being turned away or about to be.
    High,
}

/// One planner finding for one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRecommendation {
    /// Class the recommendation concerns.
    pub class_id: ClassId,
    /// Suggested action.
    pub action: RecommendedAction,
    /// Urgency.
    pub priority: RecommendationPriority,
    /// Utilization percentage at scan time.
    pub utilization: u32,
    /// Seats occupied at scan time.
    pub enrolled: u32,
    /// Seat ceiling at scan time.
    pub max_capacity: u32,
    /// Waitlist length at scan time.
    pub waiting: u32,
}

/// Scans active classes and spawns overflow instances.
///
/// Reads are unsynchronized by design: recommendations tolerate a slightly
/// stale view because no capacity decision is made from them.
pub struct OverflowPlanner<S> {
    store: Arc<S>,
    policy: CapacityPolicy,
    thresholds: OverflowThresholds,
    waitlist_limit: u32,
}

impl<S> OverflowPlanner<S> {
    /// Create a planner over a ledger store.
    #[must_use]
    pub const fn new(
        store: Arc<S>,
        policy: CapacityPolicy,
        thresholds: OverflowThresholds,
        waitlist_limit: u32,
    ) -> Self {
        Self {
            store,
            policy,
            thresholds,
            waitlist_limit,
        }
    }
}

impl<S> OverflowPlanner<S>
where
    S: EnrollmentStore + ClassCatalog,
{
    /// Scan active classes and report those needing operator attention.
    ///
    /// At most one recommendation per class, most urgent condition first:
    /// a full class recommends `Split`, a nearly-full one `CreateNew`, a
    /// hot one `IncreaseCapacity`.
    pub fn classes_needing_attention(&self) -> Result<Vec<SplitRecommendation>, AdmissionError> {
        let mut recommendations = Vec::new();
        for offering in self.store.active_classes()? {
            let records = self.store.records_for_class(offering.id)?;
            let snap = compute_snapshot(&offering, &records, &self.policy, self.waitlist_limit);

            let (action, priority) = if snap.is_full {
                (RecommendedAction::Split, RecommendationPriority::High)
            } else if snap.capacity_utilization > self.thresholds.create_new_pct {
                (RecommendedAction::CreateNew, RecommendationPriority::High)
            } else if snap.capacity_utilization > self.thresholds.increase_capacity_pct {
                (
                    RecommendedAction::IncreaseCapacity,
                    RecommendationPriority::Medium,
                )
            } else {
                continue;
            };

            tracing::debug!(
                class_id = %offering.id,
                utilization = snap.capacity_utilization,
                ?action,
                "class needs attention"
            );
            recommendations.push(SplitRecommendation {
                class_id: offering.id,
                action,
                priority,
                utilization: snap.capacity_utilization,
                enrolled: snap.current_enrolled,
                max_capacity: snap.max_capacity,
                waiting: snap.waiting_list_count,
            });
        }
        Ok(recommendations)
    }

    /// Clone an over-subscribed class into a fresh overflow sibling and
    /// register it in the catalog.
    ///
    /// The new offering copies the source's schedulable attributes and
    /// carries a link back to it. A class that is itself an overflow
    /// instance cannot be a source, which keeps overflow chains one level
    /// deep; spawn again from the original instead.
    pub fn create_overflow_class(
        &self,
        source_class_id: ClassId,
    ) -> Result<ClassId, AdmissionError> {
        let source = self
            .store
            .class(source_class_id)?
            .ok_or(AdmissionError::ClassNotFound(source_class_id))?;

        if !can_spawn_overflow(&source) {
            tracing::warn!(
                class_id = %source_class_id,
                is_overflow = source.overflow_of.is_some(),
                active = source.active,
                "refusing unfit overflow source"
            );
            return Err(AdmissionError::UnfitOverflowSource(source_class_id));
        }

        let overflow = source.spawn_overflow("capacity_overflow", crate::util::clock::now_ms());
        let new_class_id = overflow.id;
        self.store.insert_class(overflow)?;
        tracing::info!(
            source = %source_class_id,
            overflow = %new_class_id,
            "overflow class created"
        );
        Ok(new_class_id)
    }
}

/// Check whether an offering may serve as an overflow source.
#[must_use]
pub const fn can_spawn_overflow(offering: &ClassOffering) -> bool {
    offering.overflow_of.is_none() && offering.active
}
