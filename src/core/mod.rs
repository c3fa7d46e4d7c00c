//! Core admission state machine, policy, and capacity accounting.

pub mod admission;
pub mod audit;
pub mod error;
pub mod ledger;
pub mod locks;
pub mod planner;
pub mod policy;
pub mod promotion;
pub mod snapshot;
pub mod stats;
pub mod types;

pub use admission::{AdmissionLimits, AdmissionService};
pub use audit::{
    build_admission_event, AdmissionEvent, AuditSink, InMemoryAuditSink, PostgresAuditSink,
};
pub use error::{AdmissionError, AppResult, StoreError};
pub use ledger::{ClassCatalog, EnrollmentStore};
pub use locks::ClassLocks;
pub use planner::{
    can_spawn_overflow, OverflowPlanner, OverflowThresholds, RecommendationPriority,
    RecommendedAction, SplitRecommendation,
};
pub use policy::{CapacityPolicy, CapacityRule, CapacityValidation};
pub use snapshot::{compute_snapshot, CapacitySnapshot};
pub use stats::{aggregate_stats, ClassStats};
pub use types::{
    AdmissionOutcome, ClassId, ClassOffering, DropOutcome, EnrollmentRecord, EnrollmentState,
    OverflowClassLink, PromotionOutcome, RecordId, RejectReason, StudentId, TeacherId,
};
