//! Build an admission service from configuration using a provided store
//! factory.

use std::sync::Arc;

use crate::config::{AdmissionConfig, StoreBackendConfig};
use crate::core::admission::{AdmissionLimits, AdmissionService};
use crate::core::error::StoreError;
use crate::core::ledger::{ClassCatalog, EnrollmentStore};
use crate::core::planner::OverflowThresholds;
use crate::core::policy::CapacityPolicy;

/// Build an admission service from validated configuration.
///
/// The store factory receives the configured backend selection and returns
/// the wired store; injection keeps this crate free of backend client
/// dependencies.
pub fn build_service<S, F>(
    cfg: &AdmissionConfig,
    store_factory: F,
) -> Result<AdmissionService<S>, StoreError>
where
    S: EnrollmentStore + ClassCatalog,
    F: FnOnce(&StoreBackendConfig) -> Result<Arc<S>, StoreError>,
{
    cfg.validate()
        .map_err(|e| StoreError::Backend(format!("config invalid: {e}")))?;

    let store = store_factory(&cfg.store)?;
    let policy = CapacityPolicy::from_rules(cfg.capacity_rules.clone());
    let limits = AdmissionLimits {
        waitlist_limit: cfg.waitlist_limit,
    };
    let thresholds = OverflowThresholds {
        increase_capacity_pct: cfg.overflow.increase_capacity_pct,
        create_new_pct: cfg.overflow.create_new_pct,
    };

    Ok(AdmissionService::new(store, policy, limits).with_thresholds(thresholds))
}
