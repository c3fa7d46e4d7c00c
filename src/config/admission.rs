//! Admission service configuration structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::policy::CapacityRule;

/// Ledger store backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackendConfig {
    /// In-memory store for development/testing.
    InMemory,
    /// Postgres-backed ledger store.
    Postgres,
}

/// Overflow planner thresholds, percentages of capacity utilization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OverflowConfig {
    /// Above this utilization, recommend raising capacity.
    pub increase_capacity_pct: u32,
    /// Above this utilization (but not yet full), recommend a new class.
    pub create_new_pct: u32,
}

/// Root admission configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Maximum waitlisted students per class before outright rejection.
    pub waitlist_limit: u32,
    /// Overflow planner thresholds.
    pub overflow: OverflowConfig,
    /// Capacity rule table keyed by offering type name.
    pub capacity_rules: HashMap<String, CapacityRule>,
    /// Ledger store backend selection.
    pub store: StoreBackendConfig,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        let mut capacity_rules = HashMap::new();
        capacity_rules.insert("1-on-1".to_string(), CapacityRule::exactly(1));
        let group = CapacityRule::range(3, 9, 6);
        capacity_rules.insert("Basic".to_string(), group);
        capacity_rules.insert("Intermediate".to_string(), group);
        capacity_rules.insert("Advanced".to_string(), group);
        Self {
            waitlist_limit: 10,
            overflow: OverflowConfig {
                increase_capacity_pct: 85,
                create_new_pct: 90,
            },
            capacity_rules,
            store: StoreBackendConfig::InMemory,
        }
    }
}

impl OverflowConfig {
    /// Validate threshold values.
    pub fn validate(&self) -> Result<(), String> {
        if self.increase_capacity_pct == 0 || self.increase_capacity_pct > 100 {
            return Err("increase_capacity_pct must be in 1..=100".into());
        }
        if self.create_new_pct == 0 || self.create_new_pct > 100 {
            return Err("create_new_pct must be in 1..=100".into());
        }
        if self.create_new_pct < self.increase_capacity_pct {
            return Err("create_new_pct must not be below increase_capacity_pct".into());
        }
        Ok(())
    }
}

impl AdmissionConfig {
    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.waitlist_limit == 0 {
            return Err("waitlist_limit must be greater than 0".into());
        }
        self.overflow.validate()?;
        if self.capacity_rules.is_empty() {
            return Err("at least one capacity rule must be defined".into());
        }
        for (name, rule) in &self.capacity_rules {
            if rule.min == 0 {
                return Err(format!("rule `{name}` invalid: min must be greater than 0"));
            }
            if rule.min > rule.optimal || rule.optimal > rule.max {
                return Err(format!(
                    "rule `{name}` invalid: expected min <= optimal <= max"
                ));
            }
        }
        Ok(())
    }

    /// Parse admission configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
