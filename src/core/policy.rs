//! Capacity policy: per-offering-type seat bounds.
//!
//! Pure rules with no state. Unknown offering types produce a negative
//! validation carrying the global default, not an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Seat bounds for one offering type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityRule {
    /// Smallest allowed seat count.
    pub min: u32,
    /// Largest allowed seat count.
    pub max: u32,
    /// Default used when no capacity override is supplied.
    pub optimal: u32,
}

impl CapacityRule {
    /// Rule covering exactly one fixed seat count.
    #[must_use]
    pub const fn exactly(seats: u32) -> Self {
        Self {
            min: seats,
            max: seats,
            optimal: seats,
        }
    }

    /// Rule covering a seat range with a preferred default.
    #[must_use]
    pub const fn range(min: u32, max: u32, optimal: u32) -> Self {
        Self { min, max, optimal }
    }
}

/// Result of validating a requested capacity against policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityValidation {
    /// Whether the requested capacity is within bounds.
    pub valid: bool,
    /// Human-readable rejection context, present only when invalid.
    pub message: Option<String>,
    /// Capacity the caller should use instead, present only when invalid.
    pub recommended_capacity: Option<u32>,
}

impl CapacityValidation {
    const fn ok() -> Self {
        Self {
            valid: true,
            message: None,
            recommended_capacity: None,
        }
    }

    fn rejected(message: String, recommended: u32) -> Self {
        Self {
            valid: false,
            message: Some(message),
            recommended_capacity: Some(recommended),
        }
    }
}

/// Static table of seat bounds keyed by offering type name.
#[derive(Debug, Clone)]
pub struct CapacityPolicy {
    rules: HashMap<String, CapacityRule>,
    fallback_capacity: u32,
}

/// Global default recommended for unknown offering types.
const FALLBACK_CAPACITY: u32 = 6;

/// Shared bounds for the small-group tiers.
const GROUP_RULE: CapacityRule = CapacityRule::range(3, 9, 6);

impl Default for CapacityPolicy {
    fn default() -> Self {
        let mut rules = HashMap::new();
        rules.insert("1-on-1".to_string(), CapacityRule::exactly(1));
        rules.insert("Basic".to_string(), GROUP_RULE);
        rules.insert("Intermediate".to_string(), GROUP_RULE);
        rules.insert("Advanced".to_string(), GROUP_RULE);
        Self {
            rules,
            fallback_capacity: FALLBACK_CAPACITY,
        }
    }
}

impl CapacityPolicy {
    /// Build a policy from an explicit rule table, e.g. from configuration.
    #[must_use]
    pub const fn from_rules(rules: HashMap<String, CapacityRule>) -> Self {
        Self {
            rules,
            fallback_capacity: FALLBACK_CAPACITY,
        }
    }

    /// Look up the rule for an offering type.
    #[must_use]
    pub fn rule(&self, offering_type: &str) -> Option<&CapacityRule> {
        self.rules.get(offering_type)
    }

    /// Default capacity for an offering type: the optimal seat count, or the
    /// global fallback for unknown types.
    #[must_use]
    pub fn default_capacity(&self, offering_type: &str) -> u32 {
        self.rules
            .get(offering_type)
            .map_or(self.fallback_capacity, |r| r.optimal)
    }

    /// Validate a requested capacity against the bounds for its offering
    /// type. Deterministic and side-effect free.
    #[must_use]
    pub fn validate(&self, offering_type: &str, requested: u32) -> CapacityValidation {
        let Some(rule) = self.rules.get(offering_type) else {
            return CapacityValidation::rejected(
                format!("unknown offering type `{offering_type}`"),
                self.fallback_capacity,
            );
        };
        if requested < rule.min || requested > rule.max {
            return CapacityValidation::rejected(
                format!(
                    "capacity {requested} out of bounds [{}, {}] for `{offering_type}`",
                    rule.min, rule.max
                ),
                rule.optimal,
            );
        }
        CapacityValidation::ok()
    }
}
