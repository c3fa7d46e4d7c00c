//! Tests for configuration validation

use class_admission::config::{AdmissionConfig, StoreBackendConfig};
use class_admission::core::CapacityRule;

#[test]
fn test_default_config_is_valid() {
    let cfg = AdmissionConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.waitlist_limit, 10);
    assert!(matches!(cfg.store, StoreBackendConfig::InMemory));
}

#[test]
fn test_invalid_waitlist_limit() {
    let mut cfg = AdmissionConfig::default();
    cfg.waitlist_limit = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_invalid_thresholds() {
    let mut cfg = AdmissionConfig::default();
    cfg.overflow.increase_capacity_pct = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = AdmissionConfig::default();
    cfg.overflow.create_new_pct = 120;
    assert!(cfg.validate().is_err());

    let mut cfg = AdmissionConfig::default();
    cfg.overflow.increase_capacity_pct = 95;
    cfg.overflow.create_new_pct = 90;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_invalid_capacity_rule() {
    let mut cfg = AdmissionConfig::default();
    cfg.capacity_rules
        .insert("Broken".to_string(), CapacityRule::range(5, 3, 4));
    assert!(cfg.validate().is_err());

    let mut cfg = AdmissionConfig::default();
    cfg.capacity_rules
        .insert("Broken".to_string(), CapacityRule::exactly(0));
    assert!(cfg.validate().is_err());
}

#[test]
fn test_empty_rule_table_is_invalid() {
    let mut cfg = AdmissionConfig::default();
    cfg.capacity_rules.clear();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_from_json_str() {
    let json = r#"{
        "waitlist_limit": 5,
        "overflow": { "increase_capacity_pct": 80, "create_new_pct": 92 },
        "capacity_rules": {
            "1-on-1": { "min": 1, "max": 1, "optimal": 1 },
            "Basic": { "min": 3, "max": 9, "optimal": 6 }
        },
        "store": "in_memory"
    }"#;
    let cfg = AdmissionConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.waitlist_limit, 5);
    assert_eq!(cfg.overflow.create_new_pct, 92);
    assert_eq!(
        cfg.capacity_rules.get("Basic"),
        Some(&CapacityRule::range(3, 9, 6))
    );
}

#[test]
fn test_from_json_str_rejects_garbage_and_invalid() {
    assert!(AdmissionConfig::from_json_str("not json").is_err());

    let invalid = r#"{
        "waitlist_limit": 0,
        "overflow": { "increase_capacity_pct": 85, "create_new_pct": 90 },
        "capacity_rules": { "Basic": { "min": 3, "max": 9, "optimal": 6 } },
        "store": "postgres"
    }"#;
    assert!(AdmissionConfig::from_json_str(invalid).is_err());
}
