//! Tests for the service builder

use std::sync::Arc;

use class_admission::builders::build_service;
use class_admission::config::{AdmissionConfig, StoreBackendConfig};
use class_admission::infra::InMemoryStore;

#[test]
fn test_build_service_from_default_config() {
    let cfg = AdmissionConfig::default();
    let service = build_service(&cfg, |backend| {
        assert!(matches!(backend, StoreBackendConfig::InMemory));
        Ok(Arc::new(InMemoryStore::new()))
    })
    .unwrap();

    assert_eq!(service.limits().waitlist_limit, 10);
    // Policy comes from the config rule table.
    assert!(service.validate_capacity("1-on-1", 1).valid);
    assert!(!service.validate_capacity("1-on-1", 3).valid);
}

#[test]
fn test_build_service_rejects_invalid_config() {
    let mut cfg = AdmissionConfig::default();
    cfg.waitlist_limit = 0;
    let result = build_service(&cfg, |_| Ok(Arc::new(InMemoryStore::new())));
    assert!(result.is_err());
}

#[test]
fn test_custom_rule_table_flows_into_policy() {
    let json = r#"{
        "waitlist_limit": 4,
        "overflow": { "increase_capacity_pct": 85, "create_new_pct": 90 },
        "capacity_rules": { "Seminar": { "min": 2, "max": 12, "optimal": 8 } },
        "store": "in_memory"
    }"#;
    let cfg = AdmissionConfig::from_json_str(json).unwrap();
    let service = build_service(&cfg, |_| Ok(Arc::new(InMemoryStore::new()))).unwrap();

    assert!(service.validate_capacity("Seminar", 12).valid);
    let rejected = service.validate_capacity("Seminar", 13);
    assert!(!rejected.valid);
    assert_eq!(rejected.recommended_capacity, Some(8));
    // Types absent from the custom table are unknown.
    assert!(!service.validate_capacity("Basic", 6).valid);
}
