//! Tests for error types

use class_admission::core::{AdmissionError, StoreError};
use uuid::Uuid;

#[test]
fn test_store_error_display() {
    assert_eq!(StoreError::Duplicate.to_string(), "duplicate record");
    assert_eq!(StoreError::RecordNotFound.to_string(), "record not found");
    assert_eq!(
        StoreError::Backend("connection refused".into()).to_string(),
        "backend error: connection refused"
    );
}

#[test]
fn test_admission_error_display() {
    let class_id = Uuid::new_v4();
    let err = AdmissionError::ClassNotFound(class_id);
    assert_eq!(err.to_string(), format!("class not found: {class_id}"));

    let err = AdmissionError::UnfitOverflowSource(class_id);
    assert!(err.to_string().contains("cannot source an overflow class"));
}

#[test]
fn test_store_error_converts_transparently() {
    let err: AdmissionError = StoreError::Backend("boom".into()).into();
    // Transparent wrapping: the store message is the admission message.
    assert_eq!(err.to_string(), "backend error: boom");
    assert!(matches!(err, AdmissionError::Store(_)));
}

#[test]
fn test_errors_compose_with_anyhow() {
    fn failing() -> class_admission::core::AppResult<()> {
        Err(AdmissionError::ClassNotFound(Uuid::nil()).into())
    }
    let err = failing().unwrap_err();
    assert!(err.to_string().contains("class not found"));
}
