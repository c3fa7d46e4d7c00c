//! Error types for admission operations.
//!
//! Expected negative outcomes (duplicate enrollment, full class, invalid
//! capacity) are *not* errors; they are variants of the outcome types in
//! [`crate::core::types`]. Errors here cover the unexpected cases: an
//! unknown class where one is required, and ledger backend failures.

use thiserror::Error;

use crate::core::types::ClassId;

/// Errors produced by ledger store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same identity already exists.
    #[error("duplicate record")]
    Duplicate,
    /// The record to update does not exist.
    #[error("record not found")]
    RecordNotFound,
    /// Backend-specific failure with context.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Errors produced by admission components.
#[derive(Debug, Error)]
pub enum AdmissionError {
    /// The named class does not exist in the catalog.
    #[error("class not found: {0}")]
    ClassNotFound(ClassId),
    /// The class cannot serve as an overflow source: it is inactive or is
    /// itself an overflow instance.
    #[error("class {0} cannot source an overflow class")]
    UnfitOverflowSource(ClassId),
    /// The ledger store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
