//! Configuration models for limits, thresholds, and backends.

pub mod admission;

pub use admission::{AdmissionConfig, OverflowConfig, StoreBackendConfig};
