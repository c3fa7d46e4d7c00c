//! Builders to construct a wired admission service from configuration.

pub mod service_builder;

pub use service_builder::build_service;
