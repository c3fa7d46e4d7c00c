//! # Class Admission
//!
//! Capacity and waitlist admission control for class enrollment.
//!
//! This library is the decision core that sits between an enrollment UI/API
//! and the enrollment ledger. It decides, under concurrent demand, whether a
//! student may occupy one of a class's fixed seats, maintains a strictly
//! ordered FIFO waiting list when the class is full, promotes waitlisted
//! students as seats free up, and recommends or spawns overflow class
//! instances when a class is structurally over-subscribed.
//!
//! ## Core Problem Solved
//!
//! Seat admission is a bounded-resource problem with ordering and atomicity
//! invariants that naive check-then-insert code gets wrong:
//!
//! - **Capacity Invariant**: two concurrent callers must never both observe
//!   one free seat and both be admitted into it
//! - **Waitlist Ordering**: waitlist positions form a contiguous `1..n`
//!   sequence and promotion is strictly first-come-first-served
//! - **Drop/Promote Atomicity**: a freed seat goes to the head of the
//!   waitlist, never to a concurrent walk-up admission
//! - **Derived Capacity**: seat counts are recomputed from the ledger on
//!   demand, so there is no stale counter to invalidate
//!
//! ## Key Features
//!
//! - **Per-Class Locking**: admission, drop, and promotion serialize on a
//!   lock keyed by class id; unrelated classes proceed in parallel
//! - **Capacity Policy**: per-offering-type seat bounds with validation and
//!   recommended defaults
//! - **Overflow Planning**: utilization scanning that recommends capacity
//!   increases or spawns sibling overflow classes as a release valve
//! - **Pluggable Ledger**: in-memory store for development and testing,
//!   schema-only Postgres adapter for the external store boundary
//! - **Audit Trail**: optional append-only stream of admission events
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use class_admission::core::{
//!     AdmissionLimits, AdmissionService, CapacityPolicy, ClassCatalog, ClassOffering,
//! };
//! use class_admission::infra::store::memory::InMemoryStore;
//!
//! let store = Arc::new(InMemoryStore::new());
//! let class = ClassOffering::new("Basic").with_max_seats(6);
//! store.insert_class(class.clone())?;
//!
//! let service = AdmissionService::new(
//!     store,
//!     CapacityPolicy::default(),
//!     AdmissionLimits::default(),
//! );
//!
//! let outcome = service.admit(class.id, student_id)?;
//! ```
//!
//! For complete examples, see:
//! - `tests/admission_flow_test.rs` - Full scenario walkthroughs
//! - `tests/concurrency_test.rs` - Capacity invariant under contention

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core admission state machine, policy, and capacity accounting.
pub mod core;
/// Configuration models for limits, thresholds, and backends.
pub mod config;
/// Builders to construct a wired admission service from configuration.
pub mod builders;
/// Infrastructure adapters for ledger store backends.
pub mod infra;
/// Shared utilities.
pub mod util;
