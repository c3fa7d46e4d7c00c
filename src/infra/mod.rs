//! Infrastructure adapters for ledger store backends.

pub mod store;

pub use store::memory::InMemoryStore;
pub use store::postgres::PostgresStore;
