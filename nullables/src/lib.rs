//! Nullable infrastructure for deterministic testing.
//!
//! The registry's external dependencies (balance oracle, authority oracle,
//! audit sink) are abstracted behind traits. This crate provides
//! test-friendly implementations that:
//! - Return deterministic, programmable values
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod audit;
pub mod oracle;

pub use audit::NullAuditSink;
pub use oracle::{NullAuthorityOracle, NullBalanceOracle};
