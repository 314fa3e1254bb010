//! Claim registration and verification for the stakereg holdings registry.
//!
//! The registry lets an ecosystem actor declare a claimed holding of a
//! fungible asset, lets a designated facilitator register on another actor's
//! behalf against a signed attestation, and answers the point-in-time query
//! "is this claim still backed by a live balance".
//!
//! The balance and authority sources are external collaborators, reached
//! through the [`oracle`] traits so tests can substitute deterministic fakes.

pub mod audit;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod oracle;
pub mod registry;

pub use audit::{AuditSink, ClaimRecord, TracingAuditSink};
pub use config::RegistryConfig;
pub use eligibility::{EligibilitySource, EligibilityStatus};
pub use error::RegistryError;
pub use oracle::{AuthorityOracle, BalanceOracle};
pub use registry::ClaimRegistry;
