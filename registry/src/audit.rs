//! Append-only audit log of successful registrations.
//!
//! The audit record is the only durable evidence of the raw attestation
//! message; the claim store itself never retains it. Exactly one record is
//! appended per successful recording, atomically with the store write.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use stakereg_types::{ActorAddress, TokenAmount};

/// One registration event: who claimed, how much, and the verbatim
/// attestation message that accompanied the call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub actor: ActorAddress,
    pub amount: TokenAmount,
    pub message: String,
}

/// Destination for audit records.
pub trait AuditSink: Send + Sync {
    fn append(&self, record: ClaimRecord);
}

impl<T: AuditSink + ?Sized> AuditSink for Arc<T> {
    fn append(&self, record: ClaimRecord) {
        (**self).append(record)
    }
}

/// Audit sink that emits each record as a structured tracing event on the
/// `stakereg::audit` target.
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn append(&self, record: ClaimRecord) {
        tracing::info!(
            target: "stakereg::audit",
            actor = %record.actor,
            amount = %record.amount,
            message = %record.message,
            "claim registered"
        );
    }
}
