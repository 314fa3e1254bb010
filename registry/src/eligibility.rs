//! Eligibility adapter for the external role-management protocol.
//!
//! A derived, stateless view over the verification query, shaped to the
//! two-value return the external protocol expects.

use serde::{Deserialize, Serialize};
use stakereg_types::ActorAddress;

use crate::audit::AuditSink;
use crate::oracle::{AuthorityOracle, BalanceOracle};
use crate::registry::ClaimRegistry;

/// The two-value eligibility answer consumed by the external authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityStatus {
    /// Whether the actor's claim is currently backed by a live balance.
    pub eligible: bool,
    /// The registry has no concept of misconduct; always `true`.
    pub standing: bool,
}

/// Anything that can answer a point-in-time eligibility question.
pub trait EligibilitySource {
    fn eligibility(&self, actor: &ActorAddress) -> EligibilityStatus;
}

impl<B, A, L> EligibilitySource for ClaimRegistry<B, A, L>
where
    B: BalanceOracle,
    A: AuthorityOracle,
    L: AuditSink,
{
    fn eligibility(&self, actor: &ActorAddress) -> EligibilityStatus {
        EligibilityStatus {
            eligible: !self.verified_amount(actor).is_zero(),
            standing: true,
        }
    }
}
