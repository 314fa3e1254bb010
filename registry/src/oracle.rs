//! Oracle traits for the registry's external collaborators.
//!
//! Both oracles must reflect the collaborator's state at call time. The
//! registry never memoizes a balance or a role membership: every recording
//! operation and every verification query goes back to the source.

use std::sync::Arc;

use stakereg_types::{ActorAddress, RoleId, TokenAmount};

/// Read-only source of live asset balances.
pub trait BalanceOracle: Send + Sync {
    /// The actor's current balance of the registered asset.
    fn balance_of(&self, actor: &ActorAddress) -> TokenAmount;
}

/// Read-only source of authority role membership.
pub trait AuthorityOracle: Send + Sync {
    /// Whether `identity` currently holds `role`.
    fn holds_role(&self, identity: &ActorAddress, role: &RoleId) -> bool;
}

impl<T: BalanceOracle + ?Sized> BalanceOracle for Arc<T> {
    fn balance_of(&self, actor: &ActorAddress) -> TokenAmount {
        (**self).balance_of(actor)
    }
}

impl<T: AuthorityOracle + ?Sized> AuthorityOracle for Arc<T> {
    fn holds_role(&self, identity: &ActorAddress, role: &RoleId) -> bool {
        (**self).holds_role(identity, role)
    }
}
