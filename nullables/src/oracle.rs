//! Nullable oracles — programmable in-memory balance and authority sources.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use stakereg_registry::{AuthorityOracle, BalanceOracle};
use stakereg_types::{ActorAddress, RoleId, TokenAmount};

/// An in-memory balance oracle for testing. Thread-safe.
///
/// Unset actors report a balance of zero, like an asset nobody holds yet.
pub struct NullBalanceOracle {
    balances: Mutex<HashMap<ActorAddress, TokenAmount>>,
}

impl NullBalanceOracle {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
        }
    }

    /// Set an actor's live balance, simulating external asset movement.
    pub fn set_balance(&self, actor: &ActorAddress, balance: TokenAmount) {
        self.balances
            .lock()
            .unwrap()
            .insert(actor.clone(), balance);
    }
}

impl Default for NullBalanceOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceOracle for NullBalanceOracle {
    fn balance_of(&self, actor: &ActorAddress) -> TokenAmount {
        self.balances
            .lock()
            .unwrap()
            .get(actor)
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }
}

/// An in-memory authority oracle for testing. Thread-safe.
pub struct NullAuthorityOracle {
    grants: Mutex<HashSet<(ActorAddress, RoleId)>>,
}

impl NullAuthorityOracle {
    pub fn new() -> Self {
        Self {
            grants: Mutex::new(HashSet::new()),
        }
    }

    /// Grant `role` to `identity`.
    pub fn grant(&self, identity: &ActorAddress, role: &RoleId) {
        self.grants
            .lock()
            .unwrap()
            .insert((identity.clone(), role.clone()));
    }

    /// Revoke `role` from `identity`, simulating an external reassignment.
    pub fn revoke(&self, identity: &ActorAddress, role: &RoleId) {
        self.grants
            .lock()
            .unwrap()
            .remove(&(identity.clone(), role.clone()));
    }
}

impl Default for NullAuthorityOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorityOracle for NullAuthorityOracle {
    fn holds_role(&self, identity: &ActorAddress, role: &RoleId) -> bool {
        self.grants
            .lock()
            .unwrap()
            .contains(&(identity.clone(), role.clone()))
    }
}
