//! The claim registry engine.
//!
//! Holds the single piece of durable state — actor address to claimed
//! amount — and the two registration paths that may mutate it. Both paths
//! terminate in the private `record` step, the one route permitted to write
//! the claim map.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use stakereg_crypto::{derive_address, verify_attestation};
use stakereg_types::{ActorAddress, PublicKey, Signature, TokenAmount};

use crate::audit::{AuditSink, ClaimRecord};
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::oracle::{AuthorityOracle, BalanceOracle};

/// Registry of claimed asset holdings.
///
/// Exactly one claimed amount is stored per actor; a new registration for
/// the same actor unconditionally replaces the prior value. Entries are
/// never deleted — an absent entry is an implicit claim of zero. The claim
/// map sits behind one mutex so a failed call can never leave partial state
/// visible to a concurrent reader.
pub struct ClaimRegistry<B, A, L> {
    config: RegistryConfig,
    balances: B,
    authority: A,
    audit: L,
    claims: Mutex<HashMap<ActorAddress, TokenAmount>>,
}

impl<B, A, L> ClaimRegistry<B, A, L>
where
    B: BalanceOracle,
    A: AuthorityOracle,
    L: AuditSink,
{
    pub fn new(config: RegistryConfig, balances: B, authority: A, audit: L) -> Self {
        Self {
            config,
            balances,
            authority,
            audit,
            claims: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Record a claim for `actor`, replacing any prior value.
    ///
    /// The single choke point for both registration paths. Precondition:
    /// the actor's live balance must cover `amount`. On failure nothing is
    /// stored and no audit record is appended.
    fn record(
        &self,
        actor: &ActorAddress,
        amount: TokenAmount,
        message: &str,
    ) -> Result<(), RegistryError> {
        let balance = self.balances.balance_of(actor);
        if !balance.covers(amount) {
            tracing::debug!(
                target: "stakereg::registry",
                actor = %actor,
                claimed = %amount,
                available = %balance,
                "registration rejected: claim exceeds live balance"
            );
            return Err(RegistryError::InsufficientBalance {
                claimed: amount.raw(),
                available: balance.raw(),
            });
        }

        // Store write and audit append happen in the same critical section
        // so the log order always matches the overwrite order.
        let mut claims = self.claims.lock().unwrap();
        claims.insert(actor.clone(), amount);
        self.audit.append(ClaimRecord {
            actor: actor.clone(),
            amount,
            message: message.to_string(),
        });
        tracing::info!(
            target: "stakereg::registry",
            actor = %actor,
            amount = %amount,
            "claim recorded"
        );
        Ok(())
    }

    /// Self-registration: `caller` claims a holding of `amount`.
    ///
    /// No authorization beyond the balance gate — any identity may register
    /// for itself. The caller's identity is authenticated by the embedding
    /// substrate, not here.
    pub fn register(
        &self,
        caller: &ActorAddress,
        amount: TokenAmount,
        message: &str,
    ) -> Result<(), RegistryError> {
        self.record(caller, amount, message)
    }

    /// Delegated registration: a facilitator registers on an actor's behalf.
    ///
    /// Checks run cheapest-first and short-circuit, in this fixed order:
    /// 1. `caller` holds the configured facilitator role, else `Unauthorized`;
    /// 2. `signature` is a valid attestation over `message` by `actor_key`,
    ///    else `InvalidSignature` (never evaluated for unauthorized callers);
    /// 3. the claim is recorded for the address derived from `actor_key`,
    ///    which can still fail with `InsufficientBalance`.
    ///
    /// The signature proves authorship of the message only; the amount is
    /// chosen by the facilitator and trusted on the strength of the role.
    /// Returns the actor address the claim was recorded under.
    pub fn register_for(
        &self,
        caller: &ActorAddress,
        actor_key: &PublicKey,
        amount: TokenAmount,
        message: &str,
        signature: &Signature,
    ) -> Result<ActorAddress, RegistryError> {
        if !self
            .authority
            .holds_role(caller, &self.config.facilitator_role)
        {
            tracing::debug!(
                target: "stakereg::registry",
                caller = %caller,
                role = %self.config.facilitator_role,
                "delegated registration rejected: caller lacks role"
            );
            return Err(RegistryError::Unauthorized(caller.clone()));
        }

        let actor = derive_address(actor_key);
        if !verify_attestation(message.as_bytes(), signature, actor_key) {
            tracing::debug!(
                target: "stakereg::registry",
                actor = %actor,
                "delegated registration rejected: attestation does not verify"
            );
            return Err(RegistryError::InvalidSignature(actor));
        }

        self.record(&actor, amount, message)?;
        Ok(actor)
    }

    /// The raw stored claim for `actor`, zero if absent.
    pub fn claimed_amount(&self, actor: &ActorAddress) -> TokenAmount {
        self.claims
            .lock()
            .unwrap()
            .get(actor)
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }

    /// Point-in-time verification: the stored claim if the live balance
    /// still covers it, zero otherwise.
    ///
    /// Pure read with no failure mode. The balance is fetched from the
    /// oracle on every call, never cached, so this value can silently drop
    /// to zero purely through external balance movement.
    pub fn verified_amount(&self, actor: &ActorAddress) -> TokenAmount {
        let claimed = self.claimed_amount(actor);
        let balance = self.balances.balance_of(actor);
        if balance.covers(claimed) {
            claimed
        } else {
            TokenAmount::ZERO
        }
    }

    /// Number of actors with a stored claim.
    pub fn claim_count(&self) -> usize {
        self.claims.lock().unwrap().len()
    }
}

/// Meta-store key used for persisting the registry's claim map.
const CLAIM_REGISTRY_META_KEY: &str = "claim_registry_state";

/// Serializable snapshot of the claim map.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RegistrySnapshot {
    claims: HashMap<ActorAddress, TokenAmount>,
}

impl<B, A, L> ClaimRegistry<B, A, L>
where
    B: BalanceOracle,
    A: AuthorityOracle,
    L: AuditSink,
{
    /// Serialize the claim map to bytes for persistence.
    pub fn save_state(&self) -> Vec<u8> {
        let snapshot = RegistrySnapshot {
            claims: self.claims.lock().unwrap().clone(),
        };
        bincode::serialize(&snapshot).unwrap_or_default()
    }

    /// Rebuild a registry from serialized bytes. Undecodable input yields
    /// an empty claim map.
    pub fn load_state(
        config: RegistryConfig,
        balances: B,
        authority: A,
        audit: L,
        data: &[u8],
    ) -> Self {
        let claims = bincode::deserialize::<RegistrySnapshot>(data)
            .map(|s| s.claims)
            .unwrap_or_default();
        Self {
            config,
            balances,
            authority,
            audit,
            claims: Mutex::new(claims),
        }
    }

    /// The meta-store key used for registry persistence.
    pub fn meta_key() -> &'static str {
        CLAIM_REGISTRY_META_KEY
    }
}
