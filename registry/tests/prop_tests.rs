use std::sync::Arc;

use proptest::prelude::*;

use stakereg_crypto::{derive_address, keypair_from_seed};
use stakereg_nullables::{NullAuditSink, NullAuthorityOracle, NullBalanceOracle};
use stakereg_registry::{ClaimRegistry, EligibilitySource, RegistryConfig, RegistryError};
use stakereg_types::{ActorAddress, RoleId, TokenAmount};

type Registry =
    ClaimRegistry<Arc<NullBalanceOracle>, Arc<NullAuthorityOracle>, Arc<NullAuditSink>>;

fn setup() -> (Arc<NullBalanceOracle>, Arc<NullAuditSink>, Registry) {
    let balances = Arc::new(NullBalanceOracle::new());
    let audit = Arc::new(NullAuditSink::new());
    let registry = ClaimRegistry::new(
        RegistryConfig::new(RoleId::new("facilitator")),
        balances.clone(),
        Arc::new(NullAuthorityOracle::new()),
        audit.clone(),
    );
    (balances, audit, registry)
}

fn addr(seed: u8) -> ActorAddress {
    derive_address(&keypair_from_seed(&[seed; 32]).public)
}

proptest! {
    /// Registration succeeds iff the live balance covers the amount, and a
    /// rejected call leaves the store untouched.
    #[test]
    fn balance_gated_acceptance(balance in 0u128..1_000_000, amount in 0u128..1_000_000) {
        let (balances, audit, registry) = setup();
        let a = addr(1);
        balances.set_balance(&a, TokenAmount::new(balance));

        let result = registry.register(&a, TokenAmount::new(amount), "m");
        if amount <= balance {
            prop_assert!(result.is_ok());
            prop_assert_eq!(registry.claimed_amount(&a), TokenAmount::new(amount));
            prop_assert_eq!(audit.len(), 1);
        } else {
            prop_assert_eq!(
                result.unwrap_err(),
                RegistryError::InsufficientBalance { claimed: amount, available: balance }
            );
            prop_assert_eq!(registry.claimed_amount(&a), TokenAmount::ZERO);
            prop_assert_eq!(audit.len(), 0);
        }
    }

    /// Overwrite semantics: after a sequence of successful registrations,
    /// only the last amount is stored and the log holds every one.
    #[test]
    fn last_registration_wins(amounts in prop::collection::vec(0u128..1000, 1..10)) {
        let (balances, audit, registry) = setup();
        let a = addr(1);
        balances.set_balance(&a, TokenAmount::new(1000));

        for &amount in &amounts {
            registry.register(&a, TokenAmount::new(amount), "m").unwrap();
        }

        prop_assert_eq!(
            registry.claimed_amount(&a),
            TokenAmount::new(*amounts.last().unwrap())
        );
        prop_assert_eq!(registry.claim_count(), 1);
        prop_assert_eq!(audit.len(), amounts.len());
    }

    /// Verification reconciliation: `verified_amount` equals the claim iff
    /// the live balance covers it, with no caching lag after balance moves.
    #[test]
    fn verification_reconciles(claim in 0u128..1_000_000, later_balance in 0u128..1_000_000) {
        let (balances, _, registry) = setup();
        let a = addr(1);
        balances.set_balance(&a, TokenAmount::new(claim));
        registry.register(&a, TokenAmount::new(claim), "m").unwrap();

        balances.set_balance(&a, TokenAmount::new(later_balance));
        let expected = if later_balance >= claim { claim } else { 0 };
        prop_assert_eq!(registry.verified_amount(&a), TokenAmount::new(expected));
    }

    /// Eligibility is exactly "verified amount is positive"; standing is
    /// unconditionally good.
    #[test]
    fn eligibility_tracks_verified_amount(claim in 0u128..1_000_000, later_balance in 0u128..1_000_000) {
        let (balances, _, registry) = setup();
        let a = addr(1);
        balances.set_balance(&a, TokenAmount::new(claim));
        registry.register(&a, TokenAmount::new(claim), "m").unwrap();
        balances.set_balance(&a, TokenAmount::new(later_balance));

        let status = registry.eligibility(&a);
        prop_assert_eq!(status.eligible, !registry.verified_amount(&a).is_zero());
        prop_assert!(status.standing);
    }

    /// Snapshot persistence preserves every stored claim.
    #[test]
    fn snapshot_roundtrip(claims in prop::collection::vec((1u8..20, 0u128..1000), 0..10)) {
        let (balances, audit, registry) = setup();
        for &(seed, amount) in &claims {
            let a = addr(seed);
            balances.set_balance(&a, TokenAmount::new(amount));
            registry.register(&a, TokenAmount::new(amount), "m").unwrap();
        }

        let bytes = registry.save_state();
        let restored: Registry = ClaimRegistry::load_state(
            RegistryConfig::new(RoleId::new("facilitator")),
            balances.clone(),
            Arc::new(NullAuthorityOracle::new()),
            audit.clone(),
            &bytes,
        );

        for &(seed, _) in &claims {
            let a = addr(seed);
            prop_assert_eq!(restored.claimed_amount(&a), registry.claimed_amount(&a));
        }
        prop_assert_eq!(restored.claim_count(), registry.claim_count());
    }
}
