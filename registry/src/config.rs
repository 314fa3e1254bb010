//! Registry configuration, fixed at construction.

use stakereg_types::RoleId;

/// Immutable configuration for a [`ClaimRegistry`](crate::ClaimRegistry).
///
/// The facilitator role identifier is set once when the registry is built
/// and never rotated by this component. An external authority system may
/// reassign *who* holds the role without the registry's involvement.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// The authority role whose holders may register on behalf of others.
    pub facilitator_role: RoleId,
}

impl RegistryConfig {
    pub fn new(facilitator_role: RoleId) -> Self {
        Self { facilitator_role }
    }
}
