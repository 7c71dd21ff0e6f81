multiversx_sc::imports!();

use common_constants::{MODULE_ACCESS_CONTROL, MODULE_VAULT_CORE};
use common_errors::{ERROR_NOT_VAULT_CORE, ERROR_REENTRANT_CALL};
use multiversx_sc::api::StorageMapperApi;

use crate::{context::ModuleContext, storage};

/// Holds the reentrancy lock for as long as it lives.
///
/// The lock is cleared on drop, so every exit path of an endpoint releases it.
/// A failed transaction never persists the lock in the first place.
pub struct ReentrancyGuard<SA>
where
    SA: StorageMapperApi,
{
    lock: SingleValueMapper<SA, bool>,
}

impl<SA> ReentrancyGuard<SA>
where
    SA: StorageMapperApi,
{
    pub fn engage(lock: SingleValueMapper<SA, bool>) -> Self {
        lock.set(true);
        ReentrancyGuard { lock }
    }
}

impl<SA> Drop for ReentrancyGuard<SA>
where
    SA: StorageMapperApi,
{
    fn drop(&mut self) {
        self.lock.clear();
    }
}

/// Dual-entry discipline over the ledger.
///
/// Business mutations come from the registered orchestration entry point only,
/// liquidation mutations from any holder of the liquidator capability.
#[multiversx_sc::module]
pub trait EntryGuardModule: storage::Storage {
    /// Takes the reentrancy lock, failing if an outer call still holds it.
    fn lock_reentrancy(&self) -> ReentrancyGuard<Self::Api> {
        let lock = self.reentrancy_lock();
        require!(!lock.get(), ERROR_REENTRANT_CALL);

        ReentrancyGuard::engage(lock)
    }

    /// Business path gate: the caller must be the registered `VAULT_CORE` module.
    fn require_orchestration_entry(
        &self,
        ctx: &mut ModuleContext<Self>,
        caller: &ManagedAddress,
    ) {
        let vault_core = ctx.resolve(MODULE_VAULT_CORE);
        require!(caller == &vault_core, ERROR_NOT_VAULT_CORE);
    }

    fn has_capability(
        &self,
        ctx: &mut ModuleContext<Self>,
        capability: &[u8],
        actor: &ManagedAddress,
    ) -> bool {
        let access_control = ctx.resolve(MODULE_ACCESS_CONTROL);
        self.granted_role(access_control, &ManagedBuffer::new_from_bytes(capability), actor)
            .get()
    }

    /// Fails with `error` unless `actor` holds `capability` in the access control module.
    fn require_capability(
        &self,
        ctx: &mut ModuleContext<Self>,
        capability: &[u8],
        actor: &ManagedAddress,
        error: &'static [u8],
    ) {
        require!(self.has_capability(ctx, capability, actor), error);
    }
}
