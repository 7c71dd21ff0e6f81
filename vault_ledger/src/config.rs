multiversx_sc::imports!();

use common_constants::{MIN_HEALTH_FACTOR_FLOOR_BPS, MIN_PUSH_GAS_LIMIT};
use common_errors::{ERROR_INVALID_GAS_LIMIT, ERROR_INVALID_MIN_HEALTH_FACTOR, ERROR_INVALID_REGISTRY};

use crate::storage;

/// Owner-controlled wiring and risk parameters of the vault ledger.
///
/// # Security Considerations
/// The registry address decides which contracts are trusted as orchestration
/// entry point, access control and collateral manager. Only the owner may move it.
#[multiversx_sc::module]
pub trait ConfigModule: storage::Storage {
    /// Points the ledger at another module registry.
    ///
    /// # Arguments
    /// - `registry_address`: Address of the module registry contract.
    ///
    /// # Errors
    /// - `ERROR_INVALID_REGISTRY`: If address is zero or not a smart contract.
    #[only_owner]
    #[endpoint(setRegistryAddress)]
    fn set_registry_address(&self, registry_address: ManagedAddress) {
        self.require_valid_registry(&registry_address);
        self.registry_address().set(&registry_address);
    }

    /// Sets the health factor under which a position counts as under-collateralized.
    ///
    /// # Errors
    /// - `ERROR_INVALID_MIN_HEALTH_FACTOR`: If below 100%.
    #[only_owner]
    #[endpoint(setMinHealthFactor)]
    fn set_min_health_factor(&self, min_health_factor_bps: u64) {
        self.require_valid_min_health_factor(min_health_factor_bps);
        self.min_health_factor_bps().set(min_health_factor_bps);
    }

    /// Oracle feeds older than `max_price_age` seconds fall back to the last valid price.
    /// Zero accepts feeds of any age.
    #[only_owner]
    #[endpoint(setMaxPriceAge)]
    fn set_max_price_age(&self, max_price_age: u64) {
        self.max_price_age().set(max_price_age);
    }

    #[only_owner]
    #[endpoint(setPushGasLimits)]
    fn set_push_gas_limits(&self, push_gas_limit: u64, callback_gas_limit: u64) {
        require!(
            push_gas_limit >= MIN_PUSH_GAS_LIMIT && callback_gas_limit >= MIN_PUSH_GAS_LIMIT,
            ERROR_INVALID_GAS_LIMIT
        );

        self.push_gas_limit().set(push_gas_limit);
        self.push_callback_gas_limit().set(callback_gas_limit);
    }

    fn require_valid_registry(&self, registry_address: &ManagedAddress) {
        require!(!registry_address.is_zero(), ERROR_INVALID_REGISTRY);
        require!(
            self.blockchain().is_smart_contract(registry_address),
            ERROR_INVALID_REGISTRY
        );
    }

    fn require_valid_min_health_factor(&self, min_health_factor_bps: u64) {
        require!(
            min_health_factor_bps >= MIN_HEALTH_FACTOR_FLOOR_BPS,
            ERROR_INVALID_MIN_HEALTH_FACTOR
        );
    }
}
