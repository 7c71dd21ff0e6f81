multiversx_sc::imports!();

use common_structs::{IntentHash, LoanOrder, PriceFeed, PushFailure, Reservation};

#[multiversx_sc::module]
pub trait Storage {
    /// Address of the module registry every collaborator is resolved from.
    #[view(getRegistryAddress)]
    #[storage_mapper("registryAddress")]
    fn registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Health factor, in bps, below which a position is under-collateralized.
    #[view(getMinHealthFactor)]
    #[storage_mapper("minHealthFactorBps")]
    fn min_health_factor_bps(&self) -> SingleValueMapper<u64>;

    /// Oldest oracle feed accepted, in seconds. Zero disables the check.
    #[view(getMaxPriceAge)]
    #[storage_mapper("maxPriceAge")]
    fn max_price_age(&self) -> SingleValueMapper<u64>;

    #[view(getPushGasLimit)]
    #[storage_mapper("pushGasLimit")]
    fn push_gas_limit(&self) -> SingleValueMapper<u64>;

    #[view(getPushCallbackGasLimit)]
    #[storage_mapper("pushCallbackGasLimit")]
    fn push_callback_gas_limit(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("reentrancyLock")]
    fn reentrancy_lock(&self) -> SingleValueMapper<bool>;

    /// Outstanding debt of a user in one asset.
    #[view(getDebt)]
    #[storage_mapper("debt")]
    fn debt(
        &self,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Sum of every user's debt in one asset.
    #[view(getTotalDebtByAsset)]
    #[storage_mapper("totalDebtByAsset")]
    fn total_debt_by_asset(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    /// Assets in which the user currently owes a non-zero amount.
    #[view(getUserDebtAssets)]
    #[storage_mapper("userDebtAssets")]
    fn user_debt_assets(
        &self,
        user: &ManagedAddress,
    ) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getUserTotalDebtValue)]
    #[storage_mapper("userTotalDebtValue")]
    fn user_total_debt_value(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalDebtValue)]
    #[storage_mapper("totalDebtValue")]
    fn total_debt_value(&self) -> SingleValueMapper<BigUint>;

    /// Last feed that passed validation, used when the oracle cannot be trusted.
    #[storage_mapper("lastValidPrice")]
    fn last_valid_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PriceFeed<Self::Api>>;

    #[storage_mapper("reservations")]
    fn reservations(
        &self,
        intent_hash: &IntentHash<Self::Api>,
    ) -> SingleValueMapper<Reservation<Self::Api>>;

    #[storage_mapper("loanOrders")]
    fn loan_orders(&self, order_id: u64) -> SingleValueMapper<LoanOrder<Self::Api>>;

    #[view(getLastOrderId)]
    #[storage_mapper("lastOrderId")]
    fn last_order_id(&self) -> SingleValueMapper<u64>;

    #[view(getPushFailureCount)]
    #[storage_mapper("pushFailureCount")]
    fn push_failure_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("lastPushFailure")]
    fn last_push_failure(&self) -> SingleValueMapper<PushFailure<Self::Api>>;

    // Collaborator state, read in place from the owning contract.

    #[storage_mapper_from_address("moduleAddress")]
    fn registered_module(
        &self,
        registry_address: ManagedAddress,
        key: &ManagedBuffer,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress>;

    #[storage_mapper_from_address("hasRole")]
    fn granted_role(
        &self,
        access_control_address: ManagedAddress,
        role: &ManagedBuffer,
        account: &ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;

    #[storage_mapper_from_address("allowedAsset")]
    fn whitelisted_asset(
        &self,
        whitelist_address: ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<bool, ManagedAddress>;

    #[storage_mapper_from_address("priceFeed")]
    fn oracle_price_feed(
        &self,
        oracle_address: ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PriceFeed<Self::Api>, ManagedAddress>;

    #[storage_mapper_from_address("collateral")]
    fn collateral_balance(
        &self,
        collateral_manager_address: ManagedAddress,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("userTotalCollateralValue")]
    fn collateral_value(
        &self,
        collateral_manager_address: ManagedAddress,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("platformFeeBps")]
    fn router_platform_fee_bps(
        &self,
        fee_router_address: ManagedAddress,
    ) -> SingleValueMapper<u64, ManagedAddress>;

    #[storage_mapper_from_address("ecosystemFeeBps")]
    fn router_ecosystem_fee_bps(
        &self,
        fee_router_address: ManagedAddress,
    ) -> SingleValueMapper<u64, ManagedAddress>;
}
