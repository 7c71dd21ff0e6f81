#![no_std]

multiversx_sc::imports!();

use common_errors::{ERROR_INSUFFICIENT_COLLATERAL, ERROR_PAYMENT_MISMATCH};
use common_proxies::proxy_vault_ledger;

/// Collateral manager stand-in. Every collateral unit is valued at 1.
#[multiversx_sc::contract]
pub trait CollateralMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(depositCollateral)]
    fn deposit_collateral(
        &self,
        user: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == asset && payment.amount == amount,
            ERROR_PAYMENT_MISMATCH
        );

        self.collateral(&user, &asset)
            .update(|balance| *balance += &amount);
        self.user_total_collateral_value(&user)
            .update(|value| *value += &amount);
    }

    /// Releases `amount` of `asset` from `user` to the caller, never more than deposited.
    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(
        &self,
        user: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        let collateral = self.collateral(&user, &asset);
        let available = collateral.get();
        require!(available >= amount, ERROR_INSUFFICIENT_COLLATERAL);

        collateral.set(&(available - &amount));
        self.user_total_collateral_value(&user)
            .update(|value| *value -= &amount);

        // Hostile collateral manager: tries to mutate the ledger mid-flow
        if !self.reentry_target().is_empty() {
            self.tx()
                .to(self.reentry_target().get())
                .typed(proxy_vault_ledger::VaultLedgerProxy)
                .force_reduce_debt(&user, &asset, BigUint::from(1u64))
                .sync_call();
        }

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&asset, 0, &amount)
            .transfer();
    }

    #[endpoint(setReentryTarget)]
    fn set_reentry_target(&self, target: ManagedAddress) {
        self.reentry_target().set(&target);
    }

    #[view(getCollateral)]
    #[storage_mapper("collateral")]
    fn collateral(
        &self,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[view(getUserTotalCollateralValue)]
    #[storage_mapper("userTotalCollateralValue")]
    fn user_total_collateral_value(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reentryTarget")]
    fn reentry_target(&self) -> SingleValueMapper<ManagedAddress>;
}
