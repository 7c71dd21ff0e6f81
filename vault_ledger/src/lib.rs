#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod config;
pub mod context;
pub mod guard;
pub mod ledger;
pub mod liquidation;
pub mod oracle;
pub mod propagation;
pub mod settlement;
pub mod storage;
pub mod validation;
pub mod views;

use common_constants::{
    DEFAULT_MIN_HEALTH_FACTOR_BPS, DEFAULT_PUSH_CALLBACK_GAS_LIMIT, DEFAULT_PUSH_GAS_LIMIT,
};
use context::ModuleContext;
use settlement::{SettlementRequest, SettlementVariant};

pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait VaultLedger:
    storage::Storage
    + config::ConfigModule
    + guard::EntryGuardModule
    + validation::ValidationModule
    + oracle::PricingModule
    + ledger::LedgerModule
    + propagation::CachePropagationModule
    + settlement::reservation::ReservationModule
    + settlement::SettlementModule
    + liquidation::LiquidationModule
    + views::ViewsModule
    + common_math::RiskMathModule
    + common_events::EventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the vault ledger.
    ///
    /// # Arguments
    /// - `registry_address`: Module registry used to resolve every collaborator.
    /// - `opt_min_health_factor_bps`: Liquidation threshold, at least `10_000`.
    ///   Defaults to `DEFAULT_MIN_HEALTH_FACTOR_BPS`.
    #[init]
    fn init(
        &self,
        registry_address: ManagedAddress,
        opt_min_health_factor_bps: OptionalValue<u64>,
    ) {
        let min_health_factor_bps = opt_min_health_factor_bps
            .into_option()
            .unwrap_or(DEFAULT_MIN_HEALTH_FACTOR_BPS);

        self.require_valid_registry(&registry_address);
        self.require_valid_min_health_factor(min_health_factor_bps);

        self.registry_address().set(&registry_address);
        self.min_health_factor_bps().set(min_health_factor_bps);
        self.push_gas_limit().set(DEFAULT_PUSH_GAS_LIMIT);
        self.push_callback_gas_limit()
            .set(DEFAULT_PUSH_CALLBACK_GAS_LIMIT);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Records new debt for `user`. Callable by the orchestration entry point only.
    #[endpoint(borrow)]
    fn borrow(
        &self,
        user: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> LedgerUpdate<Self::Api> {
        let _guard = self.lock_reentrancy();
        self.require_not_paused();

        let mut ctx = ModuleContext::new(self);
        let caller = self.blockchain().get_caller();
        self.require_orchestration_entry(&mut ctx, &caller);
        self.require_non_zero_address(&user);
        self.require_valid_asset(&asset);

        let update = self.record_borrow(&mut ctx, &user, &asset, &amount);
        self.propagate_update(&mut ctx, &update);

        update
    }

    /// Records a voluntary repayment. Repaying more than the outstanding debt fails.
    #[endpoint(repay)]
    fn repay(
        &self,
        user: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> LedgerUpdate<Self::Api> {
        let _guard = self.lock_reentrancy();
        self.require_not_paused();

        let mut ctx = ModuleContext::new(self);
        let caller = self.blockchain().get_caller();
        self.require_orchestration_entry(&mut ctx, &caller);
        self.require_non_zero_address(&user);
        self.require_valid_asset(&asset);

        let update = self.record_repay(&mut ctx, &user, &asset, &amount);
        self.propagate_update(&mut ctx, &update);

        update
    }

    /// Reduces debt on the liquidation path, clamped to what is outstanding.
    ///
    /// # Errors
    /// - `ERROR_MISSING_LIQUIDATOR_ROLE`: If the caller lacks the liquidator capability.
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: If `amount` is zero.
    #[endpoint(forceReduceDebt)]
    fn force_reduce_debt_endpoint(
        &self,
        user: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> LedgerUpdate<Self::Api> {
        let _guard = self.lock_reentrancy();

        let mut ctx = ModuleContext::new(self);
        let caller = self.blockchain().get_caller();

        self.process_forced_reduction(&mut ctx, &caller, &user, &asset, &amount)
    }

    /// Seizes collateral of `user`, reduces their debt and publishes the liquidation.
    ///
    /// # Arguments
    /// - `seize_amount`: Collateral taken from the collateral manager.
    /// - `reduce_amount`: Debt written off, clamped to what is outstanding.
    /// - `bonus`: Liquidator bonus, reported as is.
    /// - `opt_liquidator`: Receiver of the seized collateral, defaults to the caller.
    #[endpoint(liquidate)]
    fn liquidate(
        &self,
        user: ManagedAddress,
        collateral_asset: EgldOrEsdtTokenIdentifier,
        debt_asset: EgldOrEsdtTokenIdentifier,
        seize_amount: BigUint,
        reduce_amount: BigUint,
        bonus: BigUint,
        opt_liquidator: OptionalValue<ManagedAddress>,
    ) -> LiquidationOutcome<Self::Api> {
        let _guard = self.lock_reentrancy();

        let mut ctx = ModuleContext::new(self);
        let caller = self.blockchain().get_caller();
        let liquidator = match opt_liquidator {
            OptionalValue::Some(liquidator) => liquidator,
            OptionalValue::None => caller.clone(),
        };

        self.process_liquidation(
            &mut ctx,
            &caller,
            &user,
            &collateral_asset,
            &debt_asset,
            &seize_amount,
            &reduce_amount,
            &bonus,
            &liquidator,
        )
    }

    /// Settles a matched intent with fee routing and returns the new loan order id.
    ///
    /// # Payment
    /// - Optional borrower collateral, forwarded to the collateral manager.
    #[payable]
    #[endpoint(finalizeAtomicFull)]
    fn finalize_atomic_full(
        &self,
        intent_hash: IntentHash<Self::Api>,
        borrower: ManagedAddress,
        lender: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        rate_bps: u64,
        term_days: u64,
    ) -> u64 {
        let _guard = self.lock_reentrancy();
        self.require_not_paused();

        let mut ctx = ModuleContext::new(self);
        let caller = self.blockchain().get_caller();
        let request = SettlementRequest {
            intent_hash,
            borrower,
            lender,
            asset,
            amount,
            rate_bps,
            term_days,
        };

        self.process_settlement(&mut ctx, &caller, &request, SettlementVariant::Full)
    }

    /// Settles a matched intent without fee routing.
    ///
    /// Deprecated, `finalizeAtomicFull` is the canonical settlement path.
    #[payable]
    #[endpoint(finalizeAtomic)]
    fn finalize_atomic(
        &self,
        intent_hash: IntentHash<Self::Api>,
        borrower: ManagedAddress,
        lender: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        rate_bps: u64,
        term_days: u64,
    ) -> u64 {
        let _guard = self.lock_reentrancy();
        self.require_not_paused();

        let mut ctx = ModuleContext::new(self);
        let caller = self.blockchain().get_caller();
        let request = SettlementRequest {
            intent_hash,
            borrower,
            lender,
            asset,
            amount,
            rate_bps,
            term_days,
        };

        self.process_settlement(&mut ctx, &caller, &request, SettlementVariant::Direct)
    }

    /// Stages lender funds under `intent_hash` until the match settles.
    ///
    /// # Payment
    /// - Exactly `amount` of `asset`.
    ///
    /// # Errors
    /// - `ERROR_PAYMENT_MISMATCH`: If the payment differs from `asset`/`amount`.
    /// - `ERROR_ALREADY_RESERVED`: If the intent already has an active reservation.
    #[payable]
    #[endpoint(reserve)]
    fn reserve(
        &self,
        lender: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        intent_hash: IntentHash<Self::Api>,
    ) {
        let _guard = self.lock_reentrancy();
        self.require_not_paused();

        let mut ctx = ModuleContext::new(self);
        let caller = self.blockchain().get_caller();
        self.require_orchestration_entry(&mut ctx, &caller);

        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == asset && payment.token_nonce == 0 && payment.amount == amount,
            ERROR_PAYMENT_MISMATCH
        );

        self.create_reservation(&lender, &asset, &amount, &intent_hash);
    }

    /// Returns an unused reservation to its lender.
    #[endpoint(cancelReservation)]
    fn cancel_reservation(
        &self,
        intent_hash: IntentHash<Self::Api>,
    ) -> MultiValue2<EgldOrEsdtTokenIdentifier, BigUint> {
        let _guard = self.lock_reentrancy();

        let caller = self.blockchain().get_caller();
        let (asset, amount) = self.cancel_reservation_of(&intent_hash, &caller);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&asset, 0, &amount)
            .transfer_if_not_empty();

        (asset, amount).into()
    }
}
