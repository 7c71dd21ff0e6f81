multiversx_sc::imports!();

pub mod reservation;

use common_constants::{
    MODULE_COLLATERAL_MANAGER, MODULE_FEE_ROUTER, ROLE_ORDER_CREATOR, SECONDS_PER_DAY,
};
use common_errors::{
    ERROR_FEES_EXCEED_AMOUNT, ERROR_INSUFFICIENT_RESERVATION, ERROR_INVALID_COLLATERAL_PAYMENT,
    ERROR_MISSING_ORDER_CREATOR_ROLE, ERROR_RESERVATION_ASSET_MISMATCH,
};
use common_proxies::{proxy_collateral, proxy_fee_router};
use common_structs::{IntentHash, LoanOrder};

use crate::{context::ModuleContext, guard, ledger, oracle, propagation, storage, validation};

/// How the settled amount reaches the borrower.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SettlementVariant {
    /// Whole amount straight to the borrower. Kept for callers of `finalizeAtomic`.
    Direct,
    /// Platform and ecosystem cuts routed through the fee router, net to the borrower.
    Full,
}

/// A matched borrow/lend intent, as received by the settlement endpoints.
pub struct SettlementRequest<M: ManagedTypeApi> {
    pub intent_hash: IntentHash<M>,
    pub borrower: ManagedAddress<M>,
    pub lender: ManagedAddress<M>,
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub amount: BigUint<M>,
    pub rate_bps: u64,
    pub term_days: u64,
}

pub struct Disbursement<M: ManagedTypeApi> {
    pub net_amount: BigUint<M>,
    pub platform_cut: BigUint<M>,
    pub ecosystem_cut: BigUint<M>,
}

/// Atomic settlement of a matched intent.
///
/// Collateral intake, reservation consumption, disbursement, the ledger write
/// and order creation either all happen or the transaction reverts. Only the
/// trailing cache pushes are best-effort.
#[multiversx_sc::module]
pub trait SettlementModule:
    storage::Storage
    + validation::ValidationModule
    + guard::EntryGuardModule
    + ledger::LedgerModule
    + oracle::PricingModule
    + propagation::CachePropagationModule
    + reservation::ReservationModule
    + common_math::RiskMathModule
    + common_events::EventsModule
{
    fn process_settlement(
        &self,
        ctx: &mut ModuleContext<Self>,
        caller: &ManagedAddress,
        request: &SettlementRequest<Self::Api>,
        variant: SettlementVariant,
    ) -> u64 {
        self.require_orchestration_entry(ctx, caller);
        self.require_capability(
            ctx,
            ROLE_ORDER_CREATOR,
            caller,
            ERROR_MISSING_ORDER_CREATOR_ROLE,
        );
        self.validate_settlement(ctx, request);

        self.intake_collateral(ctx, &request.borrower);
        self.take_reserved_funds(request, variant);

        let disbursement = self.disburse(ctx, request, variant);
        let update = self.record_borrow(ctx, &request.borrower, &request.asset, &request.amount);
        let order = self.create_loan_order(ctx, request);

        self.settlement_finalized_event(
            order.id,
            &request.borrower,
            &request.lender,
            &request.asset,
            &request.amount,
            &disbursement.net_amount,
            &disbursement.platform_cut,
            &disbursement.ecosystem_cut,
        );

        self.propagate_update(ctx, &update);

        order.id
    }

    fn validate_settlement(
        &self,
        ctx: &mut ModuleContext<Self>,
        request: &SettlementRequest<Self::Api>,
    ) {
        self.require_asset_allowed(ctx, &request.asset);
        self.require_amount_greater_than_zero(&request.amount);
        self.require_non_zero_address(&request.borrower);
        self.require_non_zero_address(&request.lender);
        self.require_valid_loan_terms(request.rate_bps, request.term_days);
    }

    /// Forwards the optional collateral payment to the collateral manager on behalf of `borrower`.
    fn intake_collateral(&self, ctx: &mut ModuleContext<Self>, borrower: &ManagedAddress) {
        let payment = self.call_value().egld_or_single_esdt();
        if payment.amount == BigUint::zero() {
            return;
        }

        require!(payment.token_nonce == 0, ERROR_INVALID_COLLATERAL_PAYMENT);

        let collateral_manager = ctx.resolve(MODULE_COLLATERAL_MANAGER);
        self.tx()
            .to(&collateral_manager)
            .typed(proxy_collateral::CollateralManagerProxy)
            .deposit_collateral(borrower, &payment.token_identifier, &payment.amount)
            .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
            .sync_call();
    }

    /// Releases the lender's staged funds for this settlement.
    ///
    /// The full variant takes exactly the settled amount and leaves any surplus
    /// reserved for later fills. The direct variant consumes the whole
    /// reservation and refunds the surplus to the lender.
    fn take_reserved_funds(
        &self,
        request: &SettlementRequest<Self::Api>,
        variant: SettlementVariant,
    ) {
        match variant {
            SettlementVariant::Full => {
                let (asset, usage) = self.consume_reservation_up_to(
                    &request.intent_hash,
                    &request.lender,
                    &request.amount,
                );
                require!(asset == request.asset, ERROR_RESERVATION_ASSET_MISMATCH);
                require!(usage.used == request.amount, ERROR_INSUFFICIENT_RESERVATION);
            },
            SettlementVariant::Direct => {
                let (asset, reserved) =
                    self.consume_reservation(&request.intent_hash, &request.lender);
                require!(asset == request.asset, ERROR_RESERVATION_ASSET_MISMATCH);
                require!(reserved >= request.amount, ERROR_INSUFFICIENT_RESERVATION);

                let surplus = reserved - &request.amount;
                self.tx()
                    .to(&request.lender)
                    .egld_or_single_esdt(&asset, 0, &surplus)
                    .transfer_if_not_empty();
            },
        }
    }

    fn disburse(
        &self,
        ctx: &mut ModuleContext<Self>,
        request: &SettlementRequest<Self::Api>,
        variant: SettlementVariant,
    ) -> Disbursement<Self::Api> {
        let disbursement = match variant {
            SettlementVariant::Direct => Disbursement {
                net_amount: request.amount.clone(),
                platform_cut: BigUint::zero(),
                ecosystem_cut: BigUint::zero(),
            },
            SettlementVariant::Full => self.distribute_fees(ctx, &request.asset, &request.amount),
        };

        self.tx()
            .to(&request.borrower)
            .egld_or_single_esdt(&request.asset, 0, &disbursement.net_amount)
            .transfer_if_not_empty();

        disbursement
    }

    /// Sends the platform and ecosystem cuts of `gross_amount` to the fee router.
    fn distribute_fees(
        &self,
        ctx: &mut ModuleContext<Self>,
        asset: &EgldOrEsdtTokenIdentifier,
        gross_amount: &BigUint,
    ) -> Disbursement<Self::Api> {
        let fee_router = ctx.resolve(MODULE_FEE_ROUTER);
        let platform_fee_bps = self.router_platform_fee_bps(fee_router.clone()).get();
        let ecosystem_fee_bps = self.router_ecosystem_fee_bps(fee_router.clone()).get();

        let platform_cut = self.bps_cut(gross_amount, platform_fee_bps);
        let ecosystem_cut = self.bps_cut(gross_amount, ecosystem_fee_bps);
        let total_cut = &platform_cut + &ecosystem_cut;
        require!(&total_cut <= gross_amount, ERROR_FEES_EXCEED_AMOUNT);

        if total_cut > BigUint::zero() {
            self.tx()
                .to(&fee_router)
                .typed(proxy_fee_router::FeeRouterProxy)
                .distribute(asset, gross_amount)
                .egld_or_single_esdt(asset, 0, &total_cut)
                .sync_call();
        }

        Disbursement {
            net_amount: gross_amount - &total_cut,
            platform_cut,
            ecosystem_cut,
        }
    }

    fn create_loan_order(
        &self,
        ctx: &ModuleContext<Self>,
        request: &SettlementRequest<Self::Api>,
    ) -> LoanOrder<Self::Api> {
        let order_id = self.last_order_id().update(|last_id| {
            *last_id += 1;
            *last_id
        });

        let created_at = ctx.timestamp;
        let order = LoanOrder {
            id: order_id,
            intent_hash: request.intent_hash.clone(),
            borrower: request.borrower.clone(),
            lender: request.lender.clone(),
            asset: request.asset.clone(),
            principal: request.amount.clone(),
            rate_bps: request.rate_bps,
            term_days: request.term_days,
            created_at,
            maturity: created_at + request.term_days * SECONDS_PER_DAY,
            repaid_amount: BigUint::zero(),
        };

        self.loan_orders(order_id).set(&order);
        self.loan_order_created_event(order_id, &order);

        order
    }

    #[view(getLoanOrder)]
    fn get_loan_order(&self, order_id: u64) -> OptionalValue<LoanOrder<Self::Api>> {
        let order = self.loan_orders(order_id);
        if order.is_empty() {
            return OptionalValue::None;
        }

        OptionalValue::Some(order.get())
    }
}
