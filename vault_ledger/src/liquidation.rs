multiversx_sc::imports!();

use common_constants::{MODULE_COLLATERAL_MANAGER, MODULE_LIQUIDATION_VIEW, ROLE_LIQUIDATOR};
use common_errors::{ERROR_COLLATERAL_NOT_RECEIVED, ERROR_MISSING_LIQUIDATOR_ROLE};
use common_proxies::{proxy_collateral, proxy_view};
use common_structs::{LedgerUpdate, LiquidationOutcome, LiquidationRecord};

use crate::{context::ModuleContext, guard, ledger, oracle, propagation, storage, validation};

/// Direct-to-ledger liquidation.
///
/// Seizure, debt reduction and the liquidation-event push form one atomic unit:
/// if any of them fails the whole liquidation reverts. Only the position and
/// health snapshots that follow are best-effort.
#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + guard::EntryGuardModule
    + ledger::LedgerModule
    + oracle::PricingModule
    + propagation::CachePropagationModule
    + common_math::RiskMathModule
    + common_events::EventsModule
{
    /// Liquidation-path gate: `actor` must hold the liquidator capability.
    fn require_liquidator(&self, ctx: &mut ModuleContext<Self>, actor: &ManagedAddress) {
        self.require_capability(ctx, ROLE_LIQUIDATOR, actor, ERROR_MISSING_LIQUIDATOR_ROLE);
    }

    /// Clamped debt reduction outside of a full liquidation.
    fn process_forced_reduction(
        &self,
        ctx: &mut ModuleContext<Self>,
        caller: &ManagedAddress,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> LedgerUpdate<Self::Api> {
        self.require_liquidator(ctx, caller);
        self.require_non_zero_address(user);

        let update = self.force_reduce_debt(ctx, user, asset, amount);
        self.propagate_update(ctx, &update);

        update
    }

    #[allow(clippy::too_many_arguments)]
    fn process_liquidation(
        &self,
        ctx: &mut ModuleContext<Self>,
        caller: &ManagedAddress,
        user: &ManagedAddress,
        collateral_asset: &EgldOrEsdtTokenIdentifier,
        debt_asset: &EgldOrEsdtTokenIdentifier,
        seize_amount: &BigUint,
        reduce_amount: &BigUint,
        bonus: &BigUint,
        liquidator: &ManagedAddress,
    ) -> LiquidationOutcome<Self::Api> {
        self.require_liquidator(ctx, caller);
        self.require_non_zero_address(user);
        self.require_non_zero_address(liquidator);
        self.require_valid_asset(collateral_asset);
        self.require_valid_asset(debt_asset);
        self.require_amount_greater_than_zero(seize_amount);

        self.seize_collateral(ctx, user, collateral_asset, seize_amount, liquidator);
        let update = self.force_reduce_debt(ctx, user, debt_asset, reduce_amount);

        let record = LiquidationRecord {
            user: user.clone(),
            collateral_asset: collateral_asset.clone(),
            debt_asset: debt_asset.clone(),
            seized: seize_amount.clone(),
            reduced: update.applied.clone(),
            liquidator: liquidator.clone(),
            bonus: bonus.clone(),
        };
        self.push_liquidation_record(ctx, &record);

        self.propagate_position(ctx, user, debt_asset);
        if collateral_asset != debt_asset {
            self.propagate_position(ctx, user, collateral_asset);
        }
        self.propagate_health(ctx, user);

        self.liquidation_executed_event(
            user,
            collateral_asset,
            debt_asset,
            &record.seized,
            &record.reduced,
            liquidator,
            bonus,
        );

        LiquidationOutcome {
            seized: record.seized,
            reduced: record.reduced,
            remaining_debt: update.new_debt,
            liquidator: record.liquidator,
        }
    }

    /// Withdraws `amount` of `asset` from `user` through the collateral manager
    /// and forwards it to `liquidator`. Over-requests fail in the collateral manager.
    fn seize_collateral(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        liquidator: &ManagedAddress,
    ) {
        let collateral_manager = ctx.resolve(MODULE_COLLATERAL_MANAGER);
        let balance_before = self.blockchain().get_sc_balance(asset, 0);

        self.tx()
            .to(&collateral_manager)
            .typed(proxy_collateral::CollateralManagerProxy)
            .withdraw_collateral(user, asset, amount)
            .sync_call();

        let balance_after = self.blockchain().get_sc_balance(asset, 0);
        require!(
            balance_after >= &balance_before + amount,
            ERROR_COLLATERAL_NOT_RECEIVED
        );

        self.tx()
            .to(liquidator)
            .egld_or_single_esdt(asset, 0, amount)
            .transfer();
    }

    /// Mandatory delivery of the liquidation evidence, a revert here reverts the liquidation.
    fn push_liquidation_record(
        &self,
        ctx: &mut ModuleContext<Self>,
        record: &LiquidationRecord<Self::Api>,
    ) {
        let liquidation_view = ctx.resolve(MODULE_LIQUIDATION_VIEW);

        self.tx()
            .to(&liquidation_view)
            .typed(proxy_view::CacheViewProxy)
            .push_liquidation_event(
                &record.user,
                &record.collateral_asset,
                &record.debt_asset,
                &record.seized,
                &record.reduced,
                &record.liquidator,
                &record.bonus,
            )
            .sync_call();
    }
}
