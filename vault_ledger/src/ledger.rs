multiversx_sc::imports!();

use common_errors::{ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_OVERPAY};
use common_structs::LedgerUpdate;

use crate::{context::ModuleContext, oracle, storage};

/// Authoritative debt accounting.
///
/// Per-user debt, per-asset totals and the user debt-asset index always move
/// together; an asset is indexed for a user iff that user's debt in it is non-zero.
#[multiversx_sc::module]
pub trait LedgerModule:
    storage::Storage
    + oracle::PricingModule
    + common_math::RiskMathModule
    + common_events::EventsModule
{
    /// Increases the debt of `user` in `asset` by `amount`.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: If `amount` is zero.
    fn record_borrow(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> LedgerUpdate<Self::Api> {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let previous_debt = self.debt(user, asset).get();
        let new_debt = &previous_debt + amount;

        self.debt(user, asset).set(&new_debt);
        self.total_debt_by_asset(asset)
            .update(|total| *total += amount);
        self.user_debt_assets(user).insert(asset.clone());

        self.finish_update(ctx, user, asset, previous_debt, new_debt, amount.clone(), true)
    }

    /// Strict voluntary repayment, never clamped.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: If `amount` is zero.
    /// - `ERROR_OVERPAY`: If `amount` exceeds the outstanding debt.
    fn record_repay(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> LedgerUpdate<Self::Api> {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let previous_debt = self.debt(user, asset).get();
        require!(amount <= &previous_debt, ERROR_OVERPAY);

        self.apply_reduction(ctx, user, asset, previous_debt, amount.clone())
    }

    /// Liquidation-path reduction, clamped to the outstanding debt.
    ///
    /// Reducing an asset the user never borrowed is a zero-delta no-op.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: If `amount` is zero.
    fn force_reduce_debt(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> LedgerUpdate<Self::Api> {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let previous_debt = self.debt(user, asset).get();
        let reduction = self.get_min(amount.clone(), previous_debt.clone());

        let unchanged = LedgerUpdate {
            user: user.clone(),
            asset: asset.clone(),
            previous_debt: previous_debt.clone(),
            new_debt: previous_debt.clone(),
            applied: reduction.clone(),
            is_increase: false,
            user_debt_value: self.user_total_debt_value(user).get(),
        };
        if unchanged.is_noop() {
            return unchanged;
        }

        self.apply_reduction(ctx, user, asset, previous_debt, reduction)
    }

    fn apply_reduction(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        previous_debt: BigUint,
        reduction: BigUint,
    ) -> LedgerUpdate<Self::Api> {
        let new_debt = &previous_debt - &reduction;

        let debt_mapper = self.debt(user, asset);
        if new_debt == BigUint::zero() {
            debt_mapper.clear();
            self.user_debt_assets(user).swap_remove(asset);
        } else {
            debt_mapper.set(&new_debt);
        }

        self.total_debt_by_asset(asset)
            .update(|total| *total -= &reduction);

        self.finish_update(ctx, user, asset, previous_debt, new_debt, reduction, false)
    }

    #[allow(clippy::too_many_arguments)]
    fn finish_update(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        previous_debt: BigUint,
        new_debt: BigUint,
        applied: BigUint,
        is_increase: bool,
    ) -> LedgerUpdate<Self::Api> {
        let user_debt_value = self.refresh_user_debt_value(ctx, user);
        self.debt_recorded_event(user, asset, &new_debt, is_increase);

        LedgerUpdate {
            user: user.clone(),
            asset: asset.clone(),
            previous_debt,
            new_debt,
            applied,
            is_increase,
            user_debt_value,
        }
    }

    /// Revalues every indexed debt of `user` and folds the difference into the system total.
    fn refresh_user_debt_value(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
    ) -> BigUint {
        let mut user_debt_value = BigUint::zero();
        for asset in self.user_debt_assets(user).iter() {
            let debt = self.debt(user, &asset).get();
            user_debt_value += self.value_of(ctx, &asset, &debt);
        }

        let previous_value = self.user_total_debt_value(user).get();
        let total_mapper = self.total_debt_value();
        let total = total_mapper.get();
        let base = if total > previous_value {
            total - &previous_value
        } else {
            BigUint::zero()
        };
        let new_total = base + &user_debt_value;

        total_mapper.set(&new_total);
        if user_debt_value == BigUint::zero() {
            self.user_total_debt_value(user).clear();
        } else {
            self.user_total_debt_value(user).set(&user_debt_value);
        }

        self.debt_value_updated_event(user, &user_debt_value, &new_total);

        user_debt_value
    }
}
