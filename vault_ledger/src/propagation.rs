multiversx_sc::imports!();

use common_constants::{MODULE_COLLATERAL_MANAGER, MODULE_HEALTH_VIEW, MODULE_VIEW};
use common_proxies::proxy_view;
use common_structs::{HealthSnapshot, LedgerUpdate, PositionSnapshot, PushFailure, PushPayload};

use crate::{context::ModuleContext, storage};

/// Best-effort delivery of position and health snapshots to the read-side views.
///
/// A push that cannot be delivered is turned into a failure record and never
/// fails the ledger mutation that triggered it.
#[multiversx_sc::module]
pub trait CachePropagationModule:
    storage::Storage + common_math::RiskMathModule + common_events::EventsModule
{
    /// Pushes both snapshots for the position touched by `update`.
    fn propagate_update(&self, ctx: &mut ModuleContext<Self>, update: &LedgerUpdate<Self::Api>) {
        self.propagate_position(ctx, &update.user, &update.asset);
        self.propagate_health(ctx, &update.user);
    }

    fn propagate_position(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) {
        if let Err(failure) = self.push_position_snapshot(ctx, user, asset) {
            self.record_push_failure(&failure);
        }
    }

    fn propagate_health(&self, ctx: &mut ModuleContext<Self>, user: &ManagedAddress) {
        if let Err(failure) = self.push_health_snapshot(ctx, user) {
            self.record_push_failure(&failure);
        }
    }

    fn push_position_snapshot(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> Result<(), PushFailure<Self::Api>> {
        let snapshot = self.build_position_snapshot(ctx, user, asset)?;
        let payload = PushPayload::Position(snapshot.clone());
        let target = self.resolve_push_target(ctx, MODULE_VIEW, &payload)?;

        self.tx()
            .to(&target)
            .typed(proxy_view::CacheViewProxy)
            .push_position_update(
                &snapshot.user,
                &snapshot.asset,
                &snapshot.collateral,
                &snapshot.debt,
            )
            .gas(self.push_gas_limit().get())
            .callback(
                self.callbacks()
                    .position_push_callback(target.clone(), snapshot),
            )
            .gas_for_callback(self.push_callback_gas_limit().get())
            .register_promise();

        Ok(())
    }

    fn push_health_snapshot(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
    ) -> Result<(), PushFailure<Self::Api>> {
        let snapshot = self.build_health_snapshot(ctx, user)?;
        let payload = PushPayload::Health(snapshot.clone());
        let target = self.resolve_push_target(ctx, MODULE_HEALTH_VIEW, &payload)?;

        self.tx()
            .to(&target)
            .typed(proxy_view::CacheViewProxy)
            .push_health_snapshot(
                &snapshot.user,
                &snapshot.health_factor_bps,
                &snapshot.collateral_value,
                &snapshot.debt_value,
                snapshot.timestamp,
            )
            .gas(self.push_gas_limit().get())
            .callback(
                self.callbacks()
                    .health_push_callback(target.clone(), snapshot),
            )
            .gas_for_callback(self.push_callback_gas_limit().get())
            .register_promise();

        Ok(())
    }

    /// Address of an optional view, or the failure describing why it cannot receive pushes.
    fn resolve_push_target(
        &self,
        ctx: &mut ModuleContext<Self>,
        key: &[u8],
        payload: &PushPayload<Self::Api>,
    ) -> Result<ManagedAddress, PushFailure<Self::Api>> {
        let target = match ctx.resolve_optional(key) {
            Some(target) => target,
            None => return Err(PushFailure::module_missing(payload.clone())),
        };

        if !self.blockchain().is_smart_contract(&target) {
            return Err(PushFailure::no_code(target, payload.clone()));
        }

        Ok(target)
    }

    /// Fails without a registered collateral manager; the recorded payload
    /// then carries the debt side only.
    fn build_position_snapshot(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> Result<PositionSnapshot<Self::Api>, PushFailure<Self::Api>> {
        let mut snapshot = PositionSnapshot {
            user: user.clone(),
            asset: asset.clone(),
            collateral: BigUint::zero(),
            debt: self.debt(user, asset).get(),
        };

        match ctx.resolve_optional(MODULE_COLLATERAL_MANAGER) {
            Some(manager) => {
                snapshot.collateral = self.collateral_balance(manager, user, asset).get();
                Ok(snapshot)
            },
            None => Err(PushFailure::collateral_unavailable(
                PushPayload::Position(snapshot),
            )),
        }
    }

    fn build_health_snapshot(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
    ) -> Result<HealthSnapshot<Self::Api>, PushFailure<Self::Api>> {
        let debt_value = self.user_total_debt_value(user).get();

        let manager = match ctx.resolve_optional(MODULE_COLLATERAL_MANAGER) {
            Some(manager) => manager,
            None => {
                let partial = HealthSnapshot {
                    user: user.clone(),
                    health_factor_bps: BigUint::zero(),
                    collateral_value: BigUint::zero(),
                    debt_value,
                    timestamp: ctx.timestamp,
                };
                return Err(PushFailure::collateral_unavailable(PushPayload::Health(
                    partial,
                )));
            },
        };

        let collateral_value = self.collateral_value(manager, user).get();

        Ok(HealthSnapshot {
            user: user.clone(),
            health_factor_bps: self.calc_health_factor(&collateral_value, &debt_value),
            collateral_value,
            debt_value,
            timestamp: ctx.timestamp,
        })
    }

    fn record_push_failure(&self, failure: &PushFailure<Self::Api>) {
        match &failure.payload {
            PushPayload::Position(snapshot) => self.cache_update_failed_event(
                &failure.target,
                &snapshot.user,
                &snapshot.asset,
                &snapshot.collateral,
                &snapshot.debt,
                failure.reason,
                &failure.message,
            ),
            PushPayload::Health(snapshot) => self.health_push_failed_event(
                &failure.target,
                &snapshot.user,
                &snapshot.health_factor_bps,
                &snapshot.collateral_value,
                &snapshot.debt_value,
                failure.reason,
                &failure.message,
            ),
        }

        self.push_failure_count().update(|count| *count += 1);
        self.last_push_failure().set(failure);
    }

    #[promises_callback]
    fn position_push_callback(
        &self,
        target: ManagedAddress,
        snapshot: PositionSnapshot<Self::Api>,
        #[call_result] result: ManagedAsyncCallResult<()>,
    ) {
        if let ManagedAsyncCallResult::Err(err) = result {
            let failure =
                PushFailure::reverted(target, PushPayload::Position(snapshot), err.err_msg);
            self.record_push_failure(&failure);
        }
    }

    #[promises_callback]
    fn health_push_callback(
        &self,
        target: ManagedAddress,
        snapshot: HealthSnapshot<Self::Api>,
        #[call_result] result: ManagedAsyncCallResult<()>,
    ) {
        if let ManagedAsyncCallResult::Err(err) = result {
            let failure =
                PushFailure::reverted(target, PushPayload::Health(snapshot), err.err_msg);
            self.record_push_failure(&failure);
        }
    }
}
