#![no_std]

multiversx_sc::imports!();

use common_errors::ERROR_PUSH_REJECTED;
use common_structs::{HealthSnapshot, LiquidationRecord, PositionSnapshot};

/// Read-side cache stand-in. Serves as position view, health view and
/// liquidation-events view, and can be switched to reject every push.
#[multiversx_sc::contract]
pub trait ViewMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setFailing)]
    fn set_failing(&self, failing: bool) {
        self.failing().set(failing);
    }

    #[endpoint(pushPositionUpdate)]
    fn push_position_update(
        &self,
        user: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        collateral: BigUint,
        debt: BigUint,
    ) {
        self.require_accepting();

        self.last_position(&user, &asset).set(PositionSnapshot {
            user: user.clone(),
            asset: asset.clone(),
            collateral,
            debt,
        });
        self.push_count().update(|count| *count += 1);
    }

    #[endpoint(pushHealthSnapshot)]
    fn push_health_snapshot(
        &self,
        user: ManagedAddress,
        health_factor_bps: BigUint,
        collateral_value: BigUint,
        debt_value: BigUint,
        timestamp: u64,
    ) {
        self.require_accepting();

        self.last_health(&user).set(HealthSnapshot {
            user: user.clone(),
            health_factor_bps,
            collateral_value,
            debt_value,
            timestamp,
        });
        self.push_count().update(|count| *count += 1);
    }

    #[endpoint(pushLiquidationEvent)]
    fn push_liquidation_event(
        &self,
        user: ManagedAddress,
        collateral_asset: EgldOrEsdtTokenIdentifier,
        debt_asset: EgldOrEsdtTokenIdentifier,
        seized: BigUint,
        reduced: BigUint,
        liquidator: ManagedAddress,
        bonus: BigUint,
    ) {
        self.require_accepting();

        self.liquidation_events().push(&LiquidationRecord {
            user,
            collateral_asset,
            debt_asset,
            seized,
            reduced,
            liquidator,
            bonus,
        });
        self.push_count().update(|count| *count += 1);
    }

    #[view(getLastLiquidationEvent)]
    fn get_last_liquidation_event(&self) -> LiquidationRecord<Self::Api> {
        let events = self.liquidation_events();
        require!(!events.is_empty(), "No liquidation recorded");

        events.get(events.len())
    }

    #[view(getLiquidationEventCount)]
    fn get_liquidation_event_count(&self) -> usize {
        self.liquidation_events().len()
    }

    fn require_accepting(&self) {
        require!(!self.failing().get(), ERROR_PUSH_REJECTED);
    }

    #[storage_mapper("failing")]
    fn failing(&self) -> SingleValueMapper<bool>;

    #[view(getLastPosition)]
    #[storage_mapper("lastPosition")]
    fn last_position(
        &self,
        user: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PositionSnapshot<Self::Api>>;

    #[view(getLastHealth)]
    #[storage_mapper("lastHealth")]
    fn last_health(&self, user: &ManagedAddress) -> SingleValueMapper<HealthSnapshot<Self::Api>>;

    #[storage_mapper("liquidationEvents")]
    fn liquidation_events(&self) -> VecMapper<LiquidationRecord<Self::Api>>;

    #[view(getPushCount)]
    #[storage_mapper("pushCount")]
    fn push_count(&self) -> SingleValueMapper<u64>;
}
