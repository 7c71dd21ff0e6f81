multiversx_sc::imports!();

use common_constants::MODULE_COLLATERAL_MANAGER;
use common_structs::PushFailure;

use crate::{context::ModuleContext, storage};

#[multiversx_sc::module]
pub trait ViewsModule: storage::Storage + common_math::RiskMathModule {
    /// Health factor of `user` in basis points, from the collateral manager's
    /// valuation and the last recorded debt value. Debt-free users report the
    /// maximum representable value.
    #[view(getHealthFactor)]
    fn get_health_factor(&self, user: ManagedAddress) -> BigUint {
        let mut ctx = ModuleContext::new(self);
        let collateral_value = self.live_collateral_value(&mut ctx, &user);
        let debt_value = self.user_total_debt_value(&user).get();

        self.calc_health_factor(&collateral_value, &debt_value)
    }

    #[view(getLtv)]
    fn get_ltv(&self, user: ManagedAddress) -> BigUint {
        let mut ctx = ModuleContext::new(self);
        let collateral_value = self.live_collateral_value(&mut ctx, &user);
        let debt_value = self.user_total_debt_value(&user).get();

        self.calc_ltv(&debt_value, &collateral_value)
    }

    /// True while the position sits under the configured minimum health factor.
    #[view(isLiquidatable)]
    fn is_liquidatable(&self, user: ManagedAddress) -> bool {
        let mut ctx = ModuleContext::new(self);
        let collateral_value = self.live_collateral_value(&mut ctx, &user);
        let debt_value = self.user_total_debt_value(&user).get();

        self.is_under_collateralized(&collateral_value, &debt_value, ctx.min_health_factor_bps)
    }

    /// # Errors
    /// - `ERROR_MODULE_NOT_REGISTERED`: If no collateral manager is registered.
    fn live_collateral_value(
        &self,
        ctx: &mut ModuleContext<Self>,
        user: &ManagedAddress,
    ) -> BigUint {
        let manager = ctx.resolve(MODULE_COLLATERAL_MANAGER);
        self.collateral_value(manager, user).get()
    }

    #[view(getLastPushFailure)]
    fn get_last_push_failure(&self) -> OptionalValue<PushFailure<Self::Api>> {
        let mapper = self.last_push_failure();
        if mapper.is_empty() {
            return OptionalValue::None;
        }

        OptionalValue::Some(mapper.get())
    }
}
