multiversx_sc::imports!();

use common_constants::{MAX_PRICE_DECIMALS, MODULE_PRICE_ORACLE};
use common_structs::PriceFeed;

use crate::{context::ModuleContext, storage};

#[multiversx_sc::module]
pub trait PricingModule:
    storage::Storage + common_math::RiskMathModule + common_events::EventsModule
{
    /// Feed used to value `asset` in this transaction.
    ///
    /// A usable oracle feed refreshes the last valid price. Otherwise the last
    /// valid price is served, and `None` is returned when there never was one.
    fn get_asset_price(
        &self,
        ctx: &mut ModuleContext<Self>,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> Option<PriceFeed<Self::Api>> {
        if let Some(feed) = ctx.get_cached_price(asset) {
            return Some(feed);
        }

        let feed = match self.read_oracle_feed(ctx, asset) {
            Some(feed) => {
                self.last_valid_price(asset).set(&feed);
                Some(feed)
            },
            None => self.fallback_price(asset),
        };

        if let Some(feed) = &feed {
            ctx.cache_price(asset, feed);
        }

        feed
    }

    fn read_oracle_feed(
        &self,
        ctx: &mut ModuleContext<Self>,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> Option<PriceFeed<Self::Api>> {
        let oracle = ctx.resolve_optional(MODULE_PRICE_ORACLE)?;
        let mapper = self.oracle_price_feed(oracle, asset);
        if mapper.is_empty() {
            return None;
        }

        let feed = mapper.get();
        if !self.is_feed_usable(ctx, &feed) {
            return None;
        }

        Some(feed)
    }

    fn is_feed_usable(&self, ctx: &ModuleContext<Self>, feed: &PriceFeed<Self::Api>) -> bool {
        if feed.price == BigUint::zero() || feed.decimals > MAX_PRICE_DECIMALS {
            return false;
        }

        if ctx.max_price_age == 0 {
            return true;
        }

        ctx.timestamp.saturating_sub(feed.timestamp) <= ctx.max_price_age
    }

    fn fallback_price(&self, asset: &EgldOrEsdtTokenIdentifier) -> Option<PriceFeed<Self::Api>> {
        let last_valid = self.last_valid_price(asset);
        if last_valid.is_empty() {
            self.price_fallback_event(asset, &BigUint::zero(), false);
            return None;
        }

        let feed = last_valid.get();
        self.price_fallback_event(asset, &feed.price, true);

        Some(feed)
    }

    /// Value of `amount` of `asset`, zero when the asset cannot be priced at all.
    fn value_of(
        &self,
        ctx: &mut ModuleContext<Self>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        if amount == &BigUint::zero() {
            return BigUint::zero();
        }

        match self.get_asset_price(ctx, asset) {
            Some(feed) => self.convert_to_value(amount, &feed.price, feed.decimals),
            None => BigUint::zero(),
        }
    }
}
