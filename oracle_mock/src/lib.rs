#![no_std]

multiversx_sc::imports!();

use common_structs::PriceFeed;

/// Publishes `(price, timestamp, decimals)` feeds per asset.
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setPrice)]
    fn set_price(&self, asset: EgldOrEsdtTokenIdentifier, price: BigUint, decimals: u8) {
        let timestamp = self.blockchain().get_block_timestamp();
        self.price_feed(&asset)
            .set(PriceFeed::new(price, timestamp, decimals));
    }

    #[endpoint(setPriceWithTimestamp)]
    fn set_price_with_timestamp(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        price: BigUint,
        decimals: u8,
        timestamp: u64,
    ) {
        self.price_feed(&asset)
            .set(PriceFeed::new(price, timestamp, decimals));
    }

    #[endpoint(clearPrice)]
    fn clear_price(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.price_feed(&asset).clear();
    }

    #[view(getPrice)]
    #[storage_mapper("priceFeed")]
    fn price_feed(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<PriceFeed<Self::Api>>;
}
