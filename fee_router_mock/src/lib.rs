#![no_std]

multiversx_sc::imports!();

/// Fee router stand-in: publishes the fee cuts and keeps whatever is distributed.
#[multiversx_sc::contract]
pub trait FeeRouterMock {
    #[init]
    fn init(&self, platform_fee_bps: u64, ecosystem_fee_bps: u64) {
        self.set_fees(platform_fee_bps, ecosystem_fee_bps);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setFees)]
    fn set_fees(&self, platform_fee_bps: u64, ecosystem_fee_bps: u64) {
        self.platform_fee_bps().set(platform_fee_bps);
        self.ecosystem_fee_bps().set(ecosystem_fee_bps);
    }

    #[payable("*")]
    #[endpoint(distribute)]
    fn distribute(&self, asset: EgldOrEsdtTokenIdentifier, gross_amount: BigUint) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.token_identifier == asset, "Wrong fee asset");

        self.distributed(&asset)
            .update(|total| *total += &payment.amount);
        self.last_gross_amount().set(&gross_amount);
    }

    #[view(getPlatformFeeBps)]
    #[storage_mapper("platformFeeBps")]
    fn platform_fee_bps(&self) -> SingleValueMapper<u64>;

    #[view(getEcosystemFeeBps)]
    #[storage_mapper("ecosystemFeeBps")]
    fn ecosystem_fee_bps(&self) -> SingleValueMapper<u64>;

    #[view(getDistributed)]
    #[storage_mapper("distributed")]
    fn distributed(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getLastGrossAmount)]
    #[storage_mapper("lastGrossAmount")]
    fn last_gross_amount(&self) -> SingleValueMapper<BigUint>;
}
