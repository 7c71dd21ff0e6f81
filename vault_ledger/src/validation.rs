multiversx_sc::imports!();

use common_constants::{MAX_RATE_BPS, MAX_TERM_DAYS, MIN_TERM_DAYS, MODULE_ASSET_WHITELIST};
use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ASSET_NOT_SUPPORTED,
    ERROR_INVALID_ASSET, ERROR_INVALID_RATE, ERROR_INVALID_TERM,
};

use crate::{context::ModuleContext, storage};

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ADDRESS_IS_ZERO);
    }

    fn require_valid_asset(&self, asset: &EgldOrEsdtTokenIdentifier) {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
    }

    /// The asset must be on the whitelist module's allow-list.
    fn require_asset_allowed(
        &self,
        ctx: &mut ModuleContext<Self>,
        asset: &EgldOrEsdtTokenIdentifier,
    ) {
        self.require_valid_asset(asset);
        let whitelist = ctx.resolve(MODULE_ASSET_WHITELIST);
        require!(
            self.whitelisted_asset(whitelist, asset).get(),
            ERROR_ASSET_NOT_SUPPORTED
        );
    }

    fn require_valid_loan_terms(&self, rate_bps: u64, term_days: u64) {
        require!(
            (MIN_TERM_DAYS..=MAX_TERM_DAYS).contains(&term_days),
            ERROR_INVALID_TERM
        );
        require!(rate_bps <= MAX_RATE_BPS, ERROR_INVALID_RATE);
    }
}
