#![no_std]

use common_constants::BPS;

multiversx_sc::imports!();

/// Health and risk arithmetic over collateral/debt valuations.
///
/// Every ratio is expressed in basis points, `10_000` being 100%.
#[multiversx_sc::module]
pub trait RiskMathModule {
    /// `2^256 - 1`, the health factor of a position without debt.
    fn max_health_factor(&self) -> BigUint {
        BigUint::from(2u64).pow(256) - BigUint::from(1u64)
    }

    /// True iff `collateral * 10_000 < debt * min_health_factor_bps`.
    ///
    /// Works on products only, a debt of zero is never under-collateralized.
    fn is_under_collateralized(
        &self,
        collateral_value: &BigUint,
        debt_value: &BigUint,
        min_health_factor_bps: u64,
    ) -> bool {
        if debt_value == &BigUint::zero() {
            return false;
        }

        let weighted_collateral = collateral_value * &BigUint::from(BPS);
        let weighted_debt = debt_value * &BigUint::from(min_health_factor_bps);

        weighted_collateral < weighted_debt
    }

    fn calc_health_factor(&self, collateral_value: &BigUint, debt_value: &BigUint) -> BigUint {
        if debt_value == &BigUint::zero() {
            return self.max_health_factor();
        }

        collateral_value * &BigUint::from(BPS) / debt_value
    }

    /// Loan to value, zero when there is no collateral to measure against.
    fn calc_ltv(&self, debt_value: &BigUint, collateral_value: &BigUint) -> BigUint {
        if collateral_value == &BigUint::zero() {
            return BigUint::zero();
        }

        debt_value * &BigUint::from(BPS) / collateral_value
    }

    /// Values `amount` at `price`, the price being scaled by `10^decimals`.
    fn convert_to_value(&self, amount: &BigUint, price: &BigUint, decimals: u8) -> BigUint {
        let scale = BigUint::from(10u64).pow(decimals as u32);

        amount * price / scale
    }

    /// Rounds down, fee cuts never exceed their share.
    fn bps_cut(&self, amount: &BigUint, bps: u64) -> BigUint {
        amount * &BigUint::from(bps) / BigUint::from(BPS)
    }

    fn get_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
