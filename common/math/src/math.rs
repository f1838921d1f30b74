#![no_std]

use common_constants::{VIRTUAL_ASSETS, VIRTUAL_SHARES, WAD, WAD_PRECISION};

multiversx_sc::imports!();

/// Number of terms of the `e^x - 1` expansion used for compounding.
pub const TAYLOR_TERMS: u64 = 5;

/// Fixed-point and share conversion helpers shared by the engine and the rate models.
///
/// All `BigUint` helpers are integer-only and round in an explicit direction.
/// Conversions between assets and shares add `VIRTUAL_SHARES` and `VIRTUAL_ASSETS`
/// to the pool totals, so an empty pool still has a well-defined price and a
/// donation to a small pool cannot move the share price profitably.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_div_down(&self, x: &BigUint, y: &BigUint, d: &BigUint) -> BigUint {
        (x * y) / d
    }

    fn mul_div_up(&self, x: &BigUint, y: &BigUint, d: &BigUint) -> BigUint {
        if *x == 0 || *y == 0 {
            return BigUint::zero();
        }
        let numerator = x * y;
        (numerator + d - BigUint::from(1u64)) / d
    }

    fn w_mul_down(&self, x: &BigUint, y: &BigUint) -> BigUint {
        self.mul_div_down(x, y, &BigUint::from(WAD))
    }

    fn w_div_down(&self, x: &BigUint, y: &BigUint) -> BigUint {
        self.mul_div_down(x, &BigUint::from(WAD), y)
    }

    fn w_div_up(&self, x: &BigUint, y: &BigUint) -> BigUint {
        self.mul_div_up(x, &BigUint::from(WAD), y)
    }

    /// `x - y`, or zero when `y > x`.
    fn zero_floor_sub(&self, x: &BigUint, y: &BigUint) -> BigUint {
        if x > y {
            x - y
        } else {
            BigUint::zero()
        }
    }

    fn min_of(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }

    fn to_shares_down(
        &self,
        assets: &BigUint,
        total_assets: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        self.mul_div_down(
            assets,
            &(total_shares + &BigUint::from(VIRTUAL_SHARES)),
            &(total_assets + &BigUint::from(VIRTUAL_ASSETS)),
        )
    }

    fn to_shares_up(
        &self,
        assets: &BigUint,
        total_assets: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        self.mul_div_up(
            assets,
            &(total_shares + &BigUint::from(VIRTUAL_SHARES)),
            &(total_assets + &BigUint::from(VIRTUAL_ASSETS)),
        )
    }

    fn to_assets_down(
        &self,
        shares: &BigUint,
        total_assets: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        self.mul_div_down(
            shares,
            &(total_assets + &BigUint::from(VIRTUAL_ASSETS)),
            &(total_shares + &BigUint::from(VIRTUAL_SHARES)),
        )
    }

    fn to_assets_up(
        &self,
        shares: &BigUint,
        total_assets: &BigUint,
        total_shares: &BigUint,
    ) -> BigUint {
        self.mul_div_up(
            shares,
            &(total_assets + &BigUint::from(VIRTUAL_ASSETS)),
            &(total_shares + &BigUint::from(VIRTUAL_SHARES)),
        )
    }

    /// Approximates `e^(rate * elapsed) - 1` in WAD with a truncated Taylor series.
    ///
    /// **Formula**:
    /// - `x = rate * elapsed`
    /// - `result = x + x^2/2! + x^3/3! + x^4/4! + x^5/5!`
    ///
    /// Each term is derived from the previous one (`term_n = term_{n-1} * x / (n * WAD)`)
    /// and rounded down, so the result never overstates continuous compounding by
    /// more than the truncated tail.
    ///
    /// # Arguments
    /// - `rate`: per-second rate, WAD.
    /// - `elapsed`: seconds since the last accrual.
    fn w_taylor_compounded(&self, rate: &BigUint, elapsed: u64) -> BigUint {
        let first_term = rate * &BigUint::from(elapsed);
        let mut term = first_term.clone();
        let mut sum = first_term.clone();

        for n in 2..=TAYLOR_TERMS {
            let denominator = BigUint::from(WAD) * BigUint::from(n);
            term = self.mul_div_down(&term, &first_term, &denominator);
            if term == 0 {
                break;
            }
            sum += &term;
        }

        sum
    }

    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    fn div_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;
        let denominator = scaled_b.into_raw_units();

        let half_denominator = denominator / &BigUint::from(2u64);
        let rounded_quotient = (numerator + half_denominator) / denominator;

        self.to_decimal(rounded_quotient, precision)
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn wad_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn wad(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }
}
