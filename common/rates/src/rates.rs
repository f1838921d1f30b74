#![no_std]
use common_constants::{SECONDS_PER_YEAR, WAD_PRECISION};
use common_structs::{AccrualResult, Market, MarketBalances, RateModelParams};

multiversx_sc::imports!();

/// The InterestRates module provides the rate curve used by the reference rate model
/// and the accrual arithmetic applied by the engine.
///
/// **Scope**: Turns a per-second borrow rate and an elapsed window into interest,
/// protocol fee shares and updated market totals.
///
/// **Goal**: Keep accrual deterministic and integer-only, rounding against the borrower
/// and the fee recipient so the pool is never short.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Calculates the per-second borrow rate for a given utilization.
    ///
    /// **Formula**:
    /// - If `utilization < optimal_utilization`: `base_rate + utilization * slope1 / optimal_utilization`.
    /// - Otherwise: `base_rate + slope1 + (utilization - optimal_utilization) * slope2 / (WAD - optimal_utilization)`.
    /// - The annual rate is capped at `max_rate` and divided by `SECONDS_PER_YEAR`.
    ///
    /// # Arguments
    /// - `utilization`: `total_borrow_assets / total_supply_assets`, WAD.
    /// - `params`: curve configuration (`RateModelParams<Self::Api>`).
    ///
    /// # Returns
    /// - `BigUint`: per-second borrow rate, WAD.
    fn calc_borrow_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        params: RateModelParams<Self::Api>,
    ) -> BigUint {
        let base_rate = self.to_decimal_wad(params.base_rate);
        let slope1 = self.to_decimal_wad(params.slope1);
        let slope2 = self.to_decimal_wad(params.slope2);
        let optimal_utilization = self.to_decimal_wad(params.optimal_utilization);
        let max_rate = self.to_decimal_wad(params.max_rate);

        let annual_rate = if utilization < optimal_utilization {
            // Region 1: below the kink
            let utilization_ratio =
                self.div_half_up(&utilization.mul(slope1), &optimal_utilization, WAD_PRECISION);
            base_rate.add(utilization_ratio)
        } else {
            // Region 2: above the kink, steep slope
            let excess_utilization = utilization.sub(optimal_utilization.clone());
            let slope_contribution = self.div_half_up(
                &excess_utilization.mul(slope2),
                &self.wad().sub(optimal_utilization),
                WAD_PRECISION,
            );
            base_rate.add(slope1).add(slope_contribution)
        };

        let capped_rate = if annual_rate > max_rate {
            max_rate
        } else {
            annual_rate
        };

        capped_rate.into_raw_units() / &BigUint::from(SECONDS_PER_YEAR)
    }

    /// Ratio of borrowed to supplied assets, WAD. Zero for an empty pool.
    fn get_utilization(
        &self,
        borrowed: &BigUint,
        supplied: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if supplied == &BigUint::zero() {
            return self.wad_zero();
        }
        let utilization = self.w_div_down(borrowed, supplied);
        self.to_decimal_wad(utilization)
    }

    /// Computes the interest owed over `elapsed` seconds and the fee shares it mints.
    ///
    /// **Formula**:
    /// - `interest = total_borrow_assets * (e^(rate * elapsed) - 1)`, rounded down.
    /// - `fee_amount = interest * fee`, rounded down.
    /// - `fee_shares = to_shares_down(fee_amount, total_supply_assets + interest - fee_amount, total_supply_shares)`.
    ///
    /// Pricing the fee shares against the post-interest supply minus the fee itself means
    /// the recipient's new claim is worth exactly `fee_amount` and other suppliers keep the rest.
    fn calc_accrual(
        &self,
        market: &Market<Self::Api>,
        borrow_rate: &BigUint,
        elapsed: u64,
    ) -> AccrualResult<Self::Api> {
        let growth = self.w_taylor_compounded(borrow_rate, elapsed);
        let interest = self.w_mul_down(&market.total_borrow_assets, &growth);

        let fee_shares = if market.fee > 0 {
            let fee_amount = self.w_mul_down(&interest, &market.fee);
            let supply_after_interest = &market.total_supply_assets + &interest;
            self.to_shares_down(
                &fee_amount,
                &(supply_after_interest - &fee_amount),
                &market.total_supply_shares,
            )
        } else {
            BigUint::zero()
        };

        AccrualResult {
            interest,
            fee_shares,
        }
    }

    /// Adds the accrued interest to both pools and the fee shares to the supply share total.
    fn apply_accrual(&self, market: &mut Market<Self::Api>, accrual: &AccrualResult<Self::Api>) {
        market.total_borrow_assets += &accrual.interest;
        market.total_supply_assets += &accrual.interest;
        market.total_supply_shares += &accrual.fee_shares;
    }

    /// Projects market totals to `current_timestamp` without touching storage.
    ///
    /// Returns the unchanged totals when no time elapsed or nothing is borrowed.
    fn simulate_accrual(
        &self,
        market: &Market<Self::Api>,
        borrow_rate: &BigUint,
        current_timestamp: u64,
    ) -> MarketBalances<Self::Api> {
        let mut projected = market.clone();
        let elapsed = current_timestamp.saturating_sub(market.last_update);

        if elapsed > 0 && projected.total_borrow_assets > 0 {
            let accrual = self.calc_accrual(&projected, borrow_rate, elapsed);
            self.apply_accrual(&mut projected, &accrual);
        }

        MarketBalances {
            total_supply_assets: projected.total_supply_assets,
            total_supply_shares: projected.total_supply_shares,
            total_borrow_assets: projected.total_borrow_assets,
            total_borrow_shares: projected.total_borrow_shares,
        }
    }
}
