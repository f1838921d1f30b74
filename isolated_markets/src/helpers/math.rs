use common_constants::{
    K_SCALLING_FACTOR, LIQUIDATION_CURSOR, MAX_LIQUIDATION_INCENTIVE_FACTOR, ORACLE_PRICE_SCALE,
    WAD, WAD_PRECISION,
};
use common_structs::{Market, Position};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait MathsModule: common_math::SharedMathModule {
    /// Values a collateral amount in loan-asset units, rounded down.
    ///
    /// # Arguments
    /// - `collateral`: collateral amount in its smallest unit.
    /// - `price`: oracle price scaled by `ORACLE_PRICE_SCALE`.
    fn get_collateral_value(&self, collateral: &BigUint, price: &BigUint) -> BigUint {
        self.mul_div_down(collateral, price, &BigUint::from(ORACLE_PRICE_SCALE))
    }

    /// Largest debt, in loan-asset units, the collateral can carry: `collateral_value * lltv`.
    fn get_max_borrow(&self, collateral: &BigUint, price: &BigUint, lltv: &BigUint) -> BigUint {
        let collateral_value = self.get_collateral_value(collateral, price);
        self.w_mul_down(&collateral_value, lltv)
    }

    /// Debt of a position in loan-asset units, rounded up against the borrower.
    fn get_borrowed_assets(&self, position: &Position<Self::Api>, market: &Market<Self::Api>) -> BigUint {
        self.to_assets_up(
            &position.borrow_shares,
            &market.total_borrow_assets,
            &market.total_borrow_shares,
        )
    }

    /// Healthy iff `borrowed <= max_borrow`. A position without debt is always healthy.
    ///
    /// Pure in its inputs: the caller reads the price and the market once per operation.
    fn is_position_healthy(
        &self,
        position: &Position<Self::Api>,
        market: &Market<Self::Api>,
        lltv: &BigUint,
        price: &BigUint,
    ) -> bool {
        if !position.has_debt() {
            return true;
        }

        let borrowed = self.get_borrowed_assets(position, market);
        let max_borrow = self.get_max_borrow(&position.collateral, price, lltv);

        max_borrow >= borrowed
    }

    /// Calculates the health factor from the borrowing capacity and the debt.
    ///
    /// # Returns
    /// - `max_borrow / borrowed` in WAD; `u128::MAX` if nothing is borrowed.
    fn compute_health_factor(&self, max_borrow: &BigUint, borrowed: &BigUint) -> BigUint {
        if borrowed == &BigUint::zero() {
            return BigUint::from(u128::MAX);
        }

        self.w_div_down(max_borrow, borrowed)
    }

    /// Incentive granted by the market's lltv alone: `min(MAX, 1 / (1 - CURSOR * (1 - lltv)))`.
    fn get_base_liquidation_incentive(&self, lltv: &BigUint) -> BigUint {
        let wad = BigUint::from(WAD);
        let lltv_gap = &wad - lltv;
        let discount = self.w_mul_down(&BigUint::from(LIQUIDATION_CURSOR), &lltv_gap);
        let base = self.w_div_down(&wad, &(&wad - &discount));

        self.min_of(base, BigUint::from(MAX_LIQUIDATION_INCENTIVE_FACTOR))
    }

    /// Ramps the incentive from `min_bonus` at `target_hf` up to `max_bonus`,
    /// reached once the relative health gap times `k` hits one. Callers clamp
    /// `current_hf` to at most one, so healthy inputs return `min_bonus`.
    fn calculate_linear_bonus(
        &self,
        current_hf: &ManagedDecimal<Self::Api, NumDecimals>,
        target_hf: &ManagedDecimal<Self::Api, NumDecimals>,
        min_bonus: &ManagedDecimal<Self::Api, NumDecimals>,
        max_bonus: &ManagedDecimal<Self::Api, NumDecimals>,
        k: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if current_hf >= target_hf {
            return min_bonus.clone();
        }
        // Calculate the health factor gap: (target_hf - current_hf) / target_hf
        let gap = self.div_half_up(
            &(target_hf.clone() - current_hf.clone()),
            target_hf,
            WAD_PRECISION,
        );
        // Calculate the scaled term: k * gap
        let scaled_term = self.mul_half_up(k, &gap, WAD_PRECISION);
        // Clamp the scaled term between 0 and 1
        let clamped_term = if scaled_term > self.wad() {
            self.wad()
        } else {
            scaled_term
        };
        let bonus_range = max_bonus.clone() - min_bonus.clone();
        let bonus_increment = self.mul_half_up(&bonus_range, &clamped_term, WAD_PRECISION);

        min_bonus.clone() + bonus_increment
    }

    /// Liquidation incentive factor for a position, WAD.
    ///
    /// Starts at the lltv-based incentive for a position right at the threshold
    /// and ramps linearly towards `MAX_LIQUIDATION_INCENTIVE_FACTOR` as the health
    /// factor falls, so it grows monotonically with the loan-to-value.
    fn get_liquidation_incentive_factor(&self, lltv: &BigUint, health_factor: &BigUint) -> BigUint {
        let base = self.get_base_liquidation_incentive(lltv);
        let max = BigUint::from(MAX_LIQUIDATION_INCENTIVE_FACTOR);
        if base >= max {
            return max;
        }

        let health_factor = self.min_of(health_factor.clone(), BigUint::from(WAD));
        let bonus = self.calculate_linear_bonus(
            &self.to_decimal_wad(health_factor),
            &self.wad(),
            &self.to_decimal_wad(base),
            &self.to_decimal_wad(max.clone()),
            &self.to_decimal_wad(BigUint::from(K_SCALLING_FACTOR)),
        );

        self.min_of(bonus.into_raw_units().clone(), max)
    }
}
