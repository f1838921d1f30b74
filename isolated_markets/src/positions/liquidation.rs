multiversx_sc::imports!();

use common_constants::ORACLE_PRICE_SCALE;
use common_errors::{ERROR_HEALTH_FACTOR, ERROR_REPAY_EXCEEDS_DEBT};
use common_structs::LiquidationResult;

use crate::{cache::Cache, helpers, oracle, storage, utils};

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + utils::LendingUtilsModule
    + oracle::OracleModule
    + common_events::EventsModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
{
    /// Liquidates an unhealthy position.
    ///
    /// **Process**:
    /// 1. Reads the price and rejects healthy positions. A zero price is accepted:
    ///    the collateral is worthless and the remaining debt becomes bad debt.
    /// 2. Derives the incentive factor from the lltv and the health factor.
    /// 3. Sizes the liquidation from whichever of `seized_assets` and `repaid_shares`
    ///    is non-zero, capping the seizure at the position's collateral.
    /// 4. Burns the repaid debt and removes the seized collateral.
    /// 5. If the collateral is exhausted while debt remains, writes the remaining
    ///    debt off against both pools so suppliers absorb the loss.
    ///
    /// # Errors
    /// - `ERROR_HEALTH_FACTOR`: If the position is healthy.
    /// - `ERROR_REPAY_EXCEEDS_DEBT`: If the liquidation would repay more than the position owes.
    fn process_liquidation(
        &self,
        cache: &mut Cache<Self>,
        borrower: &ManagedAddress,
        seized_assets: &BigUint,
        repaid_shares: &BigUint,
        caller: &ManagedAddress,
    ) -> LiquidationResult<Self::Api> {
        let mut position = self.get_position(&cache.id, borrower);
        let price = self.read_collateral_price(&cache.params);

        require!(
            !self.is_position_healthy(&position, &cache.market, &cache.params.lltv, &price),
            ERROR_HEALTH_FACTOR
        );

        let borrowed = self.get_borrowed_assets(&position, &cache.market);
        let max_borrow = self.get_max_borrow(&position.collateral, &price, &cache.params.lltv);
        let health_factor = self.compute_health_factor(&max_borrow, &borrowed);
        let incentive = self.get_liquidation_incentive_factor(&cache.params.lltv, &health_factor);

        let (seized_assets, repaid_shares) = if seized_assets > &BigUint::zero() {
            let seized = self.min_of(seized_assets.clone(), position.collateral.clone());
            let shares = self.get_repaid_shares_for_seizure(cache, &seized, &price, &incentive);
            require!(shares <= position.borrow_shares, ERROR_REPAY_EXCEEDS_DEBT);
            (seized, shares)
        } else {
            require!(
                repaid_shares <= &position.borrow_shares,
                ERROR_REPAY_EXCEEDS_DEBT
            );
            let seized = if price > 0 {
                self.get_seizure_for_repaid_shares(cache, repaid_shares, &price, &incentive)
            } else {
                position.collateral.clone()
            };
            if seized > position.collateral {
                let capped = position.collateral.clone();
                let shares = self.get_repaid_shares_for_seizure(cache, &capped, &price, &incentive);
                (capped, self.min_of(shares, repaid_shares.clone()))
            } else {
                (seized, repaid_shares.clone())
            }
        };

        let repaid_assets = self.to_assets_up(
            &repaid_shares,
            &cache.market.total_borrow_assets,
            &cache.market.total_borrow_shares,
        );

        position.borrow_shares -= &repaid_shares;
        position.collateral -= &seized_assets;
        cache.market.total_borrow_shares -= &repaid_shares;
        cache.market.total_borrow_assets =
            self.zero_floor_sub(&cache.market.total_borrow_assets, &repaid_assets);

        let mut bad_debt_assets = BigUint::zero();
        let mut bad_debt_shares = BigUint::zero();
        if position.collateral == 0 && position.has_debt() {
            bad_debt_shares = position.borrow_shares.clone();
            let owed = self.to_assets_up(
                &bad_debt_shares,
                &cache.market.total_borrow_assets,
                &cache.market.total_borrow_shares,
            );
            bad_debt_assets = self.min_of(owed, cache.market.total_borrow_assets.clone());

            cache.market.total_borrow_assets -= &bad_debt_assets;
            cache.market.total_supply_assets -= &bad_debt_assets;
            cache.market.total_borrow_shares -= &bad_debt_shares;
            position.borrow_shares = BigUint::zero();
        }

        self.store_position(&cache.id, borrower, &position);

        self.liquidate_event(
            &cache.id,
            caller,
            borrower,
            &repaid_assets,
            &repaid_shares,
            &seized_assets,
            &bad_debt_assets,
            &bad_debt_shares,
        );

        LiquidationResult {
            seized_assets,
            repaid_assets,
            bad_debt_assets,
        }
    }

    /// Debt shares a liquidator repays to seize `seized` collateral, rounded up.
    ///
    /// `repaid = seized * price / ORACLE_PRICE_SCALE / incentive`
    fn get_repaid_shares_for_seizure(
        &self,
        cache: &Cache<Self>,
        seized: &BigUint,
        price: &BigUint,
        incentive: &BigUint,
    ) -> BigUint {
        let seized_value = self.mul_div_up(seized, price, &BigUint::from(ORACLE_PRICE_SCALE));
        let repaid_assets = self.w_div_up(&seized_value, incentive);

        self.to_shares_up(
            &repaid_assets,
            &cache.market.total_borrow_assets,
            &cache.market.total_borrow_shares,
        )
    }

    /// Collateral released for repaying `repaid_shares`, rounded down.
    ///
    /// `seized = repaid * incentive * ORACLE_PRICE_SCALE / price`
    fn get_seizure_for_repaid_shares(
        &self,
        cache: &Cache<Self>,
        repaid_shares: &BigUint,
        price: &BigUint,
        incentive: &BigUint,
    ) -> BigUint {
        let repaid_assets = self.to_assets_down(
            repaid_shares,
            &cache.market.total_borrow_assets,
            &cache.market.total_borrow_shares,
        );
        let with_incentive = self.w_mul_down(&repaid_assets, incentive);

        self.mul_div_down(&with_incentive, &BigUint::from(ORACLE_PRICE_SCALE), price)
    }
}
