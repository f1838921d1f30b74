multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_COLLATERAL,
    ERROR_INSUFFICIENT_LIQUIDITY,
};

use crate::{cache::Cache, helpers, oracle, storage, utils};

#[multiversx_sc::module]
pub trait PositionBorrowModule:
    storage::Storage
    + utils::LendingUtilsModule
    + oracle::OracleModule
    + common_events::EventsModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
{
    /// Opens or increases the debt of `on_behalf`.
    ///
    /// Debt shares are rounded up for an asset amount and assets rounded down for a
    /// share amount, so the borrower is never charged less than it receives.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`: If total borrows would exceed total supply.
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: If the position would be unhealthy.
    fn process_borrow(
        &self,
        cache: &mut Cache<Self>,
        assets: &BigUint,
        shares: &BigUint,
        on_behalf: &ManagedAddress,
        receiver: &ManagedAddress,
        caller: &ManagedAddress,
    ) -> (BigUint, BigUint) {
        let (assets, shares) = if assets > &BigUint::zero() {
            let shares = self.to_shares_up(
                assets,
                &cache.market.total_borrow_assets,
                &cache.market.total_borrow_shares,
            );
            (assets.clone(), shares)
        } else {
            let assets = self.to_assets_down(
                shares,
                &cache.market.total_borrow_assets,
                &cache.market.total_borrow_shares,
            );
            require!(assets > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
            (assets, shares.clone())
        };

        let mut position = self.get_position(&cache.id, on_behalf);
        position.borrow_shares += &shares;

        cache.market.total_borrow_shares += &shares;
        cache.market.total_borrow_assets += &assets;

        require!(cache.market.is_solvent(), ERROR_INSUFFICIENT_LIQUIDITY);

        let price = self.get_collateral_price(&cache.params);
        require!(
            self.is_position_healthy(&position, &cache.market, &cache.params.lltv, &price),
            ERROR_INSUFFICIENT_COLLATERAL
        );

        self.store_position(&cache.id, on_behalf, &position);

        self.borrow_event(&cache.id, caller, on_behalf, receiver, &assets, &shares);

        (assets, shares)
    }
}
