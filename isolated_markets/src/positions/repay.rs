multiversx_sc::imports!();

use common_errors::{ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_REPAY_EXCEEDS_DEBT};

use crate::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + utils::LendingUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Reduces the debt of `on_behalf`.
    ///
    /// Shares are rounded down for an asset amount and assets rounded up for a share
    /// amount. Closing a position exactly is done with the share form.
    ///
    /// # Errors
    /// - `ERROR_REPAY_EXCEEDS_DEBT`: If more shares would be burned than the position owes.
    fn process_repay(
        &self,
        cache: &mut Cache<Self>,
        assets: &BigUint,
        shares: &BigUint,
        on_behalf: &ManagedAddress,
        caller: &ManagedAddress,
    ) -> (BigUint, BigUint) {
        let (assets, shares) = if assets > &BigUint::zero() {
            let shares = self.to_shares_down(
                assets,
                &cache.market.total_borrow_assets,
                &cache.market.total_borrow_shares,
            );
            (assets.clone(), shares)
        } else {
            let assets = self.to_assets_up(
                shares,
                &cache.market.total_borrow_assets,
                &cache.market.total_borrow_shares,
            );
            require!(assets > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
            (assets, shares.clone())
        };

        let mut position = self.get_position(&cache.id, on_behalf);
        require!(position.borrow_shares >= shares, ERROR_REPAY_EXCEEDS_DEBT);

        position.borrow_shares -= &shares;
        self.store_position(&cache.id, on_behalf, &position);

        cache.market.total_borrow_shares -= &shares;
        cache.market.total_borrow_assets =
            self.zero_floor_sub(&cache.market.total_borrow_assets, &assets);

        self.repay_event(&cache.id, caller, on_behalf, &assets, &shares);

        (assets, shares)
    }
}
