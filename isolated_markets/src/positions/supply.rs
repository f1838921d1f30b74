multiversx_sc::imports!();

use common_errors::ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO;

use crate::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait PositionSupplyModule:
    storage::Storage
    + utils::LendingUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Credits supply shares to `on_behalf` and adds the assets to the supply pool.
    ///
    /// Exactly one of `assets` and `shares` is non-zero. The missing side is derived
    /// in the pool's favor: shares rounded down for an asset amount, assets rounded
    /// up for a share amount.
    ///
    /// # Returns
    /// - `(assets, shares)`: assets owed by the caller and shares minted.
    fn process_supply(
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
                &cache.market.total_supply_assets,
                &cache.market.total_supply_shares,
            );
            (assets.clone(), shares)
        } else {
            let assets = self.to_assets_up(
                shares,
                &cache.market.total_supply_assets,
                &cache.market.total_supply_shares,
            );
            require!(assets > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
            (assets, shares.clone())
        };

        let mut position = self.get_position(&cache.id, on_behalf);
        position.supply_shares += &shares;
        self.store_position(&cache.id, on_behalf, &position);

        cache.market.total_supply_shares += &shares;
        cache.market.total_supply_assets += &assets;

        self.supply_event(&cache.id, caller, on_behalf, &assets, &shares);

        (assets, shares)
    }
}
