multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_DEPOSIT,
    ERROR_INSUFFICIENT_LIQUIDITY,
};

use crate::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait PositionWithdrawModule:
    storage::Storage
    + utils::LendingUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Burns supply shares of `on_behalf` and removes the assets from the supply pool.
    ///
    /// Shares are rounded up for an asset amount and assets rounded down for a share
    /// amount, so a withdrawal never takes more than the shares are worth.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_DEPOSIT`: If the position holds fewer shares.
    /// - `ERROR_INSUFFICIENT_LIQUIDITY`: If the assets are lent out.
    fn process_withdraw(
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
                &cache.market.total_supply_assets,
                &cache.market.total_supply_shares,
            );
            (assets.clone(), shares)
        } else {
            let assets = self.to_assets_down(
                shares,
                &cache.market.total_supply_assets,
                &cache.market.total_supply_shares,
            );
            require!(assets > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
            (assets, shares.clone())
        };

        let mut position = self.get_position(&cache.id, on_behalf);
        require!(position.supply_shares >= shares, ERROR_INSUFFICIENT_DEPOSIT);
        require!(
            cache.available_liquidity() >= assets,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        position.supply_shares -= &shares;
        self.store_position(&cache.id, on_behalf, &position);

        cache.market.total_supply_shares -= &shares;
        cache.market.total_supply_assets -= &assets;

        self.withdraw_event(&cache.id, caller, on_behalf, receiver, &assets, &shares);

        (assets, shares)
    }
}
