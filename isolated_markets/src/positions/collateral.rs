multiversx_sc::imports!();

use common_errors::{ERROR_HEALTH_FACTOR_WITHDRAW, ERROR_INSUFFICIENT_COLLATERAL_BALANCE};

use crate::{cache::Cache, helpers, oracle, storage, utils};

#[multiversx_sc::module]
pub trait PositionCollateralModule:
    storage::Storage
    + utils::LendingUtilsModule
    + oracle::OracleModule
    + common_events::EventsModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
{
    /// Adds collateral to the position of `on_behalf`. Collateral is not pooled.
    fn process_supply_collateral(
        &self,
        cache: &Cache<Self>,
        assets: &BigUint,
        on_behalf: &ManagedAddress,
        caller: &ManagedAddress,
    ) {
        let mut position = self.get_position(&cache.id, on_behalf);
        position.collateral += assets;
        self.store_position(&cache.id, on_behalf, &position);

        self.supply_collateral_event(&cache.id, caller, on_behalf, assets);
    }

    /// Removes collateral from the position of `on_behalf`.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_COLLATERAL_BALANCE`: If the position holds less collateral.
    /// - `ERROR_HEALTH_FACTOR_WITHDRAW`: If the remaining collateral no longer covers the debt.
    fn process_withdraw_collateral(
        &self,
        cache: &Cache<Self>,
        assets: &BigUint,
        on_behalf: &ManagedAddress,
        receiver: &ManagedAddress,
        caller: &ManagedAddress,
    ) {
        let mut position = self.get_position(&cache.id, on_behalf);
        require!(
            position.collateral >= *assets,
            ERROR_INSUFFICIENT_COLLATERAL_BALANCE
        );

        position.collateral -= assets;

        if position.has_debt() {
            let price = self.get_collateral_price(&cache.params);
            require!(
                self.is_position_healthy(&position, &cache.market, &cache.params.lltv, &price),
                ERROR_HEALTH_FACTOR_WITHDRAW
            );
        }

        self.store_position(&cache.id, on_behalf, &position);

        self.withdraw_collateral_event(&cache.id, caller, on_behalf, receiver, assets);
    }
}
