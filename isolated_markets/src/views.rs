multiversx_sc::imports!();

use common_errors::ERROR_MARKET_NOT_CREATED;
use common_structs::{Market, MarketBalances, MarketId, MarketParams, Position};

use crate::{accrual, helpers, oracle, storage, utils, validation};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + accrual::AccrualModule
    + oracle::OracleModule
    + helpers::math::MathsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Stored state of a market, as of its last accrual.
    #[view(getMarket)]
    fn get_market(&self, id: MarketId<Self::Api>) -> Market<Self::Api> {
        let mapper = self.market(&id);
        require!(!mapper.is_empty(), ERROR_MARKET_NOT_CREATED);
        mapper.get()
    }

    /// Stored position of `user`; zero balances if none exists.
    #[view(getPosition)]
    fn get_position_view(&self, id: MarketId<Self::Api>, user: ManagedAddress) -> Position<Self::Api> {
        self.get_position(&id, &user)
    }

    #[view(getMarketId)]
    fn get_market_id_view(&self, params: MarketParams<Self::Api>) -> MarketId<Self::Api> {
        self.get_market_id(&params)
    }

    #[view(isIrmEnabled)]
    fn is_irm_enabled(&self, irm: ManagedAddress) -> bool {
        self.enabled_irms().contains(&irm)
    }

    #[view(isLltvEnabled)]
    fn is_lltv_enabled(&self, lltv: BigUint) -> bool {
        self.enabled_lltvs().contains(&lltv)
    }

    /// Market totals as they would be after an accrual at the current timestamp.
    ///
    /// Uses the rate model's `borrowRateView`, so nothing is written.
    #[view(expectedMarketBalances)]
    fn expected_market_balances(&self, params: MarketParams<Self::Api>) -> MarketBalances<Self::Api> {
        let id = self.require_market_created(&params);
        let market = self.market(&id).get();
        self.simulate_market(&params, &market)
    }

    /// Assets `user` could withdraw after an accrual at the current timestamp.
    #[view(expectedSupplyAssets)]
    fn expected_supply_assets(&self, params: MarketParams<Self::Api>, user: ManagedAddress) -> BigUint {
        let id = self.require_market_created(&params);
        let balances = self.simulate_market(&params, &self.market(&id).get());
        let position = self.get_position(&id, &user);

        self.to_assets_down(
            &position.supply_shares,
            &balances.total_supply_assets,
            &balances.total_supply_shares,
        )
    }

    /// Debt of `user` after an accrual at the current timestamp, rounded up.
    #[view(expectedBorrowAssets)]
    fn expected_borrow_assets(&self, params: MarketParams<Self::Api>, user: ManagedAddress) -> BigUint {
        let id = self.require_market_created(&params);
        let balances = self.simulate_market(&params, &self.market(&id).get());
        let position = self.get_position(&id, &user);

        self.to_assets_up(
            &position.borrow_shares,
            &balances.total_borrow_assets,
            &balances.total_borrow_shares,
        )
    }

    /// Whether the position of `user` passes the health check at the current price
    /// and the expected market totals.
    #[view(isHealthy)]
    fn is_healthy(&self, params: MarketParams<Self::Api>, user: ManagedAddress) -> bool {
        let id = self.require_market_created(&params);
        let position = self.get_position(&id, &user);
        if !position.has_debt() {
            return true;
        }

        let market = self.get_expected_market(&id, &params);
        let price = self.get_collateral_price(&params);

        self.is_position_healthy(&position, &market, &params.lltv, &price)
    }

    /// Incentive factor a liquidation of `borrower` would apply right now, WAD.
    #[view(liquidationIncentiveFactor)]
    fn liquidation_incentive_factor(
        &self,
        params: MarketParams<Self::Api>,
        borrower: ManagedAddress,
    ) -> BigUint {
        let id = self.require_market_created(&params);
        let position = self.get_position(&id, &borrower);
        let market = self.get_expected_market(&id, &params);

        let health_factor = if position.has_debt() {
            let price = self.get_collateral_price(&params);
            let borrowed = self.get_borrowed_assets(&position, &market);
            let max_borrow = self.get_max_borrow(&position.collateral, &price, &params.lltv);
            self.compute_health_factor(&max_borrow, &borrowed)
        } else {
            BigUint::from(u128::MAX)
        };

        self.get_liquidation_incentive_factor(&params.lltv, &health_factor)
    }

    fn simulate_market(
        &self,
        params: &MarketParams<Self::Api>,
        market: &Market<Self::Api>,
    ) -> MarketBalances<Self::Api> {
        let now = self.blockchain().get_block_timestamp();
        let borrow_rate = if now > market.last_update && market.total_borrow_assets > 0 {
            self.get_borrow_rate_view(params, market)
        } else {
            BigUint::zero()
        };

        self.simulate_accrual(market, &borrow_rate, now)
    }

    fn get_expected_market(
        &self,
        id: &MarketId<Self::Api>,
        params: &MarketParams<Self::Api>,
    ) -> Market<Self::Api> {
        let mut market = self.market(id).get();
        let balances = self.simulate_market(params, &market);

        market.total_supply_assets = balances.total_supply_assets;
        market.total_supply_shares = balances.total_supply_shares;
        market.total_borrow_assets = balances.total_borrow_assets;
        market.total_borrow_shares = balances.total_borrow_shares;
        market
    }
}
