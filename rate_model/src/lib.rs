#![no_std]

use common_constants::WAD;
use common_errors::ERROR_INVALID_RATE_MODEL_PARAMS;
use common_structs::{Market, MarketId, MarketParams, RateModelParams};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Utilization-driven rate model for isolated markets.
///
/// The borrow rate follows a piecewise-linear curve with a kink at the optimal
/// utilization. `borrowRate` records the last rate served per market; this is the
/// only state it writes and it never calls back into the engine.
#[multiversx_sc::contract]
pub trait RateModel:
    common_math::SharedMathModule + common_rates::InterestRates + common_events::EventsModule
{
    /// Initializes the curve. All values are annual, WAD.
    #[init]
    fn init(
        &self,
        base_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        optimal_utilization: BigUint,
        max_rate: BigUint,
    ) {
        self.set_params(base_rate, slope1, slope2, optimal_utilization, max_rate);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Per-second borrow rate for the market, recorded as the market's last rate.
    #[endpoint(borrowRate)]
    fn borrow_rate(&self, params: MarketParams<Self::Api>, market: Market<Self::Api>) -> BigUint {
        let utilization = self.get_utilization(&market.total_borrow_assets, &market.total_supply_assets);
        let rate = self.calc_borrow_rate(utilization.clone(), self.rate_model_params().get());

        let id = self.market_id_of(&params);
        self.last_borrow_rate(&id).set(&rate);
        self.borrow_rate_update_event(&id, utilization.into_raw_units(), &rate);

        rate
    }

    /// Same rate as `borrowRate` under the same inputs, without writing anything.
    #[view(borrowRateView)]
    fn borrow_rate_view(&self, _params: MarketParams<Self::Api>, market: Market<Self::Api>) -> BigUint {
        let utilization = self.get_utilization(&market.total_borrow_assets, &market.total_supply_assets);
        self.calc_borrow_rate(utilization, self.rate_model_params().get())
    }

    #[only_owner]
    #[endpoint(setRateModelParams)]
    fn set_rate_model_params(
        &self,
        base_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        optimal_utilization: BigUint,
        max_rate: BigUint,
    ) {
        self.set_params(base_rate, slope1, slope2, optimal_utilization, max_rate);
    }

    fn set_params(
        &self,
        base_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        optimal_utilization: BigUint,
        max_rate: BigUint,
    ) {
        require!(
            optimal_utilization > 0 && optimal_utilization < BigUint::from(WAD),
            ERROR_INVALID_RATE_MODEL_PARAMS
        );
        require!(max_rate >= base_rate, ERROR_INVALID_RATE_MODEL_PARAMS);

        self.rate_model_params().set(RateModelParams {
            base_rate,
            slope1,
            slope2,
            optimal_utilization,
            max_rate,
        });
    }

    fn market_id_of(&self, params: &MarketParams<Self::Api>) -> MarketId<Self::Api> {
        let mut encoded = ManagedBuffer::new();
        if params.top_encode(&mut encoded).is_err() {
            sc_panic!(ERROR_INVALID_RATE_MODEL_PARAMS);
        }
        self.crypto().keccak256(&encoded)
    }

    #[view(getRateModelParams)]
    #[storage_mapper("rate_model_params")]
    fn rate_model_params(&self) -> SingleValueMapper<RateModelParams<Self::Api>>;

    #[view(getLastBorrowRate)]
    #[storage_mapper("last_borrow_rate")]
    fn last_borrow_rate(&self, id: &MarketId<Self::Api>) -> SingleValueMapper<BigUint>;
}
