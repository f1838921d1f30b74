#![no_std]

use common_proxies::proxy_isolated_markets;
use common_structs::{Market, MarketParams};

multiversx_sc::imports!();

#[multiversx_sc::contract]
pub trait RateMock {
    #[init]
    fn init(&self, rate: BigUint) {
        self.rate().set(rate);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // Returns the fixed rate; while a re-entrancy depth is configured it first
    // calls back into the engine's accrual for the same market, one level per call
    #[endpoint(borrowRate)]
    fn borrow_rate(&self, params: MarketParams<Self::Api>, _market: Market<Self::Api>) -> BigUint {
        let depth = self.reentrancy_depth().get();
        if depth > 0 {
            let remaining = depth - 1;
            self.reentrancy_depth().set(remaining);
            sc_print!("RateMock: re-entering accrual, remaining depth {}", &remaining);

            self.tx()
                .to(self.engine().get())
                .typed(proxy_isolated_markets::IsolatedMarketsProxy)
                .accrue_interest(params)
                .sync_call();
        }

        self.rate().get()
    }

    #[view(borrowRateView)]
    fn borrow_rate_view(&self, _params: MarketParams<Self::Api>, _market: Market<Self::Api>) -> BigUint {
        self.rate().get()
    }

    #[endpoint(setRate)]
    fn set_rate(&self, rate: BigUint) {
        self.rate().set(rate);
    }

    #[endpoint(setReentrancy)]
    fn set_reentrancy(&self, engine: ManagedAddress, depth: u32) {
        self.engine().set(engine);
        self.reentrancy_depth().set(depth);
    }

    #[view(getRate)]
    #[storage_mapper("rate")]
    fn rate(&self) -> SingleValueMapper<BigUint>;

    #[view(getReentrancyDepth)]
    #[storage_mapper("reentrancy_depth")]
    fn reentrancy_depth(&self) -> SingleValueMapper<u32>;

    #[storage_mapper("engine")]
    fn engine(&self) -> SingleValueMapper<ManagedAddress>;
}
