#![no_std]

multiversx_sc::imports!();

// Collateral price in loan-asset units, scaled by 1e36
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self, price: BigUint) {
        self.price().set(price);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setPrice)]
    fn set_price(&self, price: BigUint) {
        self.price().set(price);
    }

    #[view(price)]
    #[storage_mapper("price")]
    fn price(&self) -> SingleValueMapper<BigUint>;
}
