use common_errors::ERROR_INVALID_ORACLE_PRICE;
use common_proxies::proxy_oracle;
use common_structs::MarketParams;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait OracleModule {
    /// Reads the collateral price of a market from its oracle.
    ///
    /// The price is read fresh on every call and never cached, quoted in loan-asset
    /// units per collateral unit and scaled by `ORACLE_PRICE_SCALE`. The call is
    /// read-only, so the oracle cannot mutate engine state.
    ///
    /// # Errors
    /// - `ERROR_INVALID_ORACLE_PRICE`: If the oracle reports a zero price.
    fn get_collateral_price(&self, params: &MarketParams<Self::Api>) -> BigUint {
        let price = self.read_collateral_price(params);

        require!(price > 0, ERROR_INVALID_ORACLE_PRICE);

        price
    }

    /// Raw oracle read. A zero price is returned as is; liquidations accept it so
    /// positions backed by worthless collateral can still be written off.
    fn read_collateral_price(&self, params: &MarketParams<Self::Api>) -> BigUint {
        self.tx()
            .to(&params.oracle)
            .typed(proxy_oracle::OracleProxy)
            .price()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
