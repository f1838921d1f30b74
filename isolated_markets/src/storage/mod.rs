use common_structs::{Market, MarketId, MarketParams, Position};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Get the pooled state of a market
    /// This storage mapper holds the supply and borrow totals, the fee and the last accrual timestamp of a market.
    #[storage_mapper("market")]
    fn market(&self, id: &MarketId<Self::Api>) -> SingleValueMapper<Market<Self::Api>>;

    /// Get the position of an account in a market
    /// Empty positions are cleared, so an empty mapper means all balances are zero.
    #[storage_mapper("position")]
    fn position(
        &self,
        id: &MarketId<Self::Api>,
        user: &ManagedAddress,
    ) -> SingleValueMapper<Position<Self::Api>>;

    /// Get the parameters a market was created with
    #[view(idToMarketParams)]
    #[storage_mapper("id_to_market_params")]
    fn id_to_market_params(
        &self,
        id: &MarketId<Self::Api>,
    ) -> SingleValueMapper<MarketParams<Self::Api>>;

    /// Get the list of created markets
    #[view(getMarkets)]
    #[storage_mapper("markets")]
    fn markets(&self) -> UnorderedSetMapper<MarketId<Self::Api>>;

    /// Get the allow-listed interest rate models
    #[view(getEnabledIrms)]
    #[storage_mapper("enabled_irms")]
    fn enabled_irms(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Get the allow-listed liquidation loan-to-value ratios
    #[view(getEnabledLltvs)]
    #[storage_mapper("enabled_lltvs")]
    fn enabled_lltvs(&self) -> UnorderedSetMapper<BigUint>;

    /// Whether `authorized` may withdraw, borrow and remove collateral on behalf of `authorizer`
    #[view(isAuthorized)]
    #[storage_mapper("is_authorized")]
    fn is_authorized(
        &self,
        authorizer: &ManagedAddress,
        authorized: &ManagedAddress,
    ) -> SingleValueMapper<bool>;

    /// Get the address credited with fee shares on every accrual
    #[view(getFeeRecipient)]
    #[storage_mapper("fee_recipient")]
    fn fee_recipient(&self) -> SingleValueMapper<ManagedAddress>;
}
