use common_structs::{Market, MarketId, MarketParams};

multiversx_sc::imports!();

/// An in-memory copy of one market, loaded from storage once accrual has run.
///
/// **Fields**:
/// - `market`: pooled totals, fee and last accrual timestamp.
/// - `params`: the immutable parameters of the market.
///
/// The market is written back when the cache is dropped. A cache must only be
/// created after the market's accrual, since a rate model re-entering accrual
/// writes the market directly and a cache loaded earlier would overwrite it.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub id: MarketId<C::Api>,
    pub market: Market<C::Api>,
    pub params: MarketParams<C::Api>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C, id: &MarketId<C::Api>, params: &MarketParams<C::Api>) -> Self {
        Cache {
            market: sc_ref.market(id).get(),
            id: id.clone(),
            params: params.clone(),
            sc_ref,
        }
    }

    /// Assets that can leave the pool without breaking `total_borrow_assets <= total_supply_assets`.
    pub fn available_liquidity(&self) -> BigUint<C::Api> {
        self.market.available_liquidity()
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit the market totals back to storage
        self.sc_ref.market(&self.id).set(&self.market);
    }
}
