multiversx_sc::imports!();

use common_proxies::proxy_rate_model;
use common_structs::{Market, MarketId, MarketParams};

use crate::{storage, utils};

#[multiversx_sc::module]
pub trait AccrualModule:
    storage::Storage
    + utils::LendingUtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Accrues interest on a market up to the current block timestamp.
    ///
    /// **Process**:
    /// 1. `elapsed = now - last_update`; returns immediately when zero.
    /// 2. Without debt only `last_update` moves.
    /// 3. Otherwise asks the rate model for the per-second rate, compounds it over
    ///    `elapsed` and adds the interest to both pools, minting fee shares to the
    ///    fee recipient.
    /// 4. Sets `last_update = now`.
    ///
    /// The rate model is called before `last_update` advances. A rate model that
    /// calls back into accrual for the same market sees the old `last_update` and
    /// accrues the same window again; this method then compounds its own window on
    /// top of the re-entrant result. The market is re-read after the call, so the
    /// nested writes are kept rather than overwritten.
    fn accrue_market(&self, id: &MarketId<Self::Api>, params: &MarketParams<Self::Api>) {
        let market = self.market(id).get();
        let now = self.blockchain().get_block_timestamp();
        let elapsed = now - market.last_update;

        if elapsed == 0 {
            return;
        }

        if market.total_borrow_assets == 0 {
            self.market(id).update(|market| market.last_update = now);
            return;
        }

        let borrow_rate = self.get_borrow_rate(params, &market);

        let mut market = self.market(id).get();
        let accrual = self.calc_accrual(&market, &borrow_rate, elapsed);
        self.apply_accrual(&mut market, &accrual);
        market.last_update = now;
        self.market(id).set(&market);

        if accrual.fee_shares > 0 {
            let fee_recipient = self.fee_recipient().get();
            let mut recipient_position = self.get_position(id, &fee_recipient);
            recipient_position.supply_shares += &accrual.fee_shares;
            self.store_position(id, &fee_recipient, &recipient_position);
        }

        self.accrue_interest_event(id, &borrow_rate, &accrual.interest, &accrual.fee_shares);
    }

    /// Calls the mutating `borrowRate` of the market's rate model.
    fn get_borrow_rate(&self, params: &MarketParams<Self::Api>, market: &Market<Self::Api>) -> BigUint {
        self.tx()
            .to(&params.irm)
            .typed(proxy_rate_model::RateModelProxy)
            .borrow_rate(params, market)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Calls the side-effect-free `borrowRateView` of the market's rate model.
    fn get_borrow_rate_view(
        &self,
        params: &MarketParams<Self::Api>,
        market: &Market<Self::Api>,
    ) -> BigUint {
        self.tx()
            .to(&params.irm)
            .typed(proxy_rate_model::RateModelProxy)
            .borrow_rate_view(params, market)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
