#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("create_market")]
    fn create_market_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] params: &MarketParams<Self::Api>,
    );

    #[event("supply")]
    fn supply_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("supply_collateral")]
    fn supply_collateral_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf: &ManagedAddress,
        #[indexed] assets: &BigUint,
    );

    #[event("withdraw_collateral")]
    fn withdraw_collateral_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] assets: &BigUint,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf: &ManagedAddress,
        #[indexed] receiver: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] caller: &ManagedAddress,
        #[indexed] on_behalf: &ManagedAddress,
        #[indexed] assets: &BigUint,
        #[indexed] shares: &BigUint,
    );

    // Bad debt fields are zero unless the liquidation emptied the borrower's collateral
    #[event("liquidate")]
    fn liquidate_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] caller: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] repaid_assets: &BigUint,
        #[indexed] repaid_shares: &BigUint,
        #[indexed] seized_assets: &BigUint,
        #[indexed] bad_debt_assets: &BigUint,
        #[indexed] bad_debt_shares: &BigUint,
    );

    #[event("accrue_interest")]
    fn accrue_interest_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] borrow_rate: &BigUint,
        #[indexed] interest: &BigUint,
        #[indexed] fee_shares: &BigUint,
    );

    #[event("set_fee")]
    fn set_fee_event(&self, #[indexed] id: &MarketId<Self::Api>, #[indexed] fee: &BigUint);

    #[event("set_fee_recipient")]
    fn set_fee_recipient_event(&self, #[indexed] recipient: &ManagedAddress);

    #[event("enable_irm")]
    fn enable_irm_event(&self, #[indexed] irm: &ManagedAddress);

    #[event("enable_lltv")]
    fn enable_lltv_event(&self, #[indexed] lltv: &BigUint);

    #[event("set_authorization")]
    fn set_authorization_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] authorized: &ManagedAddress,
        #[indexed] is_authorized: bool,
    );

    #[event("borrow_rate_update")]
    fn borrow_rate_update_event(
        &self,
        #[indexed] id: &MarketId<Self::Api>,
        #[indexed] utilization: &BigUint,
        #[indexed] borrow_rate: &BigUint,
    );
}
