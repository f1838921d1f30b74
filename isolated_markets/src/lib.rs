#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod accrual;
pub mod cache;
pub mod config;
pub mod helpers;
pub mod oracle;
pub mod positions;
pub mod storage;
pub mod utils;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait IsolatedMarkets:
    positions::supply::PositionSupplyModule
    + positions::withdraw::PositionWithdrawModule
    + positions::collateral::PositionCollateralModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::liquidation::PositionLiquidationModule
    + accrual::AccrualModule
    + config::ConfigModule
    + common_events::EventsModule
    + storage::Storage
    + oracle::OracleModule
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + views::ViewsModule
    + helpers::math::MathsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Initializes the engine.
    ///
    /// # Arguments
    /// - `fee_recipient`: Optional address credited with fee shares. Fees cannot be
    ///   enabled on any market until a recipient is set.
    #[init]
    fn init(&self, fee_recipient: OptionalValue<ManagedAddress>) {
        if let OptionalValue::Some(recipient) = fee_recipient {
            self.require_non_zero_address(&recipient);
            self.fee_recipient().set(&recipient);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Creates a market. Anyone may create a market for allow-listed parameters.
    ///
    /// # Returns
    /// - The market id, `keccak256` of the encoded parameters.
    #[endpoint(createMarket)]
    fn create_market(&self, params: MarketParams<Self::Api>) -> MarketId<Self::Api> {
        self.create_market_internal(&params)
    }

    /// Supplies loan assets to a market on behalf of `on_behalf`.
    ///
    /// # Arguments
    /// - `assets`: Amount of loan assets to supply, or zero.
    /// - `shares`: Amount of supply shares to mint, or zero.
    /// - `on_behalf`: Owner of the minted shares.
    ///
    /// # Payment
    /// - Loan token covering the supplied assets; any excess is refunded.
    ///
    /// # Returns
    /// - `(assets, shares)` supplied and minted.
    #[payable]
    #[endpoint(supply)]
    fn supply(
        &self,
        params: MarketParams<Self::Api>,
        assets: BigUint,
        shares: BigUint,
        on_behalf: ManagedAddress,
    ) -> MultiValue2<BigUint, BigUint> {
        let id = self.require_market_created(&params);
        self.require_exactly_one_zero(&assets, &shares);
        self.require_non_zero_address(&on_behalf);
        let paid = self.get_payment_amount(&params.loan_token);
        let caller = self.blockchain().get_caller();

        self.accrue_market(&id, &params);

        let mut cache = Cache::new(self, &id, &params);
        let (assets, shares) = self.process_supply(&mut cache, &assets, &shares, &on_behalf, &caller);

        self.settle_payment(&params.loan_token, &paid, &assets, &caller);

        (assets, shares).into()
    }

    /// Withdraws loan assets supplied by `on_behalf` to `receiver`.
    ///
    /// The caller must be `on_behalf` or authorized by it.
    ///
    /// # Returns
    /// - `(assets, shares)` withdrawn and burned.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        params: MarketParams<Self::Api>,
        assets: BigUint,
        shares: BigUint,
        on_behalf: ManagedAddress,
        receiver: ManagedAddress,
    ) -> MultiValue2<BigUint, BigUint> {
        let id = self.require_market_created(&params);
        self.require_exactly_one_zero(&assets, &shares);
        self.require_non_zero_address(&receiver);
        let caller = self.blockchain().get_caller();
        self.require_sender_authorized(&caller, &on_behalf);

        self.accrue_market(&id, &params);

        let mut cache = Cache::new(self, &id, &params);
        let (assets, shares) =
            self.process_withdraw(&mut cache, &assets, &shares, &on_behalf, &receiver, &caller);

        self.send_asset(&params.loan_token, &assets, &receiver);

        (assets, shares).into()
    }

    /// Deposits collateral for `on_behalf`. The payment amount is the collateral added.
    #[payable]
    #[endpoint(supplyCollateral)]
    fn supply_collateral(&self, params: MarketParams<Self::Api>, on_behalf: ManagedAddress) {
        let id = self.require_market_created(&params);
        self.require_non_zero_address(&on_behalf);
        let assets = self.get_payment_amount(&params.collateral_token);
        self.require_amount_greater_than_zero(&assets);
        let caller = self.blockchain().get_caller();

        self.accrue_market(&id, &params);

        let cache = Cache::new(self, &id, &params);
        self.process_supply_collateral(&cache, &assets, &on_behalf, &caller);
    }

    /// Withdraws collateral of `on_behalf` to `receiver`.
    ///
    /// The caller must be `on_behalf` or authorized by it, and the position must stay healthy.
    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(
        &self,
        params: MarketParams<Self::Api>,
        assets: BigUint,
        on_behalf: ManagedAddress,
        receiver: ManagedAddress,
    ) {
        let id = self.require_market_created(&params);
        self.require_amount_greater_than_zero(&assets);
        self.require_non_zero_address(&receiver);
        let caller = self.blockchain().get_caller();
        self.require_sender_authorized(&caller, &on_behalf);

        self.accrue_market(&id, &params);

        let cache = Cache::new(self, &id, &params);
        self.process_withdraw_collateral(&cache, &assets, &on_behalf, &receiver, &caller);

        self.send_asset(&params.collateral_token, &assets, &receiver);
    }

    /// Borrows loan assets against the collateral of `on_behalf` and sends them to `receiver`.
    ///
    /// The caller must be `on_behalf` or authorized by it.
    ///
    /// # Returns
    /// - `(assets, shares)` borrowed and debt shares minted.
    #[endpoint(borrow)]
    fn borrow(
        &self,
        params: MarketParams<Self::Api>,
        assets: BigUint,
        shares: BigUint,
        on_behalf: ManagedAddress,
        receiver: ManagedAddress,
    ) -> MultiValue2<BigUint, BigUint> {
        let id = self.require_market_created(&params);
        self.require_exactly_one_zero(&assets, &shares);
        self.require_non_zero_address(&receiver);
        let caller = self.blockchain().get_caller();
        self.require_sender_authorized(&caller, &on_behalf);

        self.accrue_market(&id, &params);

        let mut cache = Cache::new(self, &id, &params);
        let (assets, shares) =
            self.process_borrow(&mut cache, &assets, &shares, &on_behalf, &receiver, &caller);

        self.send_asset(&params.loan_token, &assets, &receiver);

        (assets, shares).into()
    }

    /// Repays debt of `on_behalf`. Anyone may repay for anyone.
    ///
    /// # Payment
    /// - Loan token covering the repaid assets; any excess is refunded.
    ///
    /// # Returns
    /// - `(assets, shares)` repaid and debt shares burned.
    #[payable]
    #[endpoint(repay)]
    fn repay(
        &self,
        params: MarketParams<Self::Api>,
        assets: BigUint,
        shares: BigUint,
        on_behalf: ManagedAddress,
    ) -> MultiValue2<BigUint, BigUint> {
        let id = self.require_market_created(&params);
        self.require_exactly_one_zero(&assets, &shares);
        self.require_non_zero_address(&on_behalf);
        let paid = self.get_payment_amount(&params.loan_token);
        let caller = self.blockchain().get_caller();

        self.accrue_market(&id, &params);

        let mut cache = Cache::new(self, &id, &params);
        let (assets, shares) = self.process_repay(&mut cache, &assets, &shares, &on_behalf, &caller);

        self.settle_payment(&params.loan_token, &paid, &assets, &caller);

        (assets, shares).into()
    }

    /// Liquidates an unhealthy position of `borrower`.
    ///
    /// # Arguments
    /// - `seized_assets`: Collateral to seize, or zero.
    /// - `repaid_shares`: Debt shares to repay, or zero.
    ///
    /// # Payment
    /// - Loan token covering the repaid assets; any excess is refunded.
    ///
    /// # Returns
    /// - `(seized_assets, repaid_assets, bad_debt_assets)`.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(
        &self,
        params: MarketParams<Self::Api>,
        borrower: ManagedAddress,
        seized_assets: BigUint,
        repaid_shares: BigUint,
    ) -> MultiValue3<BigUint, BigUint, BigUint> {
        let id = self.require_market_created(&params);
        self.require_exactly_one_zero(&seized_assets, &repaid_shares);
        let paid = self.get_payment_amount(&params.loan_token);
        let caller = self.blockchain().get_caller();

        self.accrue_market(&id, &params);

        let mut cache = Cache::new(self, &id, &params);
        let result =
            self.process_liquidation(&mut cache, &borrower, &seized_assets, &repaid_shares, &caller);

        self.settle_payment(&params.loan_token, &paid, &result.repaid_assets, &caller);
        self.send_asset(&params.collateral_token, &result.seized_assets, &caller);

        (
            result.seized_assets,
            result.repaid_assets,
            result.bad_debt_assets,
        )
            .into()
    }

    /// Accrues interest on a market up to the current timestamp.
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self, params: MarketParams<Self::Api>) {
        let id = self.require_market_created(&params);
        self.accrue_market(&id, &params);
    }

    /// Allows or revokes `authorized` to withdraw, borrow and remove collateral for the caller.
    #[endpoint(setAuthorization)]
    fn set_authorization(&self, authorized: ManagedAddress, new_is_authorized: bool) {
        let caller = self.blockchain().get_caller();
        let mapper = self.is_authorized(&caller, &authorized);
        require!(mapper.get() != new_is_authorized, ERROR_ALREADY_SET);

        mapper.set(new_is_authorized);

        self.set_authorization_event(&caller, &authorized, new_is_authorized);
    }
}
