#![allow(dead_code)]

use crate::constants::*;

use common_proxies::{proxy_isolated_markets, proxy_oracle, proxy_rate_mock, proxy_rate_model};
use common_structs::{Market, MarketBalances, MarketId, MarketParams, Position};
use multiversx_sc::{
    imports::OptionalValue,
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ReturnsNewManagedAddress,
        ReturnsResult, TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(ENGINE_PATH, isolated_markets::ContractBuilder);
    blockchain.register_contract(RATE_MODEL_PATH, rate_model::ContractBuilder);
    blockchain.register_contract(RATE_MOCK_PATH, rate_mock::ContractBuilder);
    blockchain.register_contract(ORACLE_MOCK_PATH, oracle_mock::ContractBuilder);

    blockchain
}

pub struct IsolatedMarketsTestState {
    pub world: ScenarioWorld,
    pub engine: ManagedAddress<StaticApi>,
    pub rate_mock: ManagedAddress<StaticApi>,
    pub rate_model: ManagedAddress<StaticApi>,
    pub oracle: ManagedAddress<StaticApi>,
    pub params: MarketParams<StaticApi>,
    pub market_id: MarketId<StaticApi>,
}

impl IsolatedMarketsTestState {
    /// Engine with a fee recipient and one market: LOAN lent against COLL,
    /// 80% lltv, price 1:1, 10% APR from the fixed-rate mock.
    pub fn new() -> Self {
        Self::with_fee_recipient(OptionalValue::Some(FEE_RECIPIENT_ADDRESS.to_managed_address()))
    }

    pub fn with_fee_recipient(fee_recipient: OptionalValue<ManagedAddress<StaticApi>>) -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let oracle = setup_oracle(&mut world, big(PRICE_ONE));
        let rate_mock = setup_rate_mock(&mut world, big(RATE_PER_SECOND));
        let rate_model = setup_rate_model(&mut world);
        let engine = setup_engine(&mut world, fee_recipient);

        let params = MarketParams {
            loan_token: EgldOrEsdtTokenIdentifier::esdt(LOAN_TOKEN.to_token_identifier()),
            collateral_token: EgldOrEsdtTokenIdentifier::esdt(COLLATERAL_TOKEN.to_token_identifier()),
            oracle: oracle.clone(),
            irm: rate_mock.clone(),
            lltv: big(LLTV),
        };

        let mut state = Self {
            world,
            engine,
            rate_mock: rate_mock.clone(),
            rate_model: rate_model.clone(),
            oracle,
            params: params.clone(),
            market_id: MarketId::new_from_bytes(&[0u8; 32]),
        };

        state.enable_irm(&rate_mock);
        state.enable_irm(&rate_model);
        state.enable_lltv(big(LLTV));
        state.market_id = state.create_market(&params);

        state
    }

    /// Parameters of a second market on the same tokens, priced by the same
    /// oracle but driven by the kinked rate model.
    pub fn rate_model_params(&self) -> MarketParams<StaticApi> {
        let mut params = self.params.clone();
        params.irm = self.rate_model.clone();
        params
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Governance

    pub fn enable_irm(&mut self, irm: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .enable_irm(irm)
            .run();
    }

    pub fn enable_irm_error(
        &mut self,
        from: &TestAddress,
        irm: &ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .enable_irm(irm)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn enable_lltv(&mut self, lltv: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .enable_lltv(lltv)
            .run();
    }

    pub fn enable_lltv_error(&mut self, lltv: BigUint<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .enable_lltv(lltv)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_fee(&mut self, params: &MarketParams<StaticApi>, fee: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .set_fee(params, fee)
            .run();
    }

    pub fn set_fee_error(
        &mut self,
        params: &MarketParams<StaticApi>,
        fee: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .set_fee(params, fee)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_fee_recipient(&mut self, recipient: &TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .set_fee_recipient(recipient.to_managed_address())
            .run();
    }

    pub fn set_fee_recipient_error(&mut self, recipient: &TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .set_fee_recipient(recipient.to_managed_address())
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn create_market(&mut self, params: &MarketParams<StaticApi>) -> MarketId<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .create_market(params)
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_market_error(&mut self, params: &MarketParams<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .create_market(params)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_authorization(&mut self, from: &TestAddress, authorized: &TestAddress, value: bool) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .set_authorization(authorized.to_managed_address(), value)
            .run();
    }

    pub fn set_authorization_error(
        &mut self,
        from: &TestAddress,
        authorized: &TestAddress,
        value: bool,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .set_authorization(authorized.to_managed_address(), value)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Lending

    pub fn supply(
        &mut self,
        from: &TestAddress,
        assets: BigUint<StaticApi>,
        shares: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .supply(&self.params, assets, shares, from.to_managed_address())
            .single_esdt(&LOAN_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn supply_assets(&mut self, from: &TestAddress, assets: BigUint<StaticApi>) -> BigUint<StaticApi> {
        let (_, shares) = self.supply(from, assets.clone(), BigUint::zero(), assets);
        shares
    }

    pub fn supply_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        assets: BigUint<StaticApi>,
        shares: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .supply(&self.params, assets, shares, from.to_managed_address())
            .single_esdt(&token.to_token_identifier(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw(
        &mut self,
        from: &TestAddress,
        assets: BigUint<StaticApi>,
        shares: BigUint<StaticApi>,
        on_behalf: &TestAddress,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .withdraw(
                &self.params,
                assets,
                shares,
                on_behalf.to_managed_address(),
                from.to_managed_address(),
            )
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn withdraw_error(
        &mut self,
        from: &TestAddress,
        assets: BigUint<StaticApi>,
        shares: BigUint<StaticApi>,
        on_behalf: &TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .withdraw(
                &self.params,
                assets,
                shares,
                on_behalf.to_managed_address(),
                from.to_managed_address(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn supply_collateral(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .supply_collateral(&self.params, from.to_managed_address())
            .single_esdt(&COLLATERAL_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn supply_collateral_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .supply_collateral(&self.params, from.to_managed_address())
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn withdraw_collateral(&mut self, from: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .withdraw_collateral(
                &self.params,
                amount,
                from.to_managed_address(),
                from.to_managed_address(),
            )
            .run();
    }

    pub fn withdraw_collateral_error(
        &mut self,
        from: &TestAddress,
        amount: BigUint<StaticApi>,
        on_behalf: &TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .withdraw_collateral(
                &self.params,
                amount,
                on_behalf.to_managed_address(),
                from.to_managed_address(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn borrow(
        &mut self,
        from: &TestAddress,
        assets: BigUint<StaticApi>,
        shares: BigUint<StaticApi>,
        on_behalf: &TestAddress,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .borrow(
                &self.params,
                assets,
                shares,
                on_behalf.to_managed_address(),
                from.to_managed_address(),
            )
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn borrow_assets(&mut self, from: &TestAddress, assets: BigUint<StaticApi>) -> BigUint<StaticApi> {
        let (_, shares) = self.borrow(from, assets, BigUint::zero(), from);
        shares
    }

    pub fn borrow_error(
        &mut self,
        from: &TestAddress,
        assets: BigUint<StaticApi>,
        shares: BigUint<StaticApi>,
        on_behalf: &TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .borrow(
                &self.params,
                assets,
                shares,
                on_behalf.to_managed_address(),
                from.to_managed_address(),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay(
        &mut self,
        from: &TestAddress,
        assets: BigUint<StaticApi>,
        shares: BigUint<StaticApi>,
        on_behalf: &TestAddress,
        payment: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .repay(&self.params, assets, shares, on_behalf.to_managed_address())
            .single_esdt(&LOAN_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn repay_error(
        &mut self,
        from: &TestAddress,
        assets: BigUint<StaticApi>,
        shares: BigUint<StaticApi>,
        on_behalf: &TestAddress,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .repay(&self.params, assets, shares, on_behalf.to_managed_address())
            .single_esdt(&LOAN_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn liquidate(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        seized_assets: BigUint<StaticApi>,
        repaid_shares: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .liquidate(
                &self.params,
                borrower.to_managed_address(),
                seized_assets,
                repaid_shares,
            )
            .single_esdt(&LOAN_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn liquidate_error(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        seized_assets: BigUint<StaticApi>,
        repaid_shares: BigUint<StaticApi>,
        payment: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .liquidate(
                &self.params,
                borrower.to_managed_address(),
                seized_assets,
                repaid_shares,
            )
            .single_esdt(&LOAN_TOKEN.to_token_identifier(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn accrue_interest(&mut self, params: &MarketParams<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .accrue_interest(params)
            .run();
    }

    // Peripheral contracts

    pub fn set_price(&mut self, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle)
            .typed(proxy_oracle::OracleProxy)
            .set_price(price)
            .run();
    }

    pub fn set_rate(&mut self, rate: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.rate_mock)
            .typed(proxy_rate_mock::RateMockProxy)
            .set_rate(rate)
            .run();
    }

    pub fn set_reentrancy(&mut self, depth: u32) {
        let engine = self.engine.clone();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.rate_mock)
            .typed(proxy_rate_mock::RateMockProxy)
            .set_reentrancy(engine, depth)
            .run();
    }

    pub fn get_reentrancy_depth(&mut self) -> u32 {
        self.world
            .query()
            .to(&self.rate_mock)
            .typed(proxy_rate_mock::RateMockProxy)
            .reentrancy_depth()
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_last_borrow_rate(&mut self, id: &MarketId<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.rate_model)
            .typed(proxy_rate_model::RateModelProxy)
            .last_borrow_rate(id)
            .returns(ReturnsResult)
            .run()
    }

    // Views

    pub fn get_market(&mut self) -> Market<StaticApi> {
        let id = self.market_id.clone();
        self.get_market_by_id(&id)
    }

    pub fn get_market_by_id(&mut self, id: &MarketId<StaticApi>) -> Market<StaticApi> {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .market(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_position(&mut self, user: &TestAddress) -> Position<StaticApi> {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .position(&self.market_id, user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_market_id(&mut self, params: &MarketParams<StaticApi>) -> MarketId<StaticApi> {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .market_id(params)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_irm_enabled(&mut self, irm: &ManagedAddress<StaticApi>) -> bool {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .is_irm_enabled(irm)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_lltv_enabled(&mut self, lltv: BigUint<StaticApi>) -> bool {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .is_lltv_enabled(lltv)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_authorized(&mut self, authorizer: &TestAddress, authorized: &TestAddress) -> bool {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .is_authorized(authorizer.to_managed_address(), authorized.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn expected_market_balances(&mut self) -> MarketBalances<StaticApi> {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .expected_market_balances(&self.params)
            .returns(ReturnsResult)
            .run()
    }

    pub fn expected_supply_assets(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .expected_supply_assets(&self.params, user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn expected_borrow_assets(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .expected_borrow_assets(&self.params, user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_healthy(&mut self, user: &TestAddress) -> bool {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .is_healthy(&self.params, user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidation_incentive_factor(&mut self, user: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.engine)
            .typed(proxy_isolated_markets::IsolatedMarketsProxy)
            .liquidation_incentive_factor(&self.params, user.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    // Balances

    pub fn check_token_balance(
        &mut self,
        user: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world.check_account(*user).esdt_balance(token, amount);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);

    for user in [
        SUPPLIER_ADDRESS,
        SECOND_SUPPLIER_ADDRESS,
        BORROWER_ADDRESS,
        LIQUIDATOR_ADDRESS,
        MANAGER_ADDRESS,
    ] {
        world
            .account(user)
            .nonce(1)
            .esdt_balance(LOAN_TOKEN, big(INITIAL_BALANCE))
            .esdt_balance(COLLATERAL_TOKEN, big(INITIAL_BALANCE))
            .esdt_balance(OTHER_TOKEN, big(INITIAL_BALANCE));
    }

    world.account(FEE_RECIPIENT_ADDRESS).nonce(1);
}

pub fn setup_oracle(world: &mut ScenarioWorld, price: BigUint<StaticApi>) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_oracle::OracleProxy)
        .init(price)
        .code(ORACLE_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_rate_mock(world: &mut ScenarioWorld, rate: BigUint<StaticApi>) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_rate_mock::RateMockProxy)
        .init(rate)
        .code(RATE_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_rate_model(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_rate_model::RateModelProxy)
        .init(
            big(BASE_RATE),
            big(SLOPE1),
            big(SLOPE2),
            big(OPTIMAL_UTILIZATION),
            big(MAX_RATE),
        )
        .code(RATE_MODEL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_engine(
    world: &mut ScenarioWorld,
    fee_recipient: OptionalValue<ManagedAddress<StaticApi>>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_isolated_markets::IsolatedMarketsProxy)
        .init(fee_recipient)
        .code(ENGINE_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

/// Supplier provides 10_000 LOAN; borrower pledges 1_000 COLL and borrows `borrowed`.
pub fn setup_borrow_position(state: &mut IsolatedMarketsTestState, borrowed: BigUint<StaticApi>) {
    state.supply_assets(&SUPPLIER_ADDRESS, wad(10_000));
    state.supply_collateral(&BORROWER_ADDRESS, wad(1_000));
    state.borrow_assets(&BORROWER_ADDRESS, borrowed);
}
