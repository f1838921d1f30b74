#![allow(dead_code)]

use multiversx_sc::types::{BigUint, TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::{api::StaticApi, imports::MxscPath};

pub const ENGINE_PATH: MxscPath = MxscPath::new("output/isolated_markets.mxsc.json");
pub const RATE_MODEL_PATH: MxscPath = MxscPath::new("../rate_model/output/rate_model.mxsc.json");
pub const RATE_MOCK_PATH: MxscPath = MxscPath::new("../rate_mock/output/rate_mock.mxsc.json");
pub const ORACLE_MOCK_PATH: MxscPath = MxscPath::new("../oracle_mock/output/oracle_mock.mxsc.json");

pub const LOAN_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("LOAN-abcdef");
pub const COLLATERAL_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("COLL-abcdef");
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-abcdef");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const SUPPLIER_ADDRESS: TestAddress = TestAddress::new("supplier");
pub const SECOND_SUPPLIER_ADDRESS: TestAddress = TestAddress::new("second-supplier");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const MANAGER_ADDRESS: TestAddress = TestAddress::new("manager");
pub const FEE_RECIPIENT_ADDRESS: TestAddress = TestAddress::new("fee-recipient");

pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const ORACLE_PRICE_SCALE: u128 = WAD * WAD;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_YEAR: u64 = 31_556_926;

/// Starting balance of every test account, per token
pub const INITIAL_BALANCE: u128 = 1_000_000 * WAD;

/// 80% liquidation LTV
pub const LLTV: u128 = 800_000_000_000_000_000;
/// 1 collateral unit = 1 loan unit
pub const PRICE_ONE: u128 = ORACLE_PRICE_SCALE;
/// 10% per year, expressed per second
pub const RATE_PER_SECOND: u128 = WAD / 10 / SECONDS_PER_YEAR as u128;

// Kinked curve used by the rate model: 1% base, 5% at 80% utilization, 65% at full
pub const BASE_RATE: u128 = 10_000_000_000_000_000;
pub const SLOPE1: u128 = 40_000_000_000_000_000;
pub const SLOPE2: u128 = 600_000_000_000_000_000;
pub const OPTIMAL_UTILIZATION: u128 = 800_000_000_000_000_000;
pub const MAX_RATE: u128 = 1_000_000_000_000_000_000;

pub fn wad(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount as u128 * WAD)
}

pub fn big(amount: u128) -> BigUint<StaticApi> {
    BigUint::from(amount)
}
