#![no_std]

/// Fixed-point unit used for rates, ratios and the lltv (1e18 = 100%)
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

/// Scale of the oracle price: `collateral * price / ORACLE_PRICE_SCALE` is a loan-asset amount
pub const ORACLE_PRICE_SCALE: u128 = 1_000_000_000_000_000_000_000_000_000_000_000_000;

/// Virtual shares added to every share/asset ratio
pub const VIRTUAL_SHARES: u64 = 1_000_000;
/// Virtual asset unit added to every share/asset ratio
pub const VIRTUAL_ASSETS: u64 = 1;

/// Maximum protocol fee on accrued interest (25%)
pub const MAX_FEE: u128 = 250_000_000_000_000_000;

/// Upper bound of the liquidation incentive factor (115%)
pub const MAX_LIQUIDATION_INCENTIVE_FACTOR: u128 = 1_150_000_000_000_000_000;
/// Cursor shaping the lltv-based incentive (30%)
pub const LIQUIDATION_CURSOR: u128 = 300_000_000_000_000_000;
/// Steepness of the health-gap ramp towards the maximum incentive (200%)
pub const K_SCALLING_FACTOR: u128 = 2_000_000_000_000_000_000;

pub const SECONDS_PER_YEAR: u64 = 31_556_926;
