#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Deterministic key of a market: keccak256 of the top-encoded `MarketParams`.
pub type MarketId<M> = ManagedByteArray<M, 32>;

/// Immutable definition of an isolated market.
///
/// Two parameter sets with identical fields hash to the same `MarketId`
/// and therefore describe the same market.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct MarketParams<M: ManagedTypeApi> {
    /// Asset lent and borrowed in this market.
    pub loan_token: EgldOrEsdtTokenIdentifier<M>,
    /// Asset pledged by borrowers.
    pub collateral_token: EgldOrEsdtTokenIdentifier<M>,
    /// Contract quoting the collateral in loan-asset units, scaled by `ORACLE_PRICE_SCALE`.
    pub oracle: ManagedAddress<M>,
    /// Contract returning the per-second borrow rate.
    pub irm: ManagedAddress<M>,
    /// Liquidation loan-to-value, WAD.
    pub lltv: BigUint<M>,
}

/// Pooled state of one market.
///
/// `total_borrow_assets <= total_supply_assets` holds after every operation,
/// and a zero share total always pairs with a zero asset total.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct Market<M: ManagedTypeApi> {
    pub total_supply_assets: BigUint<M>,
    pub total_supply_shares: BigUint<M>,
    pub total_borrow_assets: BigUint<M>,
    pub total_borrow_shares: BigUint<M>,
    /// Timestamp (seconds) of the last accrual.
    pub last_update: u64,
    /// Fraction of accrued interest minted to the fee recipient, WAD.
    pub fee: BigUint<M>,
}

impl<M: ManagedTypeApi> Market<M> {
    pub fn new(timestamp: u64) -> Self {
        Market {
            total_supply_assets: BigUint::zero(),
            total_supply_shares: BigUint::zero(),
            total_borrow_assets: BigUint::zero(),
            total_borrow_shares: BigUint::zero(),
            last_update: timestamp,
            fee: BigUint::zero(),
        }
    }

    /// Assets that can still leave the pool through withdrawals or borrows.
    pub fn available_liquidity(&self) -> BigUint<M> {
        if self.total_supply_assets > self.total_borrow_assets {
            &self.total_supply_assets - &self.total_borrow_assets
        } else {
            BigUint::zero()
        }
    }

    pub fn is_solvent(&self) -> bool {
        self.total_borrow_assets <= self.total_supply_assets
    }
}

/// Balances of one account in one market.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct Position<M: ManagedTypeApi> {
    pub supply_shares: BigUint<M>,
    pub borrow_shares: BigUint<M>,
    /// Collateral in asset units; it is neither pooled nor interest-bearing.
    pub collateral: BigUint<M>,
}

impl<M: ManagedTypeApi> Default for Position<M> {
    fn default() -> Self {
        Position {
            supply_shares: BigUint::zero(),
            borrow_shares: BigUint::zero(),
            collateral: BigUint::zero(),
        }
    }
}

impl<M: ManagedTypeApi> Position<M> {
    pub fn is_empty(&self) -> bool {
        self.supply_shares == 0 && self.borrow_shares == 0 && self.collateral == 0
    }

    pub fn has_debt(&self) -> bool {
        self.borrow_shares > 0
    }
}

/// Market totals after a simulated accrual at the current block timestamp.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct MarketBalances<M: ManagedTypeApi> {
    pub total_supply_assets: BigUint<M>,
    pub total_supply_shares: BigUint<M>,
    pub total_borrow_assets: BigUint<M>,
    pub total_borrow_shares: BigUint<M>,
}

/// Outcome of an interest accrual over one elapsed window.
pub struct AccrualResult<M: ManagedTypeApi> {
    pub interest: BigUint<M>,
    pub fee_shares: BigUint<M>,
}

/// Configuration of the utilization-driven rate curve. All values are annual, WAD.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct RateModelParams<M: ManagedTypeApi> {
    pub base_rate: BigUint<M>,
    pub slope1: BigUint<M>,
    pub slope2: BigUint<M>,
    pub optimal_utilization: BigUint<M>,
    pub max_rate: BigUint<M>,
}

/// Amounts settled by one liquidation.
pub struct LiquidationResult<M: ManagedTypeApi> {
    /// Collateral transferred to the liquidator.
    pub seized_assets: BigUint<M>,
    /// Loan assets paid by the liquidator.
    pub repaid_assets: BigUint<M>,
    /// Debt written off against suppliers, zero unless the collateral was exhausted.
    pub bad_debt_assets: BigUint<M>,
}
