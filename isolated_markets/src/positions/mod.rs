pub mod borrow;
pub mod collateral;
pub mod liquidation;
pub mod repay;
pub mod supply;
pub mod withdraw;
