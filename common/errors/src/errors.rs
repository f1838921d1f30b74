#![no_std]

// Invalid market

pub static ERROR_MARKET_NOT_CREATED: &[u8] = b"Market not created.";

pub static ERROR_MARKET_ALREADY_CREATED: &[u8] = b"Market already created.";

pub static ERROR_IRM_NOT_ENABLED: &[u8] = b"Interest rate model not enabled.";

pub static ERROR_LLTV_NOT_ENABLED: &[u8] = b"Liquidation LTV not enabled.";

pub static ERROR_INVALID_MARKET_PARAMS: &[u8] = b"Invalid market parameters.";

// Invalid input

pub static ERROR_INCONSISTENT_INPUT: &[u8] = b"Exactly one of assets or shares must be non-zero.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_INSUFFICIENT_PAYMENT: &[u8] = b"Payment does not cover the required amount.";

// Pool liquidity

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient liquidity.";

// Health

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Not enough collateral available for this loan.";

pub static ERROR_HEALTH_FACTOR_WITHDRAW: &[u8] = b"Health factor will be too low after withdrawal.";

pub static ERROR_HEALTH_FACTOR: &[u8] = b"Health not low enough for liquidation.";

pub static ERROR_INVALID_ORACLE_PRICE: &[u8] = b"Oracle returned a zero price.";

// Position balances

pub static ERROR_INSUFFICIENT_DEPOSIT: &[u8] = b"Not enough tokens deposited for this account.";

pub static ERROR_INSUFFICIENT_COLLATERAL_BALANCE: &[u8] = b"Not enough collateral for this account.";

pub static ERROR_REPAY_EXCEEDS_DEBT: &[u8] = b"Repaid amount exceeds outstanding debt.";

// Governance and authorization

pub static ERROR_UNAUTHORIZED: &[u8] = b"Caller is not authorized for this account.";

pub static ERROR_ALREADY_SET: &[u8] = b"Value already set.";

pub static ERROR_MAX_LLTV_EXCEEDED: &[u8] = b"Liquidation LTV must be lower than 100%.";

pub static ERROR_MAX_FEE_EXCEEDED: &[u8] = b"Fee exceeds the maximum allowed.";

pub static ERROR_FEE_RECIPIENT_NOT_SET: &[u8] = b"Fee recipient not set.";

// Rate model

pub static ERROR_INVALID_RATE_MODEL_PARAMS: &[u8] = b"Invalid rate model parameters.";
