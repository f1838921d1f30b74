#![no_std]

pub mod proxy_isolated_markets;
pub mod proxy_oracle;
pub mod proxy_rate_mock;
pub mod proxy_rate_model;
