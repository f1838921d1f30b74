multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INCONSISTENT_INPUT,
    ERROR_INVALID_ASSET, ERROR_INVALID_MARKET_PARAMS, ERROR_MARKET_NOT_CREATED, ERROR_UNAUTHORIZED,
};
use common_structs::{MarketId, MarketParams};

use crate::storage;

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    /// Deterministic id of a market: keccak256 of the top-encoded parameters.
    fn get_market_id(&self, params: &MarketParams<Self::Api>) -> MarketId<Self::Api> {
        let mut encoded = ManagedBuffer::new();
        if params.top_encode(&mut encoded).is_err() {
            sc_panic!(ERROR_INVALID_MARKET_PARAMS);
        }

        self.crypto().keccak256(&encoded)
    }

    /// Resolves the id of an existing market.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_CREATED`: If no market was created with these parameters.
    fn require_market_created(&self, params: &MarketParams<Self::Api>) -> MarketId<Self::Api> {
        let id = self.get_market_id(params);
        require!(!self.market(&id).is_empty(), ERROR_MARKET_NOT_CREATED);
        id
    }

    /// Exactly one of `assets` and `shares` must be non-zero.
    fn require_exactly_one_zero(&self, assets: &BigUint, shares: &BigUint) {
        let assets_zero = assets == &BigUint::zero();
        let shares_zero = shares == &BigUint::zero();
        require!(assets_zero != shares_zero, ERROR_INCONSISTENT_INPUT);
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_ADDRESS_IS_ZERO);
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(
            amount > &BigUint::zero(),
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
    }

    /// The caller must be `on_behalf` itself or an address `on_behalf` authorized.
    ///
    /// # Errors
    /// - `ERROR_UNAUTHORIZED`: Otherwise.
    fn require_sender_authorized(&self, caller: &ManagedAddress, on_behalf: &ManagedAddress) {
        require!(
            caller == on_behalf || self.is_authorized(on_behalf, caller).get(),
            ERROR_UNAUTHORIZED
        );
    }

    /// Retrieves the single payment of the call and checks its token.
    ///
    /// # Errors
    /// - `ERROR_INVALID_ASSET`: If the payment is not in `expected_token`.
    fn get_payment_amount(&self, expected_token: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();

        require!(&token == expected_token, ERROR_INVALID_ASSET);

        amount
    }
}
