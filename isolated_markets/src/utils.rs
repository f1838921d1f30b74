multiversx_sc::imports!();

use common_errors::ERROR_INSUFFICIENT_PAYMENT;
use common_structs::{MarketId, Position};

use crate::storage;

#[multiversx_sc::module]
pub trait LendingUtilsModule: storage::Storage {
    /// Position of `user` in a market; all balances are zero when none is stored.
    fn get_position(&self, id: &MarketId<Self::Api>, user: &ManagedAddress) -> Position<Self::Api> {
        let mapper = self.position(id, user);
        if mapper.is_empty() {
            Position::default()
        } else {
            mapper.get()
        }
    }

    /// Writes a position back, clearing the storage entry once every balance is zero.
    fn store_position(
        &self,
        id: &MarketId<Self::Api>,
        user: &ManagedAddress,
        position: &Position<Self::Api>,
    ) {
        if position.is_empty() {
            self.position(id, user).clear();
        } else {
            self.position(id, user).set(position);
        }
    }

    /// Transfers assets (EGLD or ESDT) to a specified address.
    ///
    /// Uses `transfer_if_not_empty`, so a zero amount sends nothing.
    fn send_asset(&self, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint, to: &ManagedAddress) {
        let payment = EgldOrEsdtTokenPayment::new(token.clone(), 0, amount.clone());

        self.tx().to(to).payment(&payment).transfer_if_not_empty();
    }

    /// Keeps `required` out of the payment and returns the rest to `caller`.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_PAYMENT`: If `paid < required`.
    fn settle_payment(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        paid: &BigUint,
        required: &BigUint,
        caller: &ManagedAddress,
    ) {
        require!(paid >= required, ERROR_INSUFFICIENT_PAYMENT);

        let excess = paid - required;
        self.send_asset(token, &excess, caller);
    }
}
