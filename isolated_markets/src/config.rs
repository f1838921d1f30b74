multiversx_sc::imports!();

use common_constants::{MAX_FEE, WAD};
use common_errors::*;
use common_structs::{Market, MarketId, MarketParams};

use crate::{accrual, storage, utils, validation};

/// Governance of the isolated markets engine.
///
/// The owner maintains the allow-lists of interest rate models and liquidation
/// loan-to-value ratios that market creation checks, sets the protocol fee of each
/// market and the address collecting it. Allow-lists are add-only.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + utils::LendingUtilsModule
    + accrual::AccrualModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Allow-lists an interest rate model for market creation.
    ///
    /// # Errors
    /// - `ERROR_ADDRESS_IS_ZERO`: If `irm` is the zero address.
    /// - `ERROR_ALREADY_SET`: If the model is already enabled.
    #[only_owner]
    #[endpoint(enableIrm)]
    fn enable_irm(&self, irm: ManagedAddress) {
        self.require_non_zero_address(&irm);
        require!(self.enabled_irms().insert(irm.clone()), ERROR_ALREADY_SET);

        self.enable_irm_event(&irm);
    }

    /// Allow-lists a liquidation loan-to-value ratio for market creation.
    ///
    /// # Errors
    /// - `ERROR_MAX_LLTV_EXCEEDED`: If `lltv >= 100%`.
    /// - `ERROR_ALREADY_SET`: If the ratio is already enabled.
    #[only_owner]
    #[endpoint(enableLltv)]
    fn enable_lltv(&self, lltv: BigUint) {
        require!(lltv < BigUint::from(WAD), ERROR_MAX_LLTV_EXCEEDED);
        require!(self.enabled_lltvs().insert(lltv.clone()), ERROR_ALREADY_SET);

        self.enable_lltv_event(&lltv);
    }

    /// Sets the share of accrued interest minted to the fee recipient.
    ///
    /// Interest up to now is accrued with the old fee first.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_CREATED`: If the market does not exist.
    /// - `ERROR_ALREADY_SET`: If the fee is unchanged.
    /// - `ERROR_MAX_FEE_EXCEEDED`: If `new_fee > 25%`.
    /// - `ERROR_FEE_RECIPIENT_NOT_SET`: If a non-zero fee is set before a recipient exists.
    #[only_owner]
    #[endpoint(setFee)]
    fn set_fee(&self, params: MarketParams<Self::Api>, new_fee: BigUint) {
        let id = self.require_market_created(&params);
        require!(self.market(&id).get().fee != new_fee, ERROR_ALREADY_SET);
        require!(new_fee <= BigUint::from(MAX_FEE), ERROR_MAX_FEE_EXCEEDED);
        require!(
            new_fee == 0 || !self.fee_recipient().is_empty(),
            ERROR_FEE_RECIPIENT_NOT_SET
        );

        self.accrue_market(&id, &params);

        self.market(&id).update(|market| market.fee = new_fee.clone());

        self.set_fee_event(&id, &new_fee);
    }

    /// Changes the address credited with fee shares. Fees already minted stay with the previous recipient.
    #[only_owner]
    #[endpoint(setFeeRecipient)]
    fn set_fee_recipient(&self, new_fee_recipient: ManagedAddress) {
        self.require_non_zero_address(&new_fee_recipient);
        let mapper = self.fee_recipient();
        require!(
            mapper.is_empty() || mapper.get() != new_fee_recipient,
            ERROR_ALREADY_SET
        );

        mapper.set(&new_fee_recipient);

        self.set_fee_recipient_event(&new_fee_recipient);
    }

    /// Creates a market for an allow-listed rate model and lltv.
    ///
    /// # Errors
    /// - `ERROR_IRM_NOT_ENABLED`, `ERROR_LLTV_NOT_ENABLED`: If either is not allow-listed.
    /// - `ERROR_INVALID_MARKET_PARAMS`: If the loan and collateral tokens are the same or an address is zero.
    /// - `ERROR_MARKET_ALREADY_CREATED`: If a market with these parameters exists.
    fn create_market_internal(&self, params: &MarketParams<Self::Api>) -> MarketId<Self::Api> {
        require!(
            self.enabled_irms().contains(&params.irm),
            ERROR_IRM_NOT_ENABLED
        );
        require!(
            self.enabled_lltvs().contains(&params.lltv),
            ERROR_LLTV_NOT_ENABLED
        );
        require!(
            params.loan_token != params.collateral_token && !params.oracle.is_zero(),
            ERROR_INVALID_MARKET_PARAMS
        );

        let id = self.get_market_id(params);
        require!(self.market(&id).is_empty(), ERROR_MARKET_ALREADY_CREATED);

        let timestamp = self.blockchain().get_block_timestamp();
        self.market(&id).set(Market::new(timestamp));
        self.id_to_market_params(&id).set(params);
        self.markets().insert(id.clone());

        self.create_market_event(&id, params);

        id
    }
}
