#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("debt_recorded")]
    fn debt_recorded_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] new_debt: &BigUint,
        #[indexed] is_increase: bool,
    );

    #[event("debt_value_updated")]
    fn debt_value_updated_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] user_debt_value: &BigUint,
        #[indexed] total_debt_value: &BigUint,
    );

    #[event("price_fallback")]
    fn price_fallback_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] fallback_price: &BigUint,
        #[indexed] has_fallback: bool,
    );

    #[event("cache_update_failed")]
    fn cache_update_failed_event(
        &self,
        #[indexed] target: &ManagedAddress,
        #[indexed] user: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral: &BigUint,
        #[indexed] debt: &BigUint,
        #[indexed] reason: PushFailureReason,
        message: &ManagedBuffer,
    );

    #[event("health_push_failed")]
    fn health_push_failed_event(
        &self,
        #[indexed] target: &ManagedAddress,
        #[indexed] user: &ManagedAddress,
        #[indexed] health_factor_bps: &BigUint,
        #[indexed] collateral_value: &BigUint,
        #[indexed] debt_value: &BigUint,
        #[indexed] reason: PushFailureReason,
        message: &ManagedBuffer,
    );

    #[event("reservation_created")]
    fn reservation_created_event(
        &self,
        #[indexed] intent_hash: &IntentHash<Self::Api>,
        #[indexed] lender: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
    );

    #[event("reservation_cancelled")]
    fn reservation_cancelled_event(
        &self,
        #[indexed] intent_hash: &IntentHash<Self::Api>,
        #[indexed] lender: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("reservation_consumed")]
    fn reservation_consumed_event(
        &self,
        #[indexed] intent_hash: &IntentHash<Self::Api>,
        #[indexed] lender: &ManagedAddress,
        #[indexed] used: &BigUint,
        #[indexed] remaining: &BigUint,
    );

    #[event("settlement_finalized")]
    fn settlement_finalized_event(
        &self,
        #[indexed] order_id: u64,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] lender: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] gross_amount: &BigUint,
        #[indexed] net_amount: &BigUint,
        #[indexed] platform_cut: &BigUint,
        #[indexed] ecosystem_cut: &BigUint,
    );

    #[event("loan_order_created")]
    fn loan_order_created_event(&self, #[indexed] order_id: u64, order: &LoanOrder<Self::Api>);

    #[event("liquidation_executed")]
    fn liquidation_executed_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] collateral_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] debt_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] seized: &BigUint,
        #[indexed] reduced: &BigUint,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] bonus: &BigUint,
    );
}
