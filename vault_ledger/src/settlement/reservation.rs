multiversx_sc::imports!();

use common_errors::{
    ERROR_ALREADY_RESERVED, ERROR_NOT_RESERVATION_LENDER, ERROR_RESERVATION_LENDER_MISMATCH,
    ERROR_RESERVATION_NOT_FOUND,
};
use common_structs::{IntentHash, Reservation, ReservationUse};

use crate::{storage, validation};

/// Lender funds staged under an intent hash until a match settles them.
///
/// At most one active reservation exists per intent hash. A drained
/// reservation is removed from storage, a partially used one keeps the rest.
#[multiversx_sc::module]
pub trait ReservationModule:
    storage::Storage + validation::ValidationModule + common_events::EventsModule
{
    fn create_reservation(
        &self,
        lender: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        intent_hash: &IntentHash<Self::Api>,
    ) {
        self.require_non_zero_address(lender);
        self.require_valid_asset(asset);
        self.require_amount_greater_than_zero(amount);

        let slot = self.reservations(intent_hash);
        require!(
            slot.is_empty() || !slot.get().active,
            ERROR_ALREADY_RESERVED
        );

        slot.set(Reservation::new(lender.clone(), asset.clone(), amount.clone()));
        self.reservation_created_event(intent_hash, lender, asset, amount);
    }

    /// Frees the reservation of `caller` and returns what has to be refunded.
    ///
    /// # Errors
    /// - `ERROR_RESERVATION_NOT_FOUND`: If there is no active reservation.
    /// - `ERROR_NOT_RESERVATION_LENDER`: If `caller` is not the recorded lender.
    fn cancel_reservation_of(
        &self,
        intent_hash: &IntentHash<Self::Api>,
        caller: &ManagedAddress,
    ) -> (EgldOrEsdtTokenIdentifier, BigUint) {
        let mut reservation = self.require_active_reservation(intent_hash);
        require!(reservation.is_owned_by(caller), ERROR_NOT_RESERVATION_LENDER);

        let amount = reservation.take_all();
        self.reservations(intent_hash).clear();
        self.reservation_cancelled_event(intent_hash, caller, &amount);

        (reservation.asset, amount)
    }

    /// Consumes the whole reservation of `expected_lender`.
    fn consume_reservation(
        &self,
        intent_hash: &IntentHash<Self::Api>,
        expected_lender: &ManagedAddress,
    ) -> (EgldOrEsdtTokenIdentifier, BigUint) {
        let mut reservation = self.require_lender_reservation(intent_hash, expected_lender);

        let used = reservation.take_all();
        self.reservations(intent_hash).clear();
        self.reservation_consumed_event(intent_hash, expected_lender, &used, &BigUint::zero());

        (reservation.asset, used)
    }

    /// Consumes at most `max_amount`, a partial fill leaves the remainder reserved.
    fn consume_reservation_up_to(
        &self,
        intent_hash: &IntentHash<Self::Api>,
        expected_lender: &ManagedAddress,
        max_amount: &BigUint,
    ) -> (EgldOrEsdtTokenIdentifier, ReservationUse<Self::Api>) {
        let mut reservation = self.require_lender_reservation(intent_hash, expected_lender);

        let usage = reservation.take_up_to(max_amount);
        if reservation.active {
            self.reservations(intent_hash).set(&reservation);
        } else {
            self.reservations(intent_hash).clear();
        }

        self.reservation_consumed_event(
            intent_hash,
            expected_lender,
            &usage.used,
            &usage.remaining,
        );

        (reservation.asset, usage)
    }

    fn require_lender_reservation(
        &self,
        intent_hash: &IntentHash<Self::Api>,
        expected_lender: &ManagedAddress,
    ) -> Reservation<Self::Api> {
        let reservation = self.require_active_reservation(intent_hash);
        require!(
            reservation.is_owned_by(expected_lender),
            ERROR_RESERVATION_LENDER_MISMATCH
        );

        reservation
    }

    fn require_active_reservation(
        &self,
        intent_hash: &IntentHash<Self::Api>,
    ) -> Reservation<Self::Api> {
        let slot = self.reservations(intent_hash);
        require!(!slot.is_empty(), ERROR_RESERVATION_NOT_FOUND);

        let reservation = slot.get();
        require!(reservation.active, ERROR_RESERVATION_NOT_FOUND);

        reservation
    }

    #[view(getReservation)]
    fn get_reservation(
        &self,
        intent_hash: IntentHash<Self::Api>,
    ) -> OptionalValue<Reservation<Self::Api>> {
        let slot = self.reservations(&intent_hash);
        if slot.is_empty() {
            return OptionalValue::None;
        }

        OptionalValue::Some(slot.get())
    }
}
