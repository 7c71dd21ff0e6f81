use common_structs::{PushFailure, PushFailureReason, PushPayload, PositionSnapshot, Reservation};
use multiversx_sc::types::{BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, TokenIdentifier};
use multiversx_sc_scenario::api::StaticApi;

fn lender() -> ManagedAddress<StaticApi> {
    ManagedAddress::from(&[7u8; 32])
}

fn asset() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(TokenIdentifier::from_esdt_bytes(b"USDC-123456"))
}

fn reservation(amount: u64) -> Reservation<StaticApi> {
    Reservation::new(lender(), asset(), BigUint::from(amount))
}

#[test]
fn take_up_to_exact_amount_clears_reservation() {
    let mut slot = reservation(100);

    let usage = slot.take_up_to(&BigUint::from(100u64));

    assert_eq!(usage.used, BigUint::from(100u64));
    assert_eq!(usage.remaining, BigUint::zero());
    assert_eq!(slot.amount, BigUint::zero());
    assert!(!slot.active);
}

#[test]
fn take_up_to_smaller_amount_keeps_remainder() {
    let mut slot = reservation(100);

    let usage = slot.take_up_to(&BigUint::from(40u64));

    assert_eq!(usage.used, BigUint::from(40u64));
    assert_eq!(usage.remaining, BigUint::from(60u64));
    assert_eq!(slot.amount, BigUint::from(60u64));
    assert!(slot.active);
}

#[test]
fn take_up_to_larger_amount_only_uses_what_is_reserved() {
    let mut slot = reservation(30);

    let usage = slot.take_up_to(&BigUint::from(50u64));

    assert_eq!(usage.used, BigUint::from(30u64));
    assert_eq!(usage.remaining, BigUint::zero());
    assert!(!slot.active);
}

#[test]
fn take_all_drains_reservation() {
    let mut slot = reservation(25);

    assert_eq!(slot.take_all(), BigUint::from(25u64));
    assert_eq!(slot.amount, BigUint::zero());
    assert!(!slot.active);
}

#[test]
fn reservation_ownership() {
    let slot = reservation(1);

    assert!(slot.is_owned_by(&lender()));
    assert!(!slot.is_owned_by(&ManagedAddress::from(&[8u8; 32])));
}

#[test]
fn missing_module_failure_has_zero_target() {
    let payload = PushPayload::Position(PositionSnapshot {
        user: lender(),
        asset: asset(),
        collateral: BigUint::from(200u64),
        debt: BigUint::from(50u64),
    });

    let failure = PushFailure::module_missing(payload.clone());

    assert!(failure.target.is_zero());
    assert_eq!(failure.reason, PushFailureReason::ModuleMissing);
    assert_eq!(failure.payload, payload);
}
