#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_constants::INTENT_HASH_LEN;

/// Key of a settlement reservation, the hash of the matched borrow/lend intent.
pub type IntentHash<M> = ManagedByteArray<M, INTENT_HASH_LEN>;

/// Price as published by the oracle module: `value = amount * price / 10^decimals`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
    pub decimals: u8,
}

impl<M: ManagedTypeApi> PriceFeed<M> {
    pub fn new(price: BigUint<M>, timestamp: u64, decimals: u8) -> Self {
        PriceFeed {
            price,
            timestamp,
            decimals,
        }
    }
}

/// Outcome of a single ledger mutation.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LedgerUpdate<M: ManagedTypeApi> {
    pub user: ManagedAddress<M>,
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub previous_debt: BigUint<M>,
    pub new_debt: BigUint<M>,
    /// Amount actually applied; lower than requested when a forced reduction is clamped.
    pub applied: BigUint<M>,
    pub is_increase: bool,
    pub user_debt_value: BigUint<M>,
}

impl<M: ManagedTypeApi> LedgerUpdate<M> {
    pub fn is_noop(&self) -> bool {
        self.applied == BigUint::zero()
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PositionSnapshot<M: ManagedTypeApi> {
    pub user: ManagedAddress<M>,
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub collateral: BigUint<M>,
    pub debt: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct HealthSnapshot<M: ManagedTypeApi> {
    pub user: ManagedAddress<M>,
    pub health_factor_bps: BigUint<M>,
    pub collateral_value: BigUint<M>,
    pub debt_value: BigUint<M>,
    pub timestamp: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum PushPayload<M: ManagedTypeApi> {
    Position(PositionSnapshot<M>),
    Health(HealthSnapshot<M>),
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PushFailureReason {
    ModuleMissing,
    NoCode,
    CallReverted,
}

/// A cache push that did not land. `target` is zero when a module was not registered.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PushFailure<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub payload: PushPayload<M>,
    pub reason: PushFailureReason,
    pub message: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> PushFailure<M> {
    pub fn module_missing(payload: PushPayload<M>) -> Self {
        PushFailure {
            target: ManagedAddress::zero(),
            payload,
            reason: PushFailureReason::ModuleMissing,
            message: ManagedBuffer::new_from_bytes(b"module not registered"),
        }
    }

    pub fn collateral_unavailable(payload: PushPayload<M>) -> Self {
        PushFailure {
            target: ManagedAddress::zero(),
            payload,
            reason: PushFailureReason::ModuleMissing,
            message: ManagedBuffer::new_from_bytes(b"collateral manager not registered"),
        }
    }

    pub fn no_code(target: ManagedAddress<M>, payload: PushPayload<M>) -> Self {
        PushFailure {
            target,
            payload,
            reason: PushFailureReason::NoCode,
            message: ManagedBuffer::new_from_bytes(b"no code at target"),
        }
    }

    pub fn reverted(
        target: ManagedAddress<M>,
        payload: PushPayload<M>,
        message: ManagedBuffer<M>,
    ) -> Self {
        PushFailure {
            target,
            payload,
            reason: PushFailureReason::CallReverted,
            message,
        }
    }
}

/// Lender funds staged for a future match.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Reservation<M: ManagedTypeApi> {
    pub lender: ManagedAddress<M>,
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub amount: BigUint<M>,
    pub active: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ReservationUse<M: ManagedTypeApi> {
    pub used: BigUint<M>,
    pub remaining: BigUint<M>,
}

impl<M: ManagedTypeApi> Reservation<M> {
    pub fn new(
        lender: ManagedAddress<M>,
        asset: EgldOrEsdtTokenIdentifier<M>,
        amount: BigUint<M>,
    ) -> Self {
        Reservation {
            lender,
            asset,
            amount,
            active: true,
        }
    }

    pub fn is_owned_by(&self, lender: &ManagedAddress<M>) -> bool {
        &self.lender == lender
    }

    /// Takes at most `max_amount` out of the reservation.
    ///
    /// When the reservation holds no more than `max_amount` it is drained and
    /// deactivated, otherwise it keeps the difference and stays active.
    pub fn take_up_to(&mut self, max_amount: &BigUint<M>) -> ReservationUse<M> {
        if &self.amount <= max_amount {
            let used = core::mem::replace(&mut self.amount, BigUint::zero());
            self.active = false;
            return ReservationUse {
                used,
                remaining: BigUint::zero(),
            };
        }

        self.amount -= max_amount;
        ReservationUse {
            used: max_amount.clone(),
            remaining: self.amount.clone(),
        }
    }

    /// Drains the whole reservation.
    pub fn take_all(&mut self) -> BigUint<M> {
        self.active = false;
        core::mem::replace(&mut self.amount, BigUint::zero())
    }
}

/// Loan record created once per settlement. Principal, rate and term never change.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LoanOrder<M: ManagedTypeApi> {
    pub id: u64,
    pub intent_hash: IntentHash<M>,
    pub borrower: ManagedAddress<M>,
    pub lender: ManagedAddress<M>,
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    pub principal: BigUint<M>,
    pub rate_bps: u64,
    pub term_days: u64,
    pub created_at: u64,
    pub maturity: u64,
    pub repaid_amount: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LiquidationOutcome<M: ManagedTypeApi> {
    pub seized: BigUint<M>,
    pub reduced: BigUint<M>,
    pub remaining_debt: BigUint<M>,
    pub liquidator: ManagedAddress<M>,
}

/// Liquidation evidence delivered to the liquidation view.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct LiquidationRecord<M: ManagedTypeApi> {
    pub user: ManagedAddress<M>,
    pub collateral_asset: EgldOrEsdtTokenIdentifier<M>,
    pub debt_asset: EgldOrEsdtTokenIdentifier<M>,
    pub seized: BigUint<M>,
    pub reduced: BigUint<M>,
    pub liquidator: ManagedAddress<M>,
    pub bonus: BigUint<M>,
}
