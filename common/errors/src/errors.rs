#![no_std]

// Validation
pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset identifier.";

pub static ERROR_ASSET_NOT_SUPPORTED: &[u8] = b"Asset not supported.";

pub static ERROR_INVALID_TERM: &[u8] = b"Loan term out of range.";

pub static ERROR_INVALID_RATE: &[u8] = b"Interest rate out of range.";

pub static ERROR_PAYMENT_MISMATCH: &[u8] = b"Payment does not match the declared asset and amount.";

pub static ERROR_INVALID_MIN_HEALTH_FACTOR: &[u8] = b"Minimum health factor below the allowed floor.";

pub static ERROR_INVALID_GAS_LIMIT: &[u8] = b"Gas limit below the allowed minimum.";

pub static ERROR_INVALID_REGISTRY: &[u8] = b"Registry address is not a smart contract.";

// Authorization
pub static ERROR_NOT_VAULT_CORE: &[u8] = b"Caller is not the orchestration entry point.";

pub static ERROR_MISSING_LIQUIDATOR_ROLE: &[u8] = b"Caller is missing the liquidator capability.";

pub static ERROR_MISSING_ORDER_CREATOR_ROLE: &[u8] =
    b"Caller is missing the order creation capability.";

pub static ERROR_REENTRANT_CALL: &[u8] = b"Reentrant call.";

// Module resolution
pub static ERROR_MODULE_NOT_REGISTERED: &[u8] = b"Module not registered.";

// Ledger
pub static ERROR_OVERPAY: &[u8] = b"Repay amount exceeds outstanding debt.";

// Collateral
pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Not enough collateral to seize.";

pub static ERROR_COLLATERAL_NOT_RECEIVED: &[u8] = b"Seized collateral was not received.";

// Reservations
pub static ERROR_ALREADY_RESERVED: &[u8] = b"Intent hash already has an active reservation.";

pub static ERROR_RESERVATION_NOT_FOUND: &[u8] = b"No active reservation for intent hash.";

pub static ERROR_NOT_RESERVATION_LENDER: &[u8] = b"Caller is not the reservation lender.";

pub static ERROR_RESERVATION_LENDER_MISMATCH: &[u8] = b"Reservation belongs to a different lender.";

pub static ERROR_RESERVATION_ASSET_MISMATCH: &[u8] = b"Reservation asset does not match.";

pub static ERROR_INSUFFICIENT_RESERVATION: &[u8] = b"Reservation does not cover the settlement amount.";

// Settlement
pub static ERROR_FEES_EXCEED_AMOUNT: &[u8] = b"Fee cuts exceed the settlement amount.";

pub static ERROR_INVALID_COLLATERAL_PAYMENT: &[u8] = b"Collateral payment must be a single fungible transfer.";

// Mocks
pub static ERROR_PUSH_REJECTED: &[u8] = b"Push rejected by view.";
