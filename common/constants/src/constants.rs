#![no_std]

pub const BPS: u64 = 10_000; // 100%

/// Default minimum health factor accepted by the risk checks (110%)
pub const DEFAULT_MIN_HEALTH_FACTOR_BPS: u64 = 11_000;
/// Lowest configurable minimum health factor (100%)
pub const MIN_HEALTH_FACTOR_FLOOR_BPS: u64 = 10_000;

pub const SECONDS_PER_DAY: u64 = 86_400;

pub const MIN_TERM_DAYS: u64 = 1;
pub const MAX_TERM_DAYS: u64 = 1_825;
pub const MAX_RATE_BPS: u64 = 10_000;

/// Feeds quoting with more decimals than this are rejected
pub const MAX_PRICE_DECIMALS: u8 = 36;

pub const INTENT_HASH_LEN: usize = 32;

// Module registry keys
pub const MODULE_VAULT_CORE: &[u8] = b"VAULT_CORE";
pub const MODULE_COLLATERAL_MANAGER: &[u8] = b"COLLATERAL_MANAGER";
pub const MODULE_PRICE_ORACLE: &[u8] = b"PRICE_ORACLE";
pub const MODULE_VIEW: &[u8] = b"VIEW";
pub const MODULE_HEALTH_VIEW: &[u8] = b"HEALTH_VIEW";
pub const MODULE_LIQUIDATION_VIEW: &[u8] = b"LIQUIDATION_VIEW";
pub const MODULE_FEE_ROUTER: &[u8] = b"FEE_ROUTER";
pub const MODULE_ACCESS_CONTROL: &[u8] = b"ACCESS_CONTROL";
pub const MODULE_ASSET_WHITELIST: &[u8] = b"ASSET_WHITELIST";

// Capability keys checked against the access control module
pub const ROLE_LIQUIDATOR: &[u8] = b"LIQUIDATOR";
pub const ROLE_ORDER_CREATOR: &[u8] = b"ORDER_CREATOR";

/// Gas forwarded to each best-effort cache push
pub const DEFAULT_PUSH_GAS_LIMIT: u64 = 1_000_000;
/// Gas reserved for the callback of each best-effort cache push
pub const DEFAULT_PUSH_CALLBACK_GAS_LIMIT: u64 = 500_000;
pub const MIN_PUSH_GAS_LIMIT: u64 = 100_000;
