#![no_std]

pub mod proxy_collateral;
pub mod proxy_fee_router;
pub mod proxy_governance;
pub mod proxy_oracle;
pub mod proxy_registry;
pub mod proxy_vault_ledger;
pub mod proxy_view;
