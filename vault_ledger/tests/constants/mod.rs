use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const SECONDS_PER_DAY: u64 = 86_400;

pub const MIN_HEALTH_FACTOR_BPS: u64 = 11_000; // 110%
pub const PLATFORM_FEE_BPS: u64 = 100; // 1%
pub const ECOSYSTEM_FEE_BPS: u64 = 50; // 0.5%

pub const RATE_BPS: u64 = 500; // 5%
pub const TERM_DAYS: u64 = 30;

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const EGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const UNLISTED_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("UNLISTED-abcdef");

pub const INITIAL_BALANCE: u64 = 1_000_000;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const VAULT_CORE_ADDRESS: TestAddress = TestAddress::new("vault-core");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LENDER_ADDRESS: TestAddress = TestAddress::new("lender");
pub const STRANGER_ADDRESS: TestAddress = TestAddress::new("stranger");

pub const VAULT_LEDGER_PATH: MxscPath = MxscPath::new("output/vault_ledger.mxsc.json");
pub const REGISTRY_PATH: MxscPath = MxscPath::new("../registry_mock/output/registry-mock.mxsc.json");
pub const GOVERNANCE_PATH: MxscPath =
    MxscPath::new("../governance_mock/output/governance-mock.mxsc.json");
pub const ORACLE_PATH: MxscPath = MxscPath::new("../oracle_mock/output/oracle-mock.mxsc.json");
pub const COLLATERAL_PATH: MxscPath =
    MxscPath::new("../collateral_mock/output/collateral-mock.mxsc.json");
pub const VIEW_PATH: MxscPath = MxscPath::new("../view_mock/output/view-mock.mxsc.json");
pub const FEE_ROUTER_PATH: MxscPath =
    MxscPath::new("../fee_router_mock/output/fee-router-mock.mxsc.json");
