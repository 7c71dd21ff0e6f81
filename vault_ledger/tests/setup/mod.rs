use crate::constants::*;

use common_constants::{
    MODULE_ACCESS_CONTROL, MODULE_ASSET_WHITELIST, MODULE_COLLATERAL_MANAGER, MODULE_FEE_ROUTER,
    MODULE_HEALTH_VIEW, MODULE_LIQUIDATION_VIEW, MODULE_PRICE_ORACLE, MODULE_VAULT_CORE,
    MODULE_VIEW, ROLE_LIQUIDATOR, ROLE_ORDER_CREATOR,
};
use multiversx_sc::{
    imports::{MultiValue2, OptionalValue},
    types::{
        BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedBuffer, ManagedByteArray,
        ManagedVec, ReturnsNewManagedAddress, ReturnsResult, TestEsdtTransfer,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress, TestTokenIdentifier},
    ScenarioTxRun, ScenarioWorld,
};

use vault_ledger::*;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(VAULT_LEDGER_PATH, vault_ledger::ContractBuilder);
    blockchain.register_contract(REGISTRY_PATH, registry_mock::ContractBuilder);
    blockchain.register_contract(GOVERNANCE_PATH, governance_mock::ContractBuilder);
    blockchain.register_contract(ORACLE_PATH, oracle_mock::ContractBuilder);
    blockchain.register_contract(COLLATERAL_PATH, collateral_mock::ContractBuilder);
    blockchain.register_contract(VIEW_PATH, view_mock::ContractBuilder);
    blockchain.register_contract(FEE_ROUTER_PATH, fee_router_mock::ContractBuilder);

    blockchain
}

pub fn asset(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn intent_hash(seed: u8) -> IntentHash<StaticApi> {
    ManagedByteArray::new_from_bytes(&[seed; 32])
}

pub fn module_key(key: &[u8]) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::new_from_bytes(key)
}

pub struct VaultLedgerTestState {
    pub world: ScenarioWorld,
    pub vault_ledger: ManagedAddress<StaticApi>,
    pub registry: ManagedAddress<StaticApi>,
    pub governance: ManagedAddress<StaticApi>,
    pub oracle: ManagedAddress<StaticApi>,
    pub collateral_manager: ManagedAddress<StaticApi>,
    pub position_view: ManagedAddress<StaticApi>,
    pub health_view: ManagedAddress<StaticApi>,
    pub liquidation_view: ManagedAddress<StaticApi>,
    pub fee_router: ManagedAddress<StaticApi>,
}

impl VaultLedgerTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(1_000);

        let registry = deploy_registry(&mut world);
        let governance = deploy_governance(&mut world);
        let oracle = deploy_oracle(&mut world);
        let collateral_manager = deploy_collateral_manager(&mut world);
        let position_view = deploy_view(&mut world);
        let health_view = deploy_view(&mut world);
        let liquidation_view = deploy_view(&mut world);
        let fee_router = deploy_fee_router(&mut world, PLATFORM_FEE_BPS, ECOSYSTEM_FEE_BPS);
        let vault_ledger = deploy_vault_ledger(
            &mut world,
            &registry,
            OptionalValue::Some(MIN_HEALTH_FACTOR_BPS),
        );

        let mut state = Self {
            world,
            vault_ledger,
            registry,
            governance,
            oracle,
            collateral_manager,
            position_view,
            health_view,
            liquidation_view,
            fee_router,
        };

        state.register_module(MODULE_VAULT_CORE, &VAULT_CORE_ADDRESS.to_managed_address());
        state.register_module(MODULE_ACCESS_CONTROL, &state.governance.clone());
        state.register_module(MODULE_ASSET_WHITELIST, &state.governance.clone());
        state.register_module(MODULE_PRICE_ORACLE, &state.oracle.clone());
        state.register_module(MODULE_COLLATERAL_MANAGER, &state.collateral_manager.clone());
        state.register_module(MODULE_VIEW, &state.position_view.clone());
        state.register_module(MODULE_HEALTH_VIEW, &state.health_view.clone());
        state.register_module(MODULE_LIQUIDATION_VIEW, &state.liquidation_view.clone());
        state.register_module(MODULE_FEE_ROUTER, &state.fee_router.clone());

        state.grant_role(ROLE_ORDER_CREATOR, VAULT_CORE_ADDRESS);
        state.grant_role(ROLE_LIQUIDATOR, LIQUIDATOR_ADDRESS);

        state.allow_asset(USDC_TOKEN);
        state.allow_asset(EGLD_TOKEN);

        state.set_price(USDC_TOKEN, 1, 0);
        state.set_price(EGLD_TOKEN, 1, 0);

        state
    }

    // Wiring

    pub fn register_module(&mut self, key: &[u8], address: &ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.registry)
            .typed(proxy_registry::ModuleRegistryProxy)
            .set_module(module_key(key), address)
            .run();
    }

    pub fn unregister_module(&mut self, key: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.registry)
            .typed(proxy_registry::ModuleRegistryProxy)
            .remove_module(module_key(key))
            .run();
    }

    pub fn grant_role(&mut self, role: &[u8], account: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.governance)
            .typed(proxy_governance::GovernanceProxy)
            .grant_role(module_key(role), account)
            .run();
    }

    pub fn revoke_role(&mut self, role: &[u8], account: TestAddress) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.governance)
            .typed(proxy_governance::GovernanceProxy)
            .revoke_role(module_key(role), account)
            .run();
    }

    pub fn allow_asset(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.governance)
            .typed(proxy_governance::GovernanceProxy)
            .allow_asset(asset(token))
            .run();
    }

    pub fn set_price(&mut self, token: TestTokenIdentifier, price: u64, decimals: u8) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle)
            .typed(proxy_oracle::PriceOracleProxy)
            .set_price(asset(token), BigUint::from(price), decimals)
            .run();
    }

    pub fn set_price_with_timestamp(
        &mut self,
        token: TestTokenIdentifier,
        price: u64,
        decimals: u8,
        timestamp: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle)
            .typed(proxy_oracle::PriceOracleProxy)
            .set_price_with_timestamp(asset(token), BigUint::from(price), decimals, timestamp)
            .run();
    }

    pub fn clear_price(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle)
            .typed(proxy_oracle::PriceOracleProxy)
            .clear_price(asset(token))
            .run();
    }

    pub fn set_view_failing(&mut self, view: &ManagedAddress<StaticApi>, failing: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(view)
            .typed(proxy_view::CacheViewProxy)
            .set_failing(failing)
            .run();
    }

    pub fn set_collateral_reentry(&mut self) {
        let vault_ledger = self.vault_ledger.clone();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.collateral_manager)
            .typed(proxy_collateral::CollateralManagerProxy)
            .set_reentry_target(vault_ledger)
            .run();
    }

    pub fn set_max_price_age(&mut self, max_price_age: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .set_max_price_age(max_price_age)
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .pause()
            .run();
    }

    // Collateral

    pub fn deposit_collateral(&mut self, user: TestAddress, token: TestTokenIdentifier, amount: u64) {
        self.world
            .tx()
            .from(user)
            .to(&self.collateral_manager)
            .typed(proxy_collateral::CollateralManagerProxy)
            .deposit_collateral(user, asset(token), BigUint::from(amount))
            .payment(TestEsdtTransfer(token, 0, amount))
            .run();
    }

    // Ledger

    pub fn borrow(
        &mut self,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
    ) -> LedgerUpdate<StaticApi> {
        self.world
            .tx()
            .from(VAULT_CORE_ADDRESS)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .borrow(user, asset(token), BigUint::from(amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_error(
        &mut self,
        caller: TestAddress,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .borrow(user, asset(token), BigUint::from(amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay(
        &mut self,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
    ) -> LedgerUpdate<StaticApi> {
        self.world
            .tx()
            .from(VAULT_CORE_ADDRESS)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .repay(user, asset(token), BigUint::from(amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn repay_error(
        &mut self,
        caller: TestAddress,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .repay(user, asset(token), BigUint::from(amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn force_reduce_debt(
        &mut self,
        caller: TestAddress,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
    ) -> LedgerUpdate<StaticApi> {
        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .force_reduce_debt(user, asset(token), BigUint::from(amount))
            .returns(ReturnsResult)
            .run()
    }

    pub fn force_reduce_debt_error(
        &mut self,
        caller: TestAddress,
        user: TestAddress,
        token: TestTokenIdentifier,
        amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .force_reduce_debt(user, asset(token), BigUint::from(amount))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Liquidation

    #[allow(clippy::too_many_arguments)]
    pub fn liquidate(
        &mut self,
        caller: TestAddress,
        user: TestAddress,
        collateral: TestTokenIdentifier,
        debt: TestTokenIdentifier,
        seize_amount: u64,
        reduce_amount: u64,
        bonus: u64,
        opt_liquidator: Option<TestAddress>,
    ) -> LiquidationOutcome<StaticApi> {
        let opt_liquidator = match opt_liquidator {
            Some(liquidator) => OptionalValue::Some(liquidator.to_managed_address()),
            None => OptionalValue::None,
        };

        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .liquidate(
                user,
                asset(collateral),
                asset(debt),
                BigUint::from(seize_amount),
                BigUint::from(reduce_amount),
                BigUint::from(bonus),
                opt_liquidator,
            )
            .returns(ReturnsResult)
            .run()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn liquidate_error(
        &mut self,
        caller: TestAddress,
        user: TestAddress,
        collateral: TestTokenIdentifier,
        debt: TestTokenIdentifier,
        seize_amount: u64,
        reduce_amount: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .liquidate(
                user,
                asset(collateral),
                asset(debt),
                BigUint::from(seize_amount),
                BigUint::from(reduce_amount),
                BigUint::zero(),
                OptionalValue::<ManagedAddress<StaticApi>>::None,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Settlement

    pub fn reserve(&mut self, seed: u8, lender: TestAddress, token: TestTokenIdentifier, amount: u64) {
        self.world
            .tx()
            .from(VAULT_CORE_ADDRESS)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .reserve(lender, asset(token), BigUint::from(amount), intent_hash(seed))
            .payment(TestEsdtTransfer(token, 0, amount))
            .run();
    }

    pub fn reserve_error(
        &mut self,
        caller: TestAddress,
        seed: u8,
        token: TestTokenIdentifier,
        amount: u64,
        paid: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .reserve(LENDER_ADDRESS, asset(token), BigUint::from(amount), intent_hash(seed))
            .payment(TestEsdtTransfer(token, 0, paid))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn cancel_reservation(
        &mut self,
        caller: TestAddress,
        seed: u8,
    ) -> MultiValue2<EgldOrEsdtTokenIdentifier<StaticApi>, BigUint<StaticApi>> {
        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .cancel_reservation(intent_hash(seed))
            .returns(ReturnsResult)
            .run()
    }

    pub fn cancel_reservation_error(&mut self, caller: TestAddress, seed: u8, error_message: &[u8]) {
        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .cancel_reservation(intent_hash(seed))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn finalize_full(
        &mut self,
        seed: u8,
        token: TestTokenIdentifier,
        amount: u64,
        collateral: Option<(TestTokenIdentifier, u64)>,
    ) -> u64 {
        let call = self
            .world
            .tx()
            .from(VAULT_CORE_ADDRESS)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .finalize_atomic_full(
                intent_hash(seed),
                BORROWER_ADDRESS,
                LENDER_ADDRESS,
                asset(token),
                BigUint::from(amount),
                RATE_BPS,
                TERM_DAYS,
            );

        match collateral {
            Some((collateral_token, collateral_amount)) => call
                .payment(TestEsdtTransfer(collateral_token, 0, collateral_amount))
                .returns(ReturnsResult)
                .run(),
            None => call.returns(ReturnsResult).run(),
        }
    }

    pub fn finalize_direct(&mut self, seed: u8, token: TestTokenIdentifier, amount: u64) -> u64 {
        self.world
            .tx()
            .from(VAULT_CORE_ADDRESS)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .finalize_atomic(
                intent_hash(seed),
                BORROWER_ADDRESS,
                LENDER_ADDRESS,
                asset(token),
                BigUint::from(amount),
                RATE_BPS,
                TERM_DAYS,
            )
            .returns(ReturnsResult)
            .run()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn finalize_full_error(
        &mut self,
        caller: TestAddress,
        seed: u8,
        token: TestTokenIdentifier,
        amount: u64,
        rate_bps: u64,
        term_days: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(caller)
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .finalize_atomic_full(
                intent_hash(seed),
                BORROWER_ADDRESS,
                LENDER_ADDRESS,
                asset(token),
                BigUint::from(amount),
                rate_bps,
                term_days,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Views

    pub fn debt(&mut self, user: TestAddress, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_debt(user, asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_debt_by_asset(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_total_debt_by_asset(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_debt_value(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_total_debt_value()
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_total_debt_value(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_user_total_debt_value(user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn user_debt_assets(
        &mut self,
        user: TestAddress,
    ) -> ManagedVec<StaticApi, EgldOrEsdtTokenIdentifier<StaticApi>> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_user_debt_assets(user)
            .returns(ReturnsResult)
            .run()
            .to_vec()
    }

    pub fn health_factor(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_health_factor(user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn ltv(&mut self, user: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_ltv(user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_liquidatable(&mut self, user: TestAddress) -> bool {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .is_liquidatable(user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn health_factor_error(&mut self, user: TestAddress, error_message: &[u8]) {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_health_factor(user)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn is_liquidatable_error(&mut self, user: TestAddress, error_message: &[u8]) {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .is_liquidatable(user)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn deploy_another_vault_ledger(
        &mut self,
        min_health_factor_bps: OptionalValue<u64>,
    ) -> ManagedAddress<StaticApi> {
        let registry = self.registry.clone();
        deploy_vault_ledger(&mut self.world, &registry, min_health_factor_bps)
    }

    pub fn min_health_factor_of(&mut self, vault_ledger: &ManagedAddress<StaticApi>) -> u64 {
        self.world
            .query()
            .to(vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_min_health_factor()
            .returns(ReturnsResult)
            .run()
    }

    pub fn reservation(&mut self, seed: u8) -> Option<Reservation<StaticApi>> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_reservation(intent_hash(seed))
            .returns(ReturnsResult)
            .run()
            .into_option()
    }

    pub fn loan_order(&mut self, order_id: u64) -> Option<LoanOrder<StaticApi>> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_loan_order(order_id)
            .returns(ReturnsResult)
            .run()
            .into_option()
    }

    pub fn push_failure_count(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_push_failure_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_push_failure(&mut self) -> Option<PushFailure<StaticApi>> {
        self.world
            .query()
            .to(&self.vault_ledger)
            .typed(proxy_vault_ledger::VaultLedgerProxy)
            .get_last_push_failure()
            .returns(ReturnsResult)
            .run()
            .into_option()
    }

    pub fn view_push_count(&mut self, view: &ManagedAddress<StaticApi>) -> u64 {
        self.world
            .query()
            .to(view)
            .typed(proxy_view::CacheViewProxy)
            .get_push_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_position(
        &mut self,
        user: TestAddress,
        token: TestTokenIdentifier,
    ) -> PositionSnapshot<StaticApi> {
        let view = self.position_view.clone();
        self.world
            .query()
            .to(&view)
            .typed(proxy_view::CacheViewProxy)
            .get_last_position(user, asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_health(&mut self, user: TestAddress) -> HealthSnapshot<StaticApi> {
        let view = self.health_view.clone();
        self.world
            .query()
            .to(&view)
            .typed(proxy_view::CacheViewProxy)
            .get_last_health(user)
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidation_event_count(&mut self) -> usize {
        let view = self.liquidation_view.clone();
        self.world
            .query()
            .to(&view)
            .typed(proxy_view::CacheViewProxy)
            .get_liquidation_event_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn last_liquidation_event(&mut self) -> LiquidationRecord<StaticApi> {
        let view = self.liquidation_view.clone();
        self.world
            .query()
            .to(&view)
            .typed(proxy_view::CacheViewProxy)
            .get_last_liquidation_event()
            .returns(ReturnsResult)
            .run()
    }

    pub fn collateral(&mut self, user: TestAddress, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        let collateral_manager = self.collateral_manager.clone();
        self.world
            .query()
            .to(&collateral_manager)
            .typed(proxy_collateral::CollateralManagerProxy)
            .get_collateral(user, asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn distributed_fees(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        let fee_router = self.fee_router.clone();
        self.world
            .query()
            .to(&fee_router)
            .typed(proxy_fee_router::FeeRouterProxy)
            .get_distributed(asset(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_balance(&mut self, account: TestAddress, token: TestTokenIdentifier, amount: u64) {
        self.world
            .check_account(account)
            .esdt_balance(token, BigUint::<StaticApi>::from(amount));
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(LIQUIDATOR_ADDRESS).nonce(1);
    world.account(LENDER_ADDRESS).nonce(1);

    for account in [VAULT_CORE_ADDRESS, BORROWER_ADDRESS, STRANGER_ADDRESS] {
        world
            .account(account)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, BigUint::<StaticApi>::from(INITIAL_BALANCE))
            .esdt_balance(EGLD_TOKEN, BigUint::<StaticApi>::from(INITIAL_BALANCE))
            .esdt_balance(UNLISTED_TOKEN, BigUint::<StaticApi>::from(INITIAL_BALANCE));
    }
}

pub fn deploy_registry(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_registry::ModuleRegistryProxy)
        .init()
        .code(REGISTRY_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_governance(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_governance::GovernanceProxy)
        .init()
        .code(GOVERNANCE_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_oracle(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_oracle::PriceOracleProxy)
        .init()
        .code(ORACLE_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_collateral_manager(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_collateral::CollateralManagerProxy)
        .init()
        .code(COLLATERAL_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_view(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_view::CacheViewProxy)
        .init()
        .code(VIEW_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_fee_router(
    world: &mut ScenarioWorld,
    platform_fee_bps: u64,
    ecosystem_fee_bps: u64,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_fee_router::FeeRouterProxy)
        .init(platform_fee_bps, ecosystem_fee_bps)
        .code(FEE_ROUTER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn deploy_vault_ledger(
    world: &mut ScenarioWorld,
    registry: &ManagedAddress<StaticApi>,
    min_health_factor_bps: OptionalValue<u64>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_vault_ledger::VaultLedgerProxy)
        .init(registry, min_health_factor_bps)
        .code(VAULT_LEDGER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}
