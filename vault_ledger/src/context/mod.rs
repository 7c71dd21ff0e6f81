use common_errors::ERROR_MODULE_NOT_REGISTERED;
use common_structs::PriceFeed;
use multiversx_sc::api::{ErrorApi, ErrorApiImpl};

multiversx_sc::imports!();

/// Per-transaction view of the protocol wiring.
///
/// Built once at the start of an endpoint and threaded through the flow, so
/// every module key is looked up in the registry at most once per transaction.
pub struct ModuleContext<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,

    pub registry: ManagedAddress<C::Api>,
    pub modules: ManagedMapEncoded<C::Api, ManagedBuffer<C::Api>, ManagedAddress<C::Api>>,
    pub prices_cache: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, PriceFeed<C::Api>>,
    pub min_health_factor_bps: u64,
    pub max_price_age: u64,
    pub timestamp: u64,
}

impl<'a, C> ModuleContext<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        ModuleContext {
            sc_ref,
            registry: sc_ref.registry_address().get(),
            modules: ManagedMapEncoded::new(),
            prices_cache: ManagedMapEncoded::new(),
            min_health_factor_bps: sc_ref.min_health_factor_bps().get(),
            max_price_age: sc_ref.max_price_age().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
        }
    }

    /// Resolves a mandatory collaborator, aborting the transaction when it is not registered.
    pub fn resolve(&mut self, key: &[u8]) -> ManagedAddress<C::Api> {
        match self.resolve_optional(key) {
            Some(address) => address,
            None => C::Api::error_api_impl().signal_error(ERROR_MODULE_NOT_REGISTERED),
        }
    }

    /// Resolves a collaborator that the caller can live without.
    pub fn resolve_optional(&mut self, key: &[u8]) -> Option<ManagedAddress<C::Api>> {
        let key = ManagedBuffer::new_from_bytes(key);
        if self.modules.contains(&key) {
            return Some(self.modules.get(&key));
        }

        let mapper = self.sc_ref.registered_module(self.registry.clone(), &key);
        if mapper.is_empty() {
            return None;
        }

        let address = mapper.get();
        if address.is_zero() {
            return None;
        }

        self.modules.put(&key, &address);
        Some(address)
    }

    pub fn get_cached_price(
        &self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> Option<PriceFeed<C::Api>> {
        if self.prices_cache.contains(asset) {
            return Some(self.prices_cache.get(asset));
        }

        None
    }

    pub fn cache_price(
        &mut self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
        feed: &PriceFeed<C::Api>,
    ) {
        self.prices_cache.put(asset, feed);
    }
}
