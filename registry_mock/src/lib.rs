#![no_std]

multiversx_sc::imports!();

/// Module registry stand-in: maps module keys to contract addresses.
#[multiversx_sc::contract]
pub trait RegistryMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setModule)]
    fn set_module(&self, key: ManagedBuffer, address: ManagedAddress) {
        self.module_address(&key).set(&address);
    }

    #[endpoint(removeModule)]
    fn remove_module(&self, key: ManagedBuffer) {
        self.module_address(&key).clear();
    }

    #[view(getModuleAddress)]
    #[storage_mapper("moduleAddress")]
    fn module_address(&self, key: &ManagedBuffer) -> SingleValueMapper<ManagedAddress>;
}
