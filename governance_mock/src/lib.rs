#![no_std]

multiversx_sc::imports!();

/// Access control and asset whitelist stand-in.
#[multiversx_sc::contract]
pub trait GovernanceMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(grantRole)]
    fn grant_role(&self, role: ManagedBuffer, account: ManagedAddress) {
        self.has_role(&role, &account).set(true);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: ManagedBuffer, account: ManagedAddress) {
        self.has_role(&role, &account).clear();
    }

    #[endpoint(allowAsset)]
    fn allow_asset(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.allowed_asset(&asset).set(true);
    }

    #[endpoint(disallowAsset)]
    fn disallow_asset(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.allowed_asset(&asset).clear();
    }

    #[view(hasRole)]
    #[storage_mapper("hasRole")]
    fn has_role(&self, role: &ManagedBuffer, account: &ManagedAddress) -> SingleValueMapper<bool>;

    #[view(isAssetAllowed)]
    #[storage_mapper("allowedAsset")]
    fn allowed_asset(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<bool>;
}
