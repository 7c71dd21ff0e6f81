fn main() {
    multiversx_sc_meta_lib::cli_main::<fee_router_mock::AbiProvider>();
}
