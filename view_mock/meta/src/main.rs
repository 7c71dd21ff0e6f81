fn main() {
    multiversx_sc_meta_lib::cli_main::<view_mock::AbiProvider>();
}
