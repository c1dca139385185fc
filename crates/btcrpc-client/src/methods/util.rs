//! Stateless utilities.

rpc_namespace! {
    /// Stateless utilities.
    namespace "util" => Util, UtilBatch {
        /// Multisig address and redeem script for `n_required` of `keys`.
        fn create_multisig(n_required: u32, keys: &[&str], address_type: Option<&str>) -> Value => "createmultisig";
        /// Addresses a descriptor expands to.
        fn derive_addresses(descriptor: &str, range: Option<&Value>) -> Vec<String> => "deriveaddresses";
        /// Fee rate estimate for confirmation within `conf_target` blocks.
        fn estimate_smart_fee(conf_target: u32, estimate_mode: Option<&str>) -> Value => "estimatesmartfee";
        /// Analysis of a descriptor, with its checksum.
        fn get_descriptor_info(descriptor: &str) -> Value => "getdescriptorinfo";
        /// Sync state of the optional indexes.
        fn get_index_info(index_name: Option<&str>) -> Value => "getindexinfo";
        /// Sign a message with a WIF private key.
        fn sign_message_with_priv_key(priv_key: &str, message: &str) -> String => "signmessagewithprivkey";
        /// Whether an address is valid, with details.
        fn validate_address(address: &str) -> Value => "validateaddress";
        /// Check a signed message.
        fn verify_message(address: &str, signature: &str, message: &str) -> bool => "verifymessage";
    }
}
