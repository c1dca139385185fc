//! Mining templates, submission and prioritisation.

rpc_namespace! {
    /// Mining templates, submission and prioritisation.
    namespace "mining" => Mining, MiningBatch {
        /// Block template for external miners (BIP 22/23).
        fn get_block_template(template_request: Option<&Value>) -> Value => "getblocktemplate";
        /// Mining-related chain state.
        fn get_mining_info() -> Value => "getmininginfo";
        /// Estimated network hashes per second.
        fn get_network_hash_ps(nblocks: Option<i64>, height: Option<i64>) -> f64 => "getnetworkhashps";
        /// Adjust a mempool transaction's effective fee in satoshis.
        fn prioritise_transaction(txid: &str, fee_delta: i64) -> bool
            => "prioritisetransaction" [txid, None::<u8>, fee_delta];
        /// Submit a serialized block; `null` on acceptance, else a rejection reason.
        fn submit_block(hex_data: &str, dummy: Option<&str>) -> Value => "submitblock";
        /// Submit a serialized block header.
        fn submit_header(hex_data: &str) -> () => "submitheader";
    }
}
