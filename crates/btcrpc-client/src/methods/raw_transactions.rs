//! Raw transactions and PSBTs.

rpc_namespace! {
    /// Raw transactions and PSBTs.
    namespace "raw_transactions" => RawTransactions, RawTransactionsBatch {
        /// Next steps and fee estimate for a PSBT.
        fn analyze_psbt(psbt: &str) -> Value => "analyzepsbt";
        /// Merge PSBTs for the same transaction.
        fn combine_psbt(psbts: &[&str]) -> String => "combinepsbt";
        /// Merge partially signed raw transactions.
        fn combine_raw_transaction(txs: &[&str]) -> String => "combinerawtransaction";
        /// Convert a raw transaction to a PSBT.
        fn convert_to_psbt(hexstring: &str, permit_sig_data: Option<bool>, is_witness: Option<bool>) -> String => "converttopsbt";
        /// Unsigned PSBT spending `inputs` to `outputs`.
        fn create_psbt(inputs: &Value, outputs: &Value, locktime: Option<u32>, replaceable: Option<bool>) -> String => "createpsbt";
        /// Unsigned raw transaction spending `inputs` to `outputs`.
        fn create_raw_transaction(inputs: &Value, outputs: &Value, locktime: Option<u32>, replaceable: Option<bool>) -> String => "createrawtransaction";
        /// Decoded PSBT.
        fn decode_psbt(psbt: &str) -> Value => "decodepsbt";
        /// Decoded raw transaction.
        fn decode_raw_transaction(hexstring: &str, is_witness: Option<bool>) -> Value => "decoderawtransaction";
        /// Decoded script.
        fn decode_script(hexstring: &str) -> Value => "decodescript";
        /// Finalize a PSBT, extracting the network transaction when complete.
        fn finalize_psbt(psbt: &str, extract: Option<bool>) -> Value => "finalizepsbt";
        /// Add wallet inputs and change to a raw transaction.
        fn fund_raw_transaction(hexstring: &str, options: Option<&Value>, is_witness: Option<bool>) -> Value => "fundrawtransaction";
        /// Raw transaction by txid, hex or decoded with `verbose`.
        fn get_raw_transaction(txid: &str, verbose: Option<bool>, blockhash: Option<&str>) -> Value => "getrawtransaction";
        /// Join distinct PSBTs into one with all their inputs and outputs.
        fn join_psbts(psbts: &[&str]) -> String => "joinpsbts";
        /// Broadcast a signed transaction; returns its txid.
        fn send_raw_transaction(hexstring: &str, max_fee_rate: Option<f64>) -> String => "sendrawtransaction";
        /// Sign a raw transaction with the given WIF keys.
        fn sign_raw_transaction_with_key(hexstring: &str, private_keys: &[&str], prev_txs: Option<&Value>, sighash_type: Option<&str>) -> Value => "signrawtransactionwithkey";
        /// Whether raw transactions would be accepted to the mempool.
        fn test_mempool_accept(raw_txs: &[&str], max_fee_rate: Option<f64>) -> Value => "testmempoolaccept";
        /// Fill PSBT inputs with UTXO data from the UTXO set or descriptors.
        fn utxo_update_psbt(psbt: &str, descriptors: Option<&Value>) -> String => "utxoupdatepsbt";
    }
}
