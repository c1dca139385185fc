//! Regtest block generation.

rpc_namespace! {
    /// Block generation (regtest).
    namespace "generating" => Generating, GeneratingBatch {
        /// Mine one block with exactly the given transactions.
        fn generate_block(output: &str, transactions: &[&str]) -> Value => "generateblock";
        /// Mine blocks paying to an address; returns their hashes.
        fn generate_to_address(nblocks: u32, address: &str, max_tries: Option<u64>) -> Vec<String> => "generatetoaddress";
        /// Mine blocks paying to a descriptor; returns their hashes.
        fn generate_to_descriptor(num_blocks: u32, descriptor: &str, max_tries: Option<u64>) -> Vec<String> => "generatetodescriptor";
    }
}
