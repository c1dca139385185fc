//! Chain state, blocks, mempool and UTXO set.

use super::BlockRef;

rpc_namespace! {
    /// Chain state, blocks, mempool and UTXO set.
    namespace "blockchain" => Blockchain, BlockchainBatch {
        /// Hash of the tip of the most-work chain.
        fn get_best_block_hash() -> String => "getbestblockhash";
        /// Block by hash. Verbosity 0 is hex, 1 a JSON object, 2 adds decoded transactions.
        fn get_block(blockhash: &str, verbosity: Option<u8>) -> Value => "getblock";
        /// Chain, sync and softfork state.
        fn get_blockchain_info() -> Value => "getblockchaininfo";
        /// Height of the most-work chain.
        fn get_block_count() -> u64 => "getblockcount";
        /// BIP 157 content filter for a block.
        fn get_block_filter(blockhash: &str, filter_type: Option<&str>) -> Value => "getblockfilter";
        /// Hash of the block at `height` in the best chain.
        fn get_block_hash(height: u64) -> String => "getblockhash";
        /// Block header as JSON, or serialized hex with `verbose = false`.
        fn get_block_header(blockhash: &str, verbose: Option<bool>) -> Value => "getblockheader";
        /// Per-block statistics, optionally limited to the named stats.
        fn get_block_stats(hash_or_height: BlockRef<'_>, stats: Option<&[&str]>) -> Value => "getblockstats";
        /// Known tips in the block tree, including forks.
        fn get_chain_tips() -> Value => "getchaintips";
        /// Transaction rate statistics over a window of blocks.
        fn get_chain_tx_stats(nblocks: Option<u64>, blockhash: Option<&str>) -> Value => "getchaintxstats";
        /// Proof-of-work difficulty as a multiple of the minimum.
        fn get_difficulty() -> f64 => "getdifficulty";
        /// In-mempool ancestors of a transaction.
        fn get_mempool_ancestors(txid: &str, verbose: Option<bool>) -> Value => "getmempoolancestors";
        /// In-mempool descendants of a transaction.
        fn get_mempool_descendants(txid: &str, verbose: Option<bool>) -> Value => "getmempooldescendants";
        /// Mempool data for one transaction.
        fn get_mempool_entry(txid: &str) -> Value => "getmempoolentry";
        /// Mempool size and fee state.
        fn get_mempool_info() -> Value => "getmempoolinfo";
        /// Txids in the mempool, or entries keyed by txid with `verbose`.
        fn get_raw_mempool(verbose: Option<bool>, mempool_sequence: Option<bool>) -> Value => "getrawmempool";
        /// An unspent output, or `null` when spent or unknown.
        fn get_tx_out(txid: &str, n: u32, include_mempool: Option<bool>) -> Value => "gettxout";
        /// Hex merkle proof that the txids are in a block.
        fn get_tx_out_proof(txids: &[&str], blockhash: Option<&str>) -> String => "gettxoutproof";
        /// UTXO set statistics.
        fn get_tx_outset_info(hash_type: Option<&str>) -> Value => "gettxoutsetinfo";
        /// Treat a block as if it arrived before others of equal work.
        fn precious_block(blockhash: &str) -> () => "preciousblock";
        /// Prune up to `height`; returns the height of the last pruned block.
        fn prune_blockchain(height: u64) -> u64 => "pruneblockchain";
        /// Dump the mempool to disk.
        fn save_mempool() -> Value => "savemempool";
        /// Scan the UTXO set for outputs matching descriptors.
        fn scan_tx_outset(action: &str, scan_objects: Option<&Value>) -> Value => "scantxoutset";
        /// Verify the block database.
        fn verify_chain(check_level: Option<u32>, nblocks: Option<u32>) -> bool => "verifychain";
        /// Txids a merkle proof commits to.
        fn verify_tx_out_proof(proof: &str) -> Vec<String> => "verifytxoutproof";
    }
}
