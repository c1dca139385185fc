//! Wallet methods.
//!
//! On a multi-wallet node these go to the wallet endpoint selected in the
//! connection settings.

rpc_namespace! {
    /// Wallet methods.
    namespace "wallet" => Wallet, WalletBatch {
        /// Mark an unconfirmed wallet transaction as abandoned.
        fn abandon_transaction(txid: &str) -> () => "abandontransaction";
        /// Stop a running rescan.
        fn abort_rescan() -> bool => "abortrescan";
        /// Add a multisig address to the wallet.
        fn add_multisig_address(n_required: u32, keys: &[&str], label: Option<&str>, address_type: Option<&str>) -> Value => "addmultisigaddress";
        /// Copy the wallet file to `destination`.
        fn backup_wallet(destination: &str) -> () => "backupwallet";
        /// Replace a transaction with a higher-fee version (BIP 125).
        fn bump_fee(txid: &str, options: Option<&Value>) -> Value => "bumpfee";
        /// Create and load a wallet.
        fn create_wallet(
            wallet_name: &str,
            disable_private_keys: Option<bool>,
            blank: Option<bool>,
            passphrase: Option<&str>,
            avoid_reuse: Option<bool>,
            descriptors: Option<bool>,
            load_on_startup: Option<bool>,
        ) -> Value => "createwallet";
        /// WIF private key of an address.
        fn dump_priv_key(address: &str) -> String => "dumpprivkey";
        /// Write all wallet keys to a file.
        fn dump_wallet(filename: &str) -> Value => "dumpwallet";
        /// Encrypt the wallet with a passphrase.
        fn encrypt_wallet(passphrase: &str) -> String => "encryptwallet";
        /// Addresses assigned a label.
        fn get_addresses_by_label(label: &str) -> Value => "getaddressesbylabel";
        /// Wallet information about an address.
        fn get_address_info(address: &str) -> Value => "getaddressinfo";
        /// Trusted balance. `dummy` must be unset or `"*"`.
        fn get_balance(dummy: Option<&str>, min_conf: Option<u32>, include_watch_only: Option<bool>, avoid_reuse: Option<bool>) -> f64 => "getbalance";
        /// Balances by trust state.
        fn get_balances() -> Value => "getbalances";
        /// New receiving address.
        fn get_new_address(label: Option<&str>, address_type: Option<&str>) -> String => "getnewaddress";
        /// New change address.
        fn get_raw_change_address(address_type: Option<&str>) -> String => "getrawchangeaddress";
        /// Total received by an address.
        fn get_received_by_address(address: &str, min_conf: Option<u32>) -> f64 => "getreceivedbyaddress";
        /// Total received by addresses with a label.
        fn get_received_by_label(label: &str, min_conf: Option<u32>) -> f64 => "getreceivedbylabel";
        /// Wallet transaction details.
        fn get_transaction(txid: &str, include_watch_only: Option<bool>, verbose: Option<bool>) -> Value => "gettransaction";
        /// Unconfirmed balance.
        fn get_unconfirmed_balance() -> f64 => "getunconfirmedbalance";
        /// Wallet state.
        fn get_wallet_info() -> Value => "getwalletinfo";
        /// Watch an address or script.
        fn import_address(address: &str, label: Option<&str>, rescan: Option<bool>, p2sh: Option<bool>) -> () => "importaddress";
        /// Import descriptors into a descriptor wallet.
        fn import_descriptors(requests: &Value) -> Value => "importdescriptors";
        /// Import addresses, scripts and keys in one call.
        fn import_multi(requests: &Value, options: Option<&Value>) -> Value => "importmulti";
        /// Import a WIF private key.
        fn import_priv_key(priv_key: &str, label: Option<&str>, rescan: Option<bool>) -> () => "importprivkey";
        /// Import funds without a rescan, from a transaction and its proof.
        fn import_pruned_funds(raw_transaction: &str, tx_out_proof: &str) -> () => "importprunedfunds";
        /// Watch a public key.
        fn import_pub_key(pub_key: &str, label: Option<&str>, rescan: Option<bool>) -> () => "importpubkey";
        /// Import keys from a `dumpwallet` file.
        fn import_wallet(filename: &str) -> () => "importwallet";
        /// Refill the keypool.
        fn key_pool_refill(new_size: Option<u32>) -> () => "keypoolrefill";
        /// Address groups with common ownership.
        fn list_address_groupings() -> Value => "listaddressgroupings";
        /// Labels in use, optionally by purpose.
        fn list_labels(purpose: Option<&str>) -> Vec<String> => "listlabels";
        /// Outputs locked with `lockunspent`.
        fn list_lock_unspent() -> Value => "listlockunspent";
        /// Amounts received per address.
        fn list_received_by_address(min_conf: Option<u32>, include_empty: Option<bool>, include_watch_only: Option<bool>, address_filter: Option<&str>) -> Value => "listreceivedbyaddress";
        /// Amounts received per label.
        fn list_received_by_label(min_conf: Option<u32>, include_empty: Option<bool>, include_watch_only: Option<bool>) -> Value => "listreceivedbylabel";
        /// Transactions since a block, or all with no block.
        fn list_since_block(blockhash: Option<&str>, target_confirmations: Option<u32>, include_watch_only: Option<bool>, include_removed: Option<bool>) -> Value => "listsinceblock";
        /// Most recent transactions.
        fn list_transactions(label: Option<&str>, count: Option<u32>, skip: Option<u32>, include_watch_only: Option<bool>) -> Value => "listtransactions";
        /// Unspent outputs.
        fn list_unspent(
            min_conf: Option<u32>,
            max_conf: Option<u32>,
            addresses: Option<&[&str]>,
            include_unsafe: Option<bool>,
            query_options: Option<&Value>,
        ) -> Value => "listunspent";
        /// Wallets in the wallet directory.
        fn list_wallet_dir() -> Value => "listwalletdir";
        /// Loaded wallets.
        fn list_wallets() -> Vec<String> => "listwallets";
        /// Load a wallet from the wallet directory.
        fn load_wallet(filename: &str, load_on_startup: Option<bool>) -> Value => "loadwallet";
        /// Lock or unlock outputs for spending.
        fn lock_unspent(unlock: bool, transactions: Option<&Value>) -> bool => "lockunspent";
        /// Fee bump as a PSBT, for watch-only wallets.
        fn psbt_bump_fee(txid: &str, options: Option<&Value>) -> Value => "psbtbumpfee";
        /// Remove a transaction imported with `importprunedfunds`.
        fn remove_pruned_funds(txid: &str) -> () => "removeprunedfunds";
        /// Rescan the chain for wallet transactions.
        fn rescan_blockchain(start_height: Option<u64>, stop_height: Option<u64>) -> Value => "rescanblockchain";
        /// Send to outputs, funding and signing in one step.
        fn send(
            outputs: &Value,
            conf_target: Option<u32>,
            estimate_mode: Option<&str>,
            fee_rate: Option<f64>,
            options: Option<&Value>,
        ) -> Value => "send";
        /// Pay several addresses in one transaction. `dummy` must be `""`.
        fn send_many(
            dummy: &str,
            amounts: &Value,
            min_conf: Option<u32>,
            comment: Option<&str>,
            subtract_fee_from: Option<&[&str]>,
            replaceable: Option<bool>,
            conf_target: Option<u32>,
            estimate_mode: Option<&str>,
            fee_rate: Option<f64>,
            verbose: Option<bool>,
        ) -> Value => "sendmany";
        /// Pay an address; returns the txid, or an object with `verbose`.
        fn send_to_address(
            address: &str,
            amount: f64,
            comment: Option<&str>,
            comment_to: Option<&str>,
            subtract_fee_from_amount: Option<bool>,
            replaceable: Option<bool>,
            conf_target: Option<u32>,
            estimate_mode: Option<&str>,
            avoid_reuse: Option<bool>,
            fee_rate: Option<f64>,
            verbose: Option<bool>,
        ) -> Value => "sendtoaddress";
        /// Set or rotate the HD seed.
        fn set_hd_seed(new_key_pool: Option<bool>, seed: Option<&str>) -> () => "sethdseed";
        /// Set an address's label.
        fn set_label(address: &str, label: &str) -> () => "setlabel";
        /// Set the fee rate per kvB.
        fn set_tx_fee(amount: f64) -> bool => "settxfee";
        /// Change a wallet flag.
        fn set_wallet_flag(flag: &str, value: Option<bool>) -> Value => "setwalletflag";
        /// Sign a message with an address's key.
        fn sign_message(address: &str, message: &str) -> String => "signmessage";
        /// Sign a raw transaction with wallet keys.
        fn sign_raw_transaction_with_wallet(hexstring: &str, prev_txs: Option<&Value>, sighash_type: Option<&str>) -> Value => "signrawtransactionwithwallet";
        /// Unload a wallet; the endpoint's wallet when `wallet_name` is unset.
        fn unload_wallet(wallet_name: Option<&str>, load_on_startup: Option<bool>) -> Value => "unloadwallet";
        /// Upgrade the wallet format.
        fn upgrade_wallet(version: Option<u32>) -> Value => "upgradewallet";
        /// Funded PSBT with wallet inputs and change.
        fn wallet_create_funded_psbt(
            inputs: Option<&Value>,
            outputs: &Value,
            locktime: Option<u32>,
            options: Option<&Value>,
            bip32_derivs: Option<bool>,
        ) -> Value => "walletcreatefundedpsbt";
        /// Forget the decryption key.
        fn wallet_lock() -> () => "walletlock";
        /// Unlock the wallet for `timeout` seconds.
        fn wallet_passphrase(passphrase: &str, timeout: u64) -> () => "walletpassphrase";
        /// Change the wallet passphrase.
        fn wallet_passphrase_change(old_passphrase: &str, new_passphrase: &str) -> () => "walletpassphrasechange";
        /// Fill, sign and update a PSBT with wallet data.
        fn wallet_process_psbt(psbt: &str, sign: Option<bool>, sighash_type: Option<&str>, bip32_derivs: Option<bool>) -> Value => "walletprocesspsbt";
    }
}
