//! Peers, bans and network state.

rpc_namespace! {
    /// Peers, bans and network state.
    namespace "network" => Network, NetworkBatch {
        /// Add, remove or try a peer; `command` is `add`, `remove` or `onetry`.
        fn add_node(node: &str, command: &str) -> () => "addnode";
        /// Clear all bans.
        fn clear_banned() -> () => "clearbanned";
        /// Disconnect a peer by address or by node id.
        fn disconnect_node(address: Option<&str>, node_id: Option<u64>) -> () => "disconnectnode";
        /// Peers added with `addnode`.
        fn get_added_node_info(node: Option<&str>) -> Value => "getaddednodeinfo";
        /// Number of connected peers.
        fn get_connection_count() -> u64 => "getconnectioncount";
        /// Traffic totals.
        fn get_net_totals() -> Value => "getnettotals";
        /// P2P networking state.
        fn get_network_info() -> Value => "getnetworkinfo";
        /// Known addresses from the address manager.
        fn get_node_addresses(count: Option<u32>) -> Value => "getnodeaddresses";
        /// Connected peers.
        fn get_peer_info() -> Value => "getpeerinfo";
        /// Banned subnets.
        fn list_banned() -> Value => "listbanned";
        /// Queue a ping to every peer.
        fn ping() -> () => "ping";
        /// Ban or unban a subnet.
        fn set_ban(subnet: &str, command: &str, ban_time: Option<u64>, absolute: Option<bool>) -> () => "setban";
        /// Toggle all P2P activity.
        fn set_network_active(state: bool) -> bool => "setnetworkactive";
    }
}
