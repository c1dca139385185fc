//! Node control and introspection.

rpc_namespace! {
    /// Node control and introspection.
    namespace "control" => Control, ControlBatch {
        /// Memory usage; `mode` is `stats` or `mallocinfo`.
        fn get_memory_info(mode: Option<&str>) -> Value => "getmemoryinfo";
        /// Commands the RPC server is currently running.
        fn get_rpc_info() -> Value => "getrpcinfo";
        /// Help text for all commands or one.
        fn help(command: Option<&str>) -> String => "help";
        /// Enable or disable debug log categories.
        fn logging(include: Option<&[&str]>, exclude: Option<&[&str]>) -> Value => "logging";
        /// Ask the node to shut down.
        fn stop() -> Value => "stop";
        /// Seconds since the node started.
        fn uptime() -> u64 => "uptime";
    }
}
