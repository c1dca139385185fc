//! Structured logging with `tracing`.
//!
//! Library code only emits events; binaries call [`init_subscriber`] once.
//! Parameter values are never logged since they may carry passphrases or
//! private keys. Method names, ids and batch sizes are.

/// Output format of the stderr subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// `Json` when `json` is set, else `Compact`.
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Compact }
    }
}

/// Initialize the global tracing subscriber with compact stderr output.
///
/// Call once at application startup. Subsequent calls are no-ops.
/// `RUST_LOG`, when set, takes precedence over `level`.
pub fn init_subscriber(level: &str) {
    init_subscriber_with(level, LogFormat::Compact);
}

/// Like [`init_subscriber`], choosing the output format.
pub fn init_subscriber_with(level: &str, format: LogFormat) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    // set_global_default fails if already set
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
