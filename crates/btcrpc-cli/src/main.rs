//! # btcrpc
//!
//! Command-line client for Bitcoin Core JSON-RPC: single calls, batches
//! read from a file, and the typed method catalogue.

#![deny(unsafe_code)]

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use btcrpc_client::RpcClient;
use btcrpc_core::logging::{LogFormat, init_subscriber_with};
use btcrpc_settings::{ClientSettings, load_settings, load_settings_from_path};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;

/// Bitcoin Core JSON-RPC client.
#[derive(Parser, Debug)]
#[command(name = "btcrpc", version, about = "Bitcoin Core JSON-RPC client")]
struct Cli {
    /// Node RPC URL (overrides settings).
    #[arg(long, global = true)]
    url: Option<String>,

    /// RPC user name.
    #[arg(long, global = true)]
    user: Option<String>,

    /// RPC password.
    #[arg(long, global = true)]
    password: Option<String>,

    /// Path to the node's `.cookie` file.
    #[arg(long, global = true)]
    cookie_file: Option<PathBuf>,

    /// Wallet to address on a multi-wallet node.
    #[arg(long, global = true)]
    wallet: Option<String>,

    /// Settings file (default `~/.btcrpc/settings.json`).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one call. Each parameter is read as JSON, or as a string if it
    /// is not valid JSON.
    Call {
        /// Remote method name, e.g. `getblockhash`.
        method: String,
        /// Positional parameters.
        params: Vec<String>,
    },
    /// Send a batch of calls in one request.
    ///
    /// The input is a JSON array of `{"method": ..., "params": [...]}`
    /// objects. Results are printed in input order.
    Batch {
        /// Batch file, or `-` for stdin.
        input: PathBuf,
    },
    /// List the typed methods by namespace.
    Methods {
        /// Only this namespace.
        namespace: Option<String>,
    },
}

impl Cli {
    fn resolve_settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings_from_path(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => load_settings().context("Failed to load settings")?,
        };
        commands::apply_flags(
            &mut settings,
            commands::Flags {
                url: self.url.clone(),
                user: self.user.clone(),
                password: self.password.clone(),
                cookie_file: self.cookie_file.clone(),
                wallet: self.wallet.clone(),
                log_level: self.log_level.clone(),
            },
        );
        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::Methods { namespace } = &cli.command {
        print!("{}", commands::list_methods(namespace.as_deref())?);
        return Ok(());
    }

    let settings = cli.resolve_settings()?;
    init_subscriber_with(
        &settings.logging.level,
        LogFormat::from_json_flag(settings.logging.json),
    );
    debug!(?settings, "settings resolved");

    let client = RpcClient::from_settings(&settings).context("Failed to create RPC client")?;

    let output = match cli.command {
        Command::Call { method, params } => {
            let params = params
                .iter()
                .map(String::as_str)
                .map(commands::parse_param)
                .collect();
            client
                .call::<Value>(&method, params)
                .await
                .with_context(|| format!("{method} failed"))?
        }
        Command::Batch { input } => {
            let text = commands::read_input(&input)?;
            let entries = commands::parse_batch(&text)
                .with_context(|| format!("Invalid batch in {}", input.display()))?;
            let outcomes = client
                .batch(|b| commands::record_entries(b, entries))
                .await
                .context("Batch failed")?;
            commands::render_outcomes(outcomes)
        }
        Command::Methods { .. } => return Ok(()),
    };

    println!("{}", commands::render_value(&output)?);
    Ok(())
}
