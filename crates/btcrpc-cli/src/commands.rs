//! Command helpers: flag merging, parameter parsing, batch input and output.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use btcrpc_client::{BatchView, CallId, CallOutcome, NAMESPACES, Param};
use btcrpc_settings::ClientSettings;
use serde::Deserialize;
use serde_json::{Value, json};

/// Connection flags given on the command line.
#[derive(Debug, Default)]
pub(crate) struct Flags {
    pub(crate) url: Option<String>,
    pub(crate) user: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) cookie_file: Option<PathBuf>,
    pub(crate) wallet: Option<String>,
    pub(crate) log_level: Option<String>,
}

/// Flags win over file and environment.
pub(crate) fn apply_flags(settings: &mut ClientSettings, flags: Flags) {
    let conn = &mut settings.connection;
    if let Some(url) = flags.url {
        conn.url = url;
    }
    if let Some(user) = flags.user {
        conn.user = Some(user);
    }
    if let Some(password) = flags.password {
        conn.password = Some(password);
    }
    if let Some(path) = flags.cookie_file {
        conn.cookie_file = Some(path);
    }
    if let Some(wallet) = flags.wallet {
        conn.wallet = Some(wallet);
    }
    if let Some(level) = flags.log_level {
        settings.logging.level = level;
    }
}

/// JSON if it parses, otherwise a string. `null` is an unset slot.
pub(crate) fn parse_param(raw: &str) -> Param {
    serde_json::from_str::<Value>(raw)
        .map_or_else(|_| Param::from(Value::String(raw.to_string())), Param::from)
}

/// One call in a batch file.
#[derive(Debug, Deserialize, PartialEq)]
pub(crate) struct BatchEntry {
    pub(crate) method: String,
    #[serde(default)]
    pub(crate) params: Vec<Value>,
}

pub(crate) fn parse_batch(text: &str) -> Result<Vec<BatchEntry>> {
    let entries: Vec<BatchEntry> =
        serde_json::from_str(text).context("expected a JSON array of {method, params}")?;
    if let Some(pos) = entries.iter().position(|e| e.method.trim().is_empty()) {
        bail!("entry {pos} has an empty method name");
    }
    Ok(entries)
}

pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        let _ = std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read batch from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub(crate) fn record_entries(batch: &BatchView<'_>, entries: Vec<BatchEntry>) -> Vec<CallId> {
    entries
        .into_iter()
        .map(|e| batch.call(&e.method, e.params.into_iter().map(Param::from).collect()))
        .collect()
}

/// `[{"id": n, "result": ...} | {"id": n, "error": {...}}]` in call order.
pub(crate) fn render_outcomes(outcomes: Vec<CallOutcome>) -> Value {
    outcomes
        .into_iter()
        .enumerate()
        .map(|(id, outcome)| match outcome {
            Ok(result) => json!({ "id": id, "result": result }),
            Err(err) => json!({ "id": err.id, "error": err.payload() }),
        })
        .collect()
}

pub(crate) fn render_value(value: &Value) -> Result<String> {
    Ok(match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other)?,
    })
}

pub(crate) fn list_methods(namespace: Option<&str>) -> Result<String> {
    let selected: Vec<_> = NAMESPACES
        .iter()
        .filter(|(name, _)| namespace.is_none_or(|n| n == *name))
        .collect();
    if selected.is_empty() {
        let known: Vec<&str> = NAMESPACES.iter().map(|(name, _)| *name).collect();
        bail!("unknown namespace; expected one of: {}", known.join(", "));
    }
    let mut out = String::new();
    for (name, methods) in selected {
        out.push_str(name);
        out.push_str(":\n");
        for m in *methods {
            out.push_str("  ");
            out.push_str(m);
            out.push('\n');
        }
    }
    Ok(out)
}
