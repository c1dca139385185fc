//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`ClientSettings::default()`]
//! 2. If `~/.btcrpc/settings.json` exists, deep-merge user values over defaults
//! 3. Apply `BTCRPC_*` environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::ClientSettings;

/// Resolve the path to the settings file (`~/.btcrpc/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".btcrpc").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<ClientSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<ClientSettings> {
    let mut settings = load_file_layer(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Defaults merged with the settings file, without env overrides.
fn load_file_layer(path: &Path) -> Result<ClientSettings> {
    let defaults = serde_json::to_value(ClientSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

/// Recursive deep merge of two JSON values.
///
/// - Objects are merged recursively (source overrides target per-key)
/// - Arrays and primitives are replaced entirely by source
/// - Null values in source are skipped (preserving target)
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply `BTCRPC_*` environment variable overrides to loaded settings.
pub fn apply_env_overrides(settings: &mut ClientSettings) {
    apply_overrides_with(settings, |name| std::env::var(name).ok());
}

/// Apply overrides read through `lookup` (an env var reader in production).
///
/// Empty values are ignored. A timeout that does not parse or falls outside
/// 1..=3\_600\_000 ms is ignored with a warning.
pub fn apply_overrides_with<F>(settings: &mut ClientSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(v) = read("BTCRPC_URL") {
        settings.connection.url = v;
    }
    if let Some(v) = read("BTCRPC_USER") {
        settings.connection.user = Some(v);
    }
    if let Some(v) = read("BTCRPC_PASSWORD") {
        settings.connection.password = Some(v);
    }
    if let Some(v) = read("BTCRPC_COOKIE_FILE") {
        settings.connection.cookie_file = Some(PathBuf::from(v));
    }
    if let Some(v) = read("BTCRPC_WALLET") {
        settings.connection.wallet = Some(v);
    }
    if let Some(v) = read("BTCRPC_TIMEOUT_MS") {
        match parse_u64_range(&v, 1, 3_600_000) {
            Some(ms) => settings.connection.timeout_ms = ms,
            None => warn!(key = "BTCRPC_TIMEOUT_MS", value = %v, "invalid u64 env var, ignoring"),
        }
    }
    if let Some(v) = read("BTCRPC_LOG_LEVEL") {
        settings.logging.level = v;
    }
    if let Some(v) = read("BTCRPC_LOG_JSON") {
        match parse_bool(&v) {
            Some(json) => settings.logging.json = json,
            None => warn!(key = "BTCRPC_LOG_JSON", value = %v, "invalid bool env var, ignoring"),
        }
    }
}

/// Parse `true`/`false`/`1`/`0`, case-insensitively.
pub(crate) fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Parse a string as a `u64` within a range.
pub fn parse_u64_range(val: &str, min: u64, max: u64) -> Option<u64> {
    let n: u64 = val.parse().ok()?;
    (n >= min && n <= max).then_some(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
