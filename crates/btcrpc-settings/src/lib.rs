//! # btcrpc-settings
//!
//! Connection settings for the btcrpc client, loaded from three layers (in
//! priority order):
//! 1. **Compiled defaults**: [`ClientSettings::default()`], a local mainnet node
//! 2. **User file**: `~/.btcrpc/settings.json`, deep-merged over defaults
//! 3. **Environment variables**: `BTCRPC_*` overrides (highest priority)
//!
//! Credentials resolve from explicit user/password first, then from the
//! node's `.cookie` file.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, apply_overrides_with, deep_merge, load_settings, load_settings_from_path,
    settings_path,
};
pub use types::{ClientSettings, ConnectionSettings, Credentials, LoggingSettings};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _settings = ClientSettings::default();
        let _path = settings_path();
    }

    #[test]
    fn default_settings_are_valid() {
        let settings = ClientSettings::default();
        assert_eq!(settings.connection.url, "http://127.0.0.1:8332");
        assert_eq!(settings.connection.timeout_ms, 30_000);
        assert!(settings.connection.user.is_none());
        assert!(settings.connection.wallet.is_none());
        assert_eq!(settings.logging.level, "warn");
        assert!(settings.validate().is_ok());
    }
}
