//! Settings types.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{Result, SettingsError};

/// Root settings object.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientSettings {
    /// Where and how to reach the node.
    pub connection: ConnectionSettings,
    /// Log output.
    pub logging: LoggingSettings,
}

/// Node endpoint, authentication and timeouts.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionSettings {
    /// Base RPC URL of the node.
    pub url: String,
    /// RPC user name (`rpcuser`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// RPC password (`rpcpassword`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Path to the node's `.cookie` file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_file: Option<PathBuf>,
    /// Wallet to address on a multi-wallet node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8332".to_string(),
            user: None,
            password: None,
            cookie_file: None,
            wallet: None,
            timeout_ms: 30_000,
        }
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("cookie_file", &self.cookie_file)
            .field("wallet", &self.wallet)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Log output settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Resolved HTTP basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// User name.
    pub user: String,
    /// Password.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Parse the one-line `user:password` format of a `.cookie` file.
    pub fn from_cookie_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Cookie {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let line = content.lines().next().unwrap_or("").trim();
        let Some((user, password)) = line.split_once(':') else {
            return Err(SettingsError::Cookie {
                path: path.to_path_buf(),
                reason: "missing ':' separator".into(),
            });
        };
        if user.is_empty() {
            return Err(SettingsError::Cookie {
                path: path.to_path_buf(),
                reason: "empty user name".into(),
            });
        }
        Ok(Self {
            user: user.to_string(),
            password: password.to_string(),
        })
    }
}

impl ClientSettings {
    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<()> {
        let url = self.connection.url.trim();
        if url.is_empty() {
            return Err(SettingsError::InvalidValue("connection.url is empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SettingsError::InvalidValue(format!(
                "connection.url must be http or https: {url}"
            )));
        }
        if self.connection.timeout_ms == 0 {
            return Err(SettingsError::InvalidValue(
                "connection.timeoutMs must be positive".into(),
            ));
        }
        Ok(())
    }

    /// The URL requests are posted to.
    ///
    /// With a wallet selected this is the node's `/wallet/<name>` endpoint,
    /// the name percent-encoded as a single path segment.
    pub fn endpoint(&self) -> String {
        let base = self.connection.url.trim_end_matches('/');
        let Some(wallet) = &self.connection.wallet else {
            return base.to_string();
        };
        let Ok(mut url) = Url::parse(base) else {
            // Left for the transport to reject as an invalid endpoint.
            return base.to_string();
        };
        if let Ok(mut segments) = url.path_segments_mut() {
            let _ = segments.pop_if_empty().push("wallet").push(wallet);
        }
        url.into()
    }

    /// Resolve credentials: explicit user/password first, then the cookie file.
    ///
    /// `Ok(None)` means no credentials are configured here; the transport may
    /// still find userinfo embedded in the URL.
    pub fn credentials(&self) -> Result<Option<Credentials>> {
        let conn = &self.connection;
        if let Some(user) = &conn.user {
            return Ok(Some(Credentials {
                user: user.clone(),
                password: conn.password.clone().unwrap_or_default(),
            }));
        }
        match &conn.cookie_file {
            Some(path) => Credentials::from_cookie_file(path).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn with_url(url: &str) -> ClientSettings {
        let mut s = ClientSettings::default();
        s.connection.url = url.to_string();
        s
    }

    // ── serde ───────────────────────────────────────────────────────

    #[test]
    fn partial_json_fills_defaults() {
        let s: ClientSettings =
            serde_json::from_str(r#"{"connection": {"wallet": "hot"}}"#).unwrap();
        assert_eq!(s.connection.wallet.as_deref(), Some("hot"));
        assert_eq!(s.connection.url, "http://127.0.0.1:8332");
        assert_eq!(s.logging.level, "warn");
    }

    #[test]
    fn camel_case_keys() {
        let s: ClientSettings = serde_json::from_str(
            r#"{"connection": {"timeoutMs": 500, "cookieFile": "/tmp/.cookie"}}"#,
        )
        .unwrap();
        assert_eq!(s.connection.timeout_ms, 500);
        assert_eq!(s.connection.cookie_file, Some(PathBuf::from("/tmp/.cookie")));
    }

    #[test]
    fn debug_redacts_password() {
        let mut s = ClientSettings::default();
        s.connection.password = Some("hunter2".into());
        let dbg = format!("{s:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));

        let creds = Credentials {
            user: "u".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    // ── validate ────────────────────────────────────────────────────

    #[test]
    fn validate_rejects_empty_url() {
        assert_matches!(with_url("  ").validate(), Err(SettingsError::InvalidValue(_)));
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        assert_matches!(
            with_url("ftp://node:8332").validate(),
            Err(SettingsError::InvalidValue(msg)) if msg.contains("http")
        );
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut s = ClientSettings::default();
        s.connection.timeout_ms = 0;
        assert_matches!(s.validate(), Err(SettingsError::InvalidValue(_)));
    }

    #[test]
    fn validate_accepts_https() {
        assert!(with_url("https://node.example:443").validate().is_ok());
    }

    // ── endpoint ────────────────────────────────────────────────────

    #[test]
    fn endpoint_without_wallet() {
        assert_eq!(with_url("http://h:8332/").endpoint(), "http://h:8332");
    }

    #[test]
    fn endpoint_with_wallet() {
        let mut s = with_url("http://h:8332");
        s.connection.wallet = Some("cold".into());
        assert_eq!(s.endpoint(), "http://h:8332/wallet/cold");
    }

    #[test]
    fn endpoint_percent_encodes_wallet_name() {
        let mut s = with_url("http://127.0.0.1:8332/");
        s.connection.wallet = Some("team/hot #1?x".into());
        assert_eq!(
            s.endpoint(),
            "http://127.0.0.1:8332/wallet/team%2Fhot%20%231%3Fx"
        );
    }

    // ── credentials ─────────────────────────────────────────────────

    #[test]
    fn credentials_none_by_default() {
        assert!(ClientSettings::default().credentials().unwrap().is_none());
    }

    #[test]
    fn explicit_credentials_win_over_cookie() {
        let mut s = ClientSettings::default();
        s.connection.user = Some("alice".into());
        s.connection.password = Some("pw".into());
        s.connection.cookie_file = Some(PathBuf::from("/nonexistent/.cookie"));
        let creds = s.credentials().unwrap().unwrap();
        assert_eq!(creds.user, "alice");
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn cookie_file_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".cookie");
        std::fs::write(&path, "__cookie__:0123abcd\n").unwrap();

        let mut s = ClientSettings::default();
        s.connection.cookie_file = Some(path);
        let creds = s.credentials().unwrap().unwrap();
        assert_eq!(creds.user, "__cookie__");
        assert_eq!(creds.password, "0123abcd");
    }

    #[test]
    fn cookie_password_may_contain_colons() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".cookie");
        std::fs::write(&path, "__cookie__:a:b:c").unwrap();
        let creds = Credentials::from_cookie_file(&path).unwrap();
        assert_eq!(creds.password, "a:b:c");
    }

    #[test]
    fn malformed_cookie_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".cookie");
        std::fs::write(&path, "no-separator").unwrap();
        assert_matches!(
            Credentials::from_cookie_file(&path),
            Err(SettingsError::Cookie { reason, .. }) if reason.contains("separator")
        );
    }

    #[test]
    fn missing_cookie_file() {
        assert_matches!(
            Credentials::from_cookie_file(Path::new("/nonexistent/.cookie")),
            Err(SettingsError::Cookie { .. })
        );
    }
}
