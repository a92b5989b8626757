// src/config.rs

use std::ffi::OsStr;
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_VERSION: &str = "v1";
pub const DEFAULT_PORT: u16 = 8080;

/// Process-wide settings, resolved once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Reported in the `version` field of `GET /` (`APP_VERSION`)
    pub version: String,

    /// Listen port (`PORT`)
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Resolve configuration against an arbitrary key lookup.
    ///
    /// Empty values count as unset. `APP_VERSION` is otherwise taken verbatim;
    /// bytes that are not valid UTF-8 become U+FFFD rather than the default.
    pub fn from_lookup<F, V>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<V>,
        V: AsRef<OsStr>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.as_ref().to_string_lossy().into_owned())
                .filter(|v| !v.is_empty())
        };

        let version = var("APP_VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid u16 (got {raw:?})"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { version, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
