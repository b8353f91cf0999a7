// src/config.rs

use std::env;

/// Tickers shown in the form on a fresh page load.
pub const DEFAULT_TICKERS: &str = "7203.T, 9984.T, AAPL, MSFT";

/// Length of the trailing date window shown on a fresh page load.
pub const DEFAULT_WINDOW_DAYS: i64 = 14;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

pub const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

// the chart endpoint answers 429 to clients without a browser-like agent
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Listening socket of the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT` from the environment, falling back to the loopback defaults.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// Builds a config from optional raw values; an unparseable port keeps the default.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let mut config = ServerConfig::default();

        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(raw) = port {
            match raw.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => log::warn!("Ignoring PORT={raw:?} ({e}); using {DEFAULT_PORT}"),
            }
        }

        config
    }

    pub fn address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
