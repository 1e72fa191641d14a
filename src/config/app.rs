// src/config/app.rs
use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::lexicon::Lexicons;

// --- env names & defaults ---
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_LEXICON_PATH: &str = "HEADLINE_LEXICON_PATH";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Optional TOML/JSON file replacing some of the embedded word lists.
    pub lexicon_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            lexicon_path: None,
            log_format: LogFormat::Compact,
        }
    }
}

impl AppConfig {
    /// Read the process environment (call `dotenvy::dotenv()` first in dev).
    ///
    /// Unset or blank variables keep their defaults; a `PORT` that isn't a
    /// valid port number is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(host) = non_blank(ENV_HOST) {
            cfg.host = host;
        }
        if let Some(raw) = non_blank(ENV_PORT) {
            cfg.port = raw
                .parse::<u16>()
                .with_context(|| format!("{ENV_PORT} must be a port number, got '{raw}'"))?;
        }
        cfg.lexicon_path = non_blank(ENV_LEXICON_PATH).map(PathBuf::from);
        cfg.log_format = match non_blank(ENV_LOG_FORMAT).as_deref() {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        };

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }

    /// Embedded lexicons, or the override file when one is configured.
    pub fn load_lexicons(&self) -> Result<Lexicons> {
        match &self.lexicon_path {
            Some(p) => Lexicons::load_from(p),
            None => Ok(Lexicons::embedded().clone()),
        }
    }
}

fn non_blank(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
