use anyhow::Result;
use serde::Deserialize;
use anyhow::{anyhow, Context};

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub itinerary: ItinerarySettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ItinerarySettings {
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_max_tickets")]
    pub max_tickets: Option<usize>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ItinerarySettings {
    fn default() -> Self {
        Self { strict: false, max_tickets: default_max_tickets(), timeout_secs: default_timeout() }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_max_tickets() -> Option<usize> { Some(100_000) }
fn default_timeout() -> u64 { 60 }
fn default_log_format() -> String { "compact".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.itinerary.normalize();
        self.logging.validate()?;
        Ok(())
    }

    /// Lenient startup load used by the binary.
    ///
    /// A missing or invalid file falls back to defaults, and the
    /// `TRACKER_STRICT` override is applied either way. Each problem is
    /// returned separately so the caller can log it once logging is up.
    pub fn load_or_default() -> (Self, Vec<anyhow::Error>) {
        let strict_env = std::env::var("TRACKER_STRICT").ok();
        Self::resolve(load_default(), strict_env.as_deref())
    }

    fn resolve(loaded: Result<AppConfig>, strict_env: Option<&str>) -> (Self, Vec<anyhow::Error>) {
        let mut problems = Vec::new();
        let checked = loaded.and_then(|mut cfg| {
            cfg.normalize_and_validate()?;
            Ok(cfg)
        });
        let mut cfg = match checked {
            Ok(cfg) => cfg,
            Err(e) => {
                problems.push(e.context("config file not used; falling back to defaults"));
                AppConfig::default()
            }
        };
        // a bad override keeps the file's value
        if let Err(e) = cfg.itinerary.apply_strict_override(strict_env) {
            problems.push(e);
        }
        (cfg, problems)
    }
}

impl ItinerarySettings {
    /// `TRACKER_STRICT` overrides the file setting.
    fn apply_strict_override(&mut self, raw: Option<&str>) -> Result<()> {
        if let Some(raw) = raw {
            self.strict = parse_bool(raw)
                .ok_or_else(|| anyhow!("TRACKER_STRICT must be true/false/1/0, got {raw:?}"))?;
        }
        Ok(())
    }

    fn normalize(&mut self) {
        // 0 means no limit
        if self.max_tickets == Some(0) {
            self.max_tickets = None;
        }
        if self.timeout_secs == 0 {
            self.timeout_secs = default_timeout();
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        match self.format.as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("logging.format must be \"compact\" or \"json\", got {other:?}")),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
