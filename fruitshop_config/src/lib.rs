#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the demonstration driver.
//!
//! Everything is optional: with no config file the defaults reproduce the
//! fixed demonstration sequence exactly. The TOML is deserialized and then
//! validated; validation rejects quantities the pricing layer would refuse
//! anyway, so bad files fail fast with a file-level message.
use serde::Deserialize;
use std::path::Path;

/// Standing-order quantities.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Quantities {
    pub cherry_kilos: f64,
    pub melon_units: f64,
    pub damson_kilos: f64,
    pub lettuce_units: f64,
}

impl Default for Quantities {
    fn default() -> Self {
        Self {
            cherry_kilos: 2.5,
            melon_units: 2.0,
            damson_kilos: 2.5,
            lettuce_units: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    /// Path to a .log file (JSON lines); console logging is unaffected.
    pub file: Option<String>,
    /// Console log level: "error","warn","info","debug","trace"
    pub level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub quantities: Quantities,
    pub logging: Logging,
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        let q = &self.quantities;
        for (name, value) in [
            ("quantities.cherry_kilos", q.cherry_kilos),
            ("quantities.melon_units", q.melon_units),
            ("quantities.damson_kilos", q.damson_kilos),
            ("quantities.lettuce_units", q.lettuce_units),
        ] {
            if !value.is_finite() || value < 0.0 {
                eyre::bail!("{name} must be a non-negative finite number, got {value}");
            }
        }
        Ok(())
    }
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Load and validate a config file. A missing file yields the defaults.
pub fn load(path: &Path) -> eyre::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config {}: {e}", path.display()))?;
    let cfg = load_toml(&content)
        .map_err(|e| eyre::eyre!("failed to parse config {}: {e}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
