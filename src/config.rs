//! Configuration types for dcf-valuation

use crate::telemetry::LogFormat;
use crate::valuation::{
    ValuationAssumptions, ValuationEngine, ValuationError, DEFAULT_PROJECTION_YEARS,
};
use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub valuation: ValuationConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Company and assumption set for one valuation
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValuationConfig {
    /// Company being valued
    pub company_name: String,
    /// Base-year free cash flow (millions)
    pub base_fcf: Decimal,
    /// Explicit projection horizon in years
    #[serde(default = "default_projection_years")]
    pub projection_years: u32,
    /// One growth rate per projection year
    pub growth_rates: Vec<Decimal>,
    /// Perpetual growth after the horizon
    pub terminal_growth_rate: Decimal,
    /// Weighted average cost of capital
    pub discount_rate: Decimal,
    /// Total debt minus cash (millions)
    #[serde(default)]
    pub net_debt: Decimal,
    /// Shares outstanding (millions)
    pub shares_outstanding: Decimal,
}

fn default_projection_years() -> u32 {
    DEFAULT_PROJECTION_YEARS
}

impl ValuationConfig {
    /// Engine for the configured company and horizon
    pub fn engine(&self) -> Result<ValuationEngine, ValuationError> {
        ValuationEngine::new(self.company_name.clone(), self.base_fcf)
            .with_projection_years(self.projection_years)
    }

    /// Assumption set to run the engine with
    pub fn assumptions(&self) -> ValuationAssumptions {
        ValuationAssumptions {
            growth_rates: self.growth_rates.clone(),
            terminal_growth_rate: self.terminal_growth_rate,
            discount_rate: self.discount_rate,
            net_debt: self.net_debt,
            shares_outstanding: self.shares_outstanding,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from the requested file
    File,
    /// File missing; built-in example used
    BuiltInExample,
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, using the built-in example only when `path` does
    /// not exist
    ///
    /// Unreadable or malformed files are errors.
    pub fn load_or_example(
        path: impl AsRef<std::path::Path>,
    ) -> anyhow::Result<(Self, ConfigSource)> {
        match Self::load(path) {
            Ok(config) => Ok((config, ConfigSource::File)),
            Err(e) if is_not_found(&e) => {
                Ok((Self::example()?, ConfigSource::BuiltInExample))
            }
            Err(e) => Err(e),
        }
    }

    /// Built-in example configuration (Microsoft)
    pub fn example() -> anyhow::Result<Self> {
        let config: Config = toml::from_str(include_str!("../config.toml.example"))?;
        Ok(config)
    }
}
