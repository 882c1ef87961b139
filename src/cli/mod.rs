//! CLI interface for dcf-valuation
//!
//! Provides subcommands for:
//! - `value`: Value the configured company, with flag overrides
//! - `demo`: Run the built-in example valuations
//! - `config`: Show the effective configuration

mod demo;
mod value;

pub use demo::{DemoArgs, DemoCompany};
pub use value::ValueArgs;

use crate::config::ValuationConfig;
use crate::report::ValuationReport;
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "dcf")]
#[command(about = "Discounted cash flow intrinsic valuation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Value the configured company
    Value(ValueArgs),
    /// Run a built-in example valuation
    Demo(DemoArgs),
    /// Show configuration
    Config,
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Table,
    /// JSON document
    Json,
}

/// Run a configured valuation and render its report
pub fn run_valuation(
    config: &ValuationConfig,
    format: OutputFormat,
) -> anyhow::Result<ValuationReport> {
    let mut engine = config
        .engine()
        .with_context(|| format!("invalid setup for {}", config.company_name))?;
    let assumptions = config.assumptions();
    let valuation = engine
        .run(&assumptions)
        .with_context(|| format!("valuation of {} failed", config.company_name))?;

    let report = ValuationReport::new(&engine, &assumptions, valuation);
    match format {
        OutputFormat::Table => println!("{}", report.format_table()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(report)
}
