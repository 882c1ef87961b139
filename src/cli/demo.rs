//! Demo command implementation

use super::{run_valuation, OutputFormat};
use crate::config::{Config, ValuationConfig};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Companies with a built-in example valuation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DemoCompany {
    #[default]
    Microsoft,
    Apple,
    Tesla,
}

impl DemoCompany {
    /// Base-year FCF in millions
    pub fn base_fcf(self) -> Decimal {
        match self {
            DemoCompany::Microsoft => dec!(45000),
            DemoCompany::Apple => dec!(110000),
            DemoCompany::Tesla => dec!(13000),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DemoCompany::Microsoft => "Microsoft",
            DemoCompany::Apple => "Apple",
            DemoCompany::Tesla => "Tesla",
        }
    }

    /// Example valuation setup
    ///
    /// Apple and Tesla reuse the Microsoft assumptions; only the company
    /// and base FCF change.
    pub fn config(self) -> anyhow::Result<ValuationConfig> {
        let mut config = Config::example()?.valuation;
        config.company_name = self.name().to_string();
        config.base_fcf = self.base_fcf();
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Example company to value
    #[arg(long, value_enum, default_value_t = DemoCompany::Microsoft)]
    pub company: DemoCompany,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl DemoArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        tracing::info!(company = self.company.name(), "Running example valuation");
        run_valuation(&self.company.config()?, self.format)?;
        Ok(())
    }
}
