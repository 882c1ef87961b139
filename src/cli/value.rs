//! Value command implementation

use super::{run_valuation, OutputFormat};
use crate::config::ValuationConfig;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug, Default)]
pub struct ValueArgs {
    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Base-year free cash flow in millions
    #[arg(long)]
    pub base_fcf: Option<Decimal>,

    /// Projection horizon in years
    #[arg(long)]
    pub years: Option<u32>,

    /// Growth rate per projection year, comma separated (0.08,0.07,...)
    #[arg(long, value_delimiter = ',')]
    pub growth: Option<Vec<Decimal>>,

    /// Terminal (perpetual) growth rate
    #[arg(long)]
    pub terminal_growth: Option<Decimal>,

    /// Discount rate (WACC)
    #[arg(long)]
    pub wacc: Option<Decimal>,

    /// Net debt in millions; negative for net cash
    #[arg(long, allow_hyphen_values = true)]
    pub net_debt: Option<Decimal>,

    /// Shares outstanding in millions
    #[arg(long)]
    pub shares: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ValueArgs {
    /// Apply command-line overrides on top of the configured valuation
    pub fn apply(&self, base: &ValuationConfig) -> ValuationConfig {
        let mut config = base.clone();
        if let Some(ref company) = self.company {
            config.company_name = company.clone();
        }
        if let Some(base_fcf) = self.base_fcf {
            config.base_fcf = base_fcf;
        }
        if let Some(years) = self.years {
            config.projection_years = years;
        }
        if let Some(ref growth) = self.growth {
            config.growth_rates = growth.clone();
        }
        if let Some(terminal_growth) = self.terminal_growth {
            config.terminal_growth_rate = terminal_growth;
        }
        if let Some(wacc) = self.wacc {
            config.discount_rate = wacc;
        }
        if let Some(net_debt) = self.net_debt {
            config.net_debt = net_debt;
        }
        if let Some(shares) = self.shares {
            config.shares_outstanding = shares;
        }
        config
    }

    pub fn execute(&self, base: &ValuationConfig) -> anyhow::Result<()> {
        let config = self.apply(base);
        tracing::info!(company = %config.company_name, "Running DCF valuation");
        run_valuation(&config, self.format)?;
        Ok(())
    }
}
