//! Valuation reporting
//!
//! Renders computed valuation results for humans (boxed text report) or
//! machines (JSON). Nothing in here performs valuation arithmetic beyond
//! unit scaling for display.

pub mod format;

use crate::valuation::{FullValuation, ProjectionEntry, ValuationAssumptions, ValuationEngine};
use format::{group_thousands, millions, per_share, percent};
use rust_decimal::Decimal;
use serde::Serialize;

const RULE_WIDTH: usize = 70;
const SUMMARY_RULE_WIDTH: usize = 50;

/// Everything needed to present one valuation run
#[derive(Debug, Clone, Serialize)]
pub struct ValuationReport {
    /// Company being valued
    pub company_name: String,
    /// Base-year free cash flow (millions)
    pub base_fcf: Decimal,
    /// Explicit projection horizon
    pub projection_years: u32,
    /// Inputs the valuation was run with
    pub assumptions: ValuationAssumptions,
    /// Year-by-year FCF projection
    pub projections: Vec<ProjectionEntry>,
    /// Enterprise and equity results
    pub valuation: FullValuation,
}

impl ValuationReport {
    /// Build a report from an engine that has just run `valuation`
    pub fn new(
        engine: &ValuationEngine,
        assumptions: &ValuationAssumptions,
        valuation: FullValuation,
    ) -> Self {
        Self {
            company_name: engine.company_name().to_string(),
            base_fcf: engine.base_fcf(),
            projection_years: engine.projection_years(),
            assumptions: assumptions.clone(),
            projections: engine.projections().to_vec(),
            valuation,
        }
    }

    /// Format as text report for CLI output
    pub fn format_table(&self) -> String {
        let a = &self.assumptions;
        let ev = &self.valuation.enterprise;
        let eq = &self.valuation.equity;
        let shares = format!("{}M", group_thousands(a.shares_outstanding, 1));

        let inputs = [
            dotted("Base Year FCF", &millions(self.base_fcf)),
            dotted(
                "Projection Period",
                &format!("{} years", self.projection_years),
            ),
            dotted("Terminal Growth Rate", &percent(a.terminal_growth_rate)),
            dotted("WACC (Discount Rate)", &percent(a.discount_rate)),
            dotted("Net Debt", &millions(a.net_debt)),
            dotted("Shares Outstanding", &shares),
        ]
        .concat();

        let results = [
            dotted("PV of Projected FCFs", &millions(ev.pv_of_projected_fcfs)),
            dotted("Terminal Value", &millions(ev.terminal_value)),
            dotted("PV of Terminal Value", &millions(ev.pv_of_terminal_value)),
            dotted("Enterprise Value", &millions(ev.enterprise_value)),
        ]
        .concat();

        let bridge = [
            dotted("Less: Net Debt", &millions(a.net_debt)),
            dotted("Equity Value", &millions(eq.equity_value)),
            dotted("÷ Shares Outstanding", &shares),
        ]
        .concat();

        format!(
            r#"
{heavy}
DCF VALUATION MODEL - {company}
{heavy}

INPUT ASSUMPTIONS:
{inputs}
FCF PROJECTIONS:
{projections}
VALUATION RESULTS:
{results}
{bridge}
  {light}
{value_per_share}  {light}
"#,
            heavy = "=".repeat(RULE_WIDTH),
            light = "─".repeat(SUMMARY_RULE_WIDTH),
            company = self.company_name.to_uppercase(),
            projections = self.projection_table(),
            value_per_share =
                dotted("INTRINSIC VALUE PER SHARE", &per_share(eq.price_per_share)),
        )
    }

    /// Year / FCF / growth table, right aligned
    fn projection_table(&self) -> String {
        let rows: Vec<(String, String, String)> = self
            .projections
            .iter()
            .map(|p| (p.year.to_string(), millions(p.fcf), percent(p.growth_rate)))
            .collect();

        let year_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max(4);
        let fcf_w = rows
            .iter()
            .map(|r| r.1.chars().count())
            .max()
            .unwrap_or(0)
            .max(3);
        let growth_w = rows.iter().map(|r| r.2.len()).max().unwrap_or(0).max(11);

        let header = format!(
            "{:>year_w$}  {:>fcf_w$}  {:>growth_w$}\n",
            "Year", "FCF", "Growth Rate"
        );
        let body: String = rows
            .iter()
            .map(|(year, fcf, growth)| {
                format!("{year:>year_w$}  {fcf:>fcf_w$}  {growth:>growth_w$}\n")
            })
            .collect();
        header + &body
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Dotted label/value line, e.g. `  Net Debt ........ $0.0M`
fn dotted(label: &str, value: &str) -> String {
    const LABEL_WIDTH: usize = 34;
    let pad = LABEL_WIDTH.saturating_sub(label.chars().count() + 1).max(3);
    format!("  {} {} {}\n", label, ".".repeat(pad), value)
}
