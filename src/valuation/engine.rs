//! DCF valuation engine
//!
//! Two-stage model: an explicit FCF projection followed by a perpetuity.
//! The engine caches the last projection; present and terminal value
//! calculations read from it. Not intended for shared mutation: all
//! projection goes through `&mut self`.

use super::discount::{compound_factor, perpetuity_value, present_value};
use super::{
    EquityResult, FullValuation, ProjectionEntry, ValuationAssumptions, ValuationError,
    ValuationResult,
};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Default explicit projection horizon in years
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// DCF valuation engine for a single company
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    company_name: String,
    base_fcf: Decimal,
    projection_years: u32,
    projections: Vec<ProjectionEntry>,
}

impl ValuationEngine {
    /// Create an engine with the default five-year horizon
    ///
    /// `base_fcf` is the base-year free cash flow in millions.
    pub fn new(company_name: impl Into<String>, base_fcf: Decimal) -> Self {
        Self {
            company_name: company_name.into(),
            base_fcf,
            projection_years: DEFAULT_PROJECTION_YEARS,
            projections: Vec::new(),
        }
    }

    /// Set the explicit projection horizon
    pub fn with_projection_years(mut self, years: u32) -> Result<Self, ValuationError> {
        if years == 0 {
            return Err(ValuationError::ZeroProjectionYears);
        }
        self.projection_years = years;
        self.projections.clear();
        Ok(self)
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn base_fcf(&self) -> Decimal {
        self.base_fcf
    }

    pub fn projection_years(&self) -> u32 {
        self.projection_years
    }

    /// Last projection, empty until `project_cash_flows` succeeds
    pub fn projections(&self) -> &[ProjectionEntry] {
        &self.projections
    }

    /// Project free cash flows over the horizon
    ///
    /// Growth compounds year over year: each year's FCF is the prior
    /// year's projected FCF times `1 + g`, starting from the base FCF.
    /// Replaces any previous projection. On error the previous projection
    /// is kept.
    pub fn project_cash_flows(
        &mut self,
        growth_rates: &[Decimal],
    ) -> Result<&[ProjectionEntry], ValuationError> {
        let expected = self.projection_years as usize;
        if growth_rates.len() != expected {
            return Err(ValuationError::GrowthRateCount {
                expected,
                actual: growth_rates.len(),
            });
        }

        let mut fcf = self.base_fcf;
        let mut projections = Vec::with_capacity(expected);
        for (year, &growth_rate) in (1..=self.projection_years).zip(growth_rates) {
            let growth_factor = Decimal::ONE
                .checked_add(growth_rate)
                .ok_or(ValuationError::ArithmeticOverflow("growth factor"))?;
            fcf = fcf
                .checked_mul(growth_factor)
                .ok_or(ValuationError::ArithmeticOverflow("projected fcf"))?;
            debug!(year, %fcf, %growth_rate, "Projected FCF");
            projections.push(ProjectionEntry {
                year,
                fcf,
                growth_rate,
            });
        }

        self.projections = projections;
        Ok(&self.projections)
    }

    /// Present value of each projected FCF, in year order
    pub fn present_value_of_projections(
        &self,
        discount_rate: Decimal,
    ) -> Result<Vec<Decimal>, ValuationError> {
        if self.projections.is_empty() {
            return Err(ValuationError::NotProjected);
        }

        self.projections
            .iter()
            .map(|entry| present_value(entry.fcf, discount_rate, entry.year))
            .collect()
    }

    /// Terminal value at the end of the horizon (perpetuity growth method)
    pub fn terminal_value(
        &self,
        terminal_growth_rate: Decimal,
        discount_rate: Decimal,
    ) -> Result<Decimal, ValuationError> {
        let last = self
            .projections
            .last()
            .ok_or(ValuationError::NotProjected)?;
        perpetuity_value(last.fcf, terminal_growth_rate, discount_rate)
    }

    /// Project, discount and aggregate into enterprise value
    pub fn run_enterprise_valuation(
        &mut self,
        growth_rates: &[Decimal],
        terminal_growth_rate: Decimal,
        discount_rate: Decimal,
    ) -> Result<ValuationResult, ValuationError> {
        self.project_cash_flows(growth_rates)?;

        let pv_of_projected_fcfs = self
            .present_value_of_projections(discount_rate)?
            .into_iter()
            .try_fold(Decimal::ZERO, |sum, pv| sum.checked_add(pv))
            .ok_or(ValuationError::ArithmeticOverflow("sum of present values"))?;

        let terminal_value = self.terminal_value(terminal_growth_rate, discount_rate)?;
        let horizon_factor = compound_factor(discount_rate, self.projection_years)?;
        let pv_of_terminal_value = terminal_value
            .checked_div(horizon_factor)
            .ok_or(ValuationError::ArithmeticOverflow("pv of terminal value"))?;

        let enterprise_value = pv_of_projected_fcfs
            .checked_add(pv_of_terminal_value)
            .ok_or(ValuationError::ArithmeticOverflow("enterprise value"))?;

        debug!(
            company = %self.company_name,
            %pv_of_projected_fcfs,
            %terminal_value,
            %pv_of_terminal_value,
            %enterprise_value,
            "Enterprise valuation complete"
        );

        Ok(ValuationResult {
            pv_of_projected_fcfs,
            terminal_value,
            pv_of_terminal_value,
            enterprise_value,
        })
    }

    /// Bridge enterprise value to equity value and price per share
    ///
    /// `net_debt` and `shares_outstanding` are in millions.
    pub fn compute_equity_value(
        &self,
        enterprise_value: Decimal,
        net_debt: Decimal,
        shares_outstanding: Decimal,
    ) -> Result<EquityResult, ValuationError> {
        if shares_outstanding <= Decimal::ZERO {
            return Err(ValuationError::NonPositiveShares(shares_outstanding));
        }

        let equity_value = enterprise_value
            .checked_sub(net_debt)
            .ok_or(ValuationError::ArithmeticOverflow("equity value"))?;
        let price_per_share = equity_value
            .checked_div(shares_outstanding)
            .ok_or(ValuationError::ArithmeticOverflow("price per share"))?;

        Ok(EquityResult {
            equity_value,
            price_per_share,
        })
    }

    /// Enterprise valuation followed by the equity bridge
    pub fn run_full_valuation(
        &mut self,
        growth_rates: &[Decimal],
        terminal_growth_rate: Decimal,
        discount_rate: Decimal,
        net_debt: Decimal,
        shares_outstanding: Decimal,
    ) -> Result<FullValuation, ValuationError> {
        let enterprise =
            self.run_enterprise_valuation(growth_rates, terminal_growth_rate, discount_rate)?;
        let equity =
            self.compute_equity_value(enterprise.enterprise_value, net_debt, shares_outstanding)?;

        info!(
            company = %self.company_name,
            enterprise_value = %enterprise.enterprise_value,
            equity_value = %equity.equity_value,
            price_per_share = %equity.price_per_share,
            "DCF valuation complete"
        );

        Ok(FullValuation { enterprise, equity })
    }

    /// Run a full valuation from an assumption set
    pub fn run(
        &mut self,
        assumptions: &ValuationAssumptions,
    ) -> Result<FullValuation, ValuationError> {
        self.run_full_valuation(
            &assumptions.growth_rates,
            assumptions.terminal_growth_rate,
            assumptions.discount_rate,
            assumptions.net_debt,
            assumptions.shares_outstanding,
        )
    }
}
