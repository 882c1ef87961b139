//! Valuation types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad class of a valuation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied inputs the model cannot use
    InvalidInput,
    /// Operation requested before its prerequisites ran
    State,
}

/// Valuation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValuationError {
    /// Growth rate list does not cover the projection horizon
    #[error("Provide {expected} growth rates, got {actual}")]
    GrowthRateCount { expected: usize, actual: usize },
    /// Projection horizon of zero years
    #[error("Projection years must be positive")]
    ZeroProjectionYears,
    /// Gordon growth denominator is zero or negative
    #[error(
        "Discount rate must exceed terminal growth rate \
         (discount {discount_rate}, terminal growth {terminal_growth_rate})"
    )]
    DiscountRateNotAboveTerminalGrowth {
        discount_rate: Decimal,
        terminal_growth_rate: Decimal,
    },
    /// Shares outstanding must be strictly positive
    #[error("Shares outstanding must be positive, got {0}")]
    NonPositiveShares(Decimal),
    /// Decimal arithmetic overflowed or divided by zero
    #[error("Arithmetic overflow computing {0}")]
    ArithmeticOverflow(&'static str),
    /// Present or terminal value requested with no projections
    #[error("Project cash flows first")]
    NotProjected,
}

impl ValuationError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValuationError::NotProjected => ErrorKind::State,
            _ => ErrorKind::InvalidInput,
        }
    }
}

/// One year of the explicit projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionEntry {
    /// Projection year, starting at 1
    pub year: u32,
    /// Projected free cash flow (millions)
    pub fcf: Decimal,
    /// Growth applied from the prior year
    pub growth_rate: Decimal,
}

/// Enterprise value breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Sum of discounted explicit-period cash flows
    pub pv_of_projected_fcfs: Decimal,
    /// Undiscounted terminal value at the end of the horizon
    pub terminal_value: Decimal,
    /// Terminal value discounted to today
    pub pv_of_terminal_value: Decimal,
    /// PV of projected FCFs plus PV of terminal value
    pub enterprise_value: Decimal,
}

/// Enterprise-to-equity bridge output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityResult {
    /// Enterprise value less net debt
    pub equity_value: Decimal,
    /// Equity value per share
    pub price_per_share: Decimal,
}

/// Result of a complete valuation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullValuation {
    pub enterprise: ValuationResult,
    pub equity: EquityResult,
}

impl FullValuation {
    pub fn enterprise_value(&self) -> Decimal {
        self.enterprise.enterprise_value
    }

    pub fn equity_value(&self) -> Decimal {
        self.equity.equity_value
    }

    pub fn price_per_share(&self) -> Decimal {
        self.equity.price_per_share
    }
}

/// Inputs for a single valuation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationAssumptions {
    /// One growth rate per projection year, as decimals
    pub growth_rates: Vec<Decimal>,
    /// Perpetual growth after the explicit horizon
    pub terminal_growth_rate: Decimal,
    /// WACC used to discount every cash flow
    pub discount_rate: Decimal,
    /// Total debt minus cash (millions); negative means net cash
    pub net_debt: Decimal,
    /// Shares outstanding (millions)
    pub shares_outstanding: Decimal,
}
