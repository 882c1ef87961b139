//! DCF valuation module
//!
//! Projects free cash flow, discounts it at WACC, adds a perpetuity-growth
//! terminal value and bridges enterprise value to equity value per share.

pub mod discount;
mod engine;
mod types;

pub use engine::{ValuationEngine, DEFAULT_PROJECTION_YEARS};
pub use types::{
    EquityResult, ErrorKind, FullValuation, ProjectionEntry, ValuationAssumptions,
    ValuationError, ValuationResult,
};
