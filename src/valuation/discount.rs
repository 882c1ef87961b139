//! Discounting primitives
//!
//! Pure functions over `Decimal` that the engine composes:
//! - compounding: (1 + r)^n
//! - present value: CF / (1 + r)^n
//! - perpetuity growth: CF_n * (1 + g) / (r - g)

use super::ValuationError;
use rust_decimal::Decimal;

/// Compound growth factor `(1 + rate)^periods`
///
/// Computed by repeated multiplication so the result is exact to `Decimal`
/// precision and identical across runs.
pub fn compound_factor(rate: Decimal, periods: u32) -> Result<Decimal, ValuationError> {
    let step = Decimal::ONE
        .checked_add(rate)
        .ok_or(ValuationError::ArithmeticOverflow("compound step"))?;

    (0..periods).try_fold(Decimal::ONE, |factor, _| {
        factor
            .checked_mul(step)
            .ok_or(ValuationError::ArithmeticOverflow("compound factor"))
    })
}

/// Discount `amount` back `periods` years at `rate`
pub fn present_value(
    amount: Decimal,
    rate: Decimal,
    periods: u32,
) -> Result<Decimal, ValuationError> {
    let factor = compound_factor(rate, periods)?;
    amount
        .checked_div(factor)
        .ok_or(ValuationError::ArithmeticOverflow("present value"))
}

/// Terminal value under the perpetuity growth (Gordon) method
///
/// The cash flow after the explicit horizon is `final_cash_flow * (1 + g)`,
/// capitalised at `r - g`. Requires `r > g`.
pub fn perpetuity_value(
    final_cash_flow: Decimal,
    growth_rate: Decimal,
    discount_rate: Decimal,
) -> Result<Decimal, ValuationError> {
    if discount_rate <= growth_rate {
        return Err(ValuationError::DiscountRateNotAboveTerminalGrowth {
            discount_rate,
            terminal_growth_rate: growth_rate,
        });
    }

    let growth_factor = Decimal::ONE
        .checked_add(growth_rate)
        .ok_or(ValuationError::ArithmeticOverflow("terminal growth factor"))?;
    let capitalisation_rate = discount_rate
        .checked_sub(growth_rate)
        .ok_or(ValuationError::ArithmeticOverflow("capitalisation rate"))?;

    let next_cash_flow = final_cash_flow
        .checked_mul(growth_factor)
        .ok_or(ValuationError::ArithmeticOverflow("terminal cash flow"))?;

    next_cash_flow
        .checked_div(capitalisation_rate)
        .ok_or(ValuationError::ArithmeticOverflow("terminal value"))
}
