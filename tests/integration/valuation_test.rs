//! Integration tests for the valuation engine

use dcf_valuation::valuation::{ErrorKind, ValuationEngine, ValuationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn growth_sets() -> Vec<Vec<Decimal>> {
    vec![
        vec![dec!(0.08), dec!(0.08), dec!(0.07), dec!(0.07), dec!(0.06)],
        vec![dec!(0), dec!(0), dec!(0), dec!(0), dec!(0)],
        vec![dec!(-0.10), dec!(0.25), dec!(0.03), dec!(-0.02), dec!(0.5)],
        vec![dec!(1.0), dec!(1.0), dec!(1.0), dec!(1.0), dec!(1.0)],
    ]
}

#[test]
fn test_projection_chains_on_prior_year() {
    for growth in growth_sets() {
        let mut engine = ValuationEngine::new("Chain Co", dec!(250));
        let projections = engine.project_cash_flows(&growth).unwrap().to_vec();

        assert_eq!(projections.len(), 5);
        let mut prior = dec!(250);
        for (i, entry) in projections.iter().enumerate() {
            assert_eq!(entry.year, i as u32 + 1);
            assert_eq!(entry.growth_rate, growth[i]);
            assert_eq!(entry.fcf, prior * (Decimal::ONE + growth[i]));
            prior = entry.fcf;
        }
    }
}

#[test]
fn test_custom_horizon() {
    let mut engine = ValuationEngine::new("Long Co", dec!(10))
        .with_projection_years(10)
        .unwrap();
    let projections = engine.project_cash_flows(&[dec!(0.05); 10]).unwrap();
    assert_eq!(projections.len(), 10);
    assert_eq!(projections[9].year, 10);

    let err = engine.project_cash_flows(&[dec!(0.05); 5]).unwrap_err();
    assert_eq!(
        err,
        ValuationError::GrowthRateCount {
            expected: 10,
            actual: 5
        }
    );
}

#[test]
fn test_state_errors_before_projection() {
    let engine = ValuationEngine::new("Fresh Co", dec!(100));
    assert_eq!(
        engine.present_value_of_projections(dec!(0.07)).unwrap_err().kind(),
        ErrorKind::State
    );
    assert_eq!(
        engine.terminal_value(dec!(0.02), dec!(0.07)).unwrap_err().kind(),
        ErrorKind::State
    );
}

#[test]
fn test_failed_growth_count_leaves_engine_unprojected() {
    let mut engine = ValuationEngine::new("Fresh Co", dec!(100));
    let err = engine.project_cash_flows(&[dec!(0.05); 6]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(engine.projections().is_empty());
    assert_eq!(
        engine.terminal_value(dec!(0.02), dec!(0.07)).unwrap_err(),
        ValuationError::NotProjected
    );
}

#[test]
fn test_discount_rate_must_exceed_terminal_growth() {
    let mut engine = ValuationEngine::new("Rates Co", dec!(100));
    let growth = [dec!(0.05); 5];

    for (terminal, discount) in [(dec!(0.07), dec!(0.07)), (dec!(0.09), dec!(0.07))] {
        let err = engine
            .run_enterprise_valuation(&growth, terminal, discount)
            .unwrap_err();
        assert_eq!(
            err,
            ValuationError::DiscountRateNotAboveTerminalGrowth {
                discount_rate: discount,
                terminal_growth_rate: terminal,
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn test_non_positive_shares() {
    let mut engine = ValuationEngine::new("Shares Co", dec!(100));
    let growth = [dec!(0.05); 5];
    let err = engine
        .run_full_valuation(&growth, dec!(0.02), dec!(0.08), dec!(0), dec!(-1))
        .unwrap_err();
    assert_eq!(err, ValuationError::NonPositiveShares(dec!(-1)));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_enterprise_valuation_idempotent() {
    let mut engine = ValuationEngine::new("Repeat Co", dec!(45000));
    let growth = [dec!(0.08), dec!(0.08), dec!(0.07), dec!(0.07), dec!(0.06)];

    let first = engine
        .run_enterprise_valuation(&growth, dec!(0.025), dec!(0.07))
        .unwrap();
    let second = engine
        .run_enterprise_valuation(&growth, dec!(0.025), dec!(0.07))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_enterprise_value_is_sum_of_parts() {
    for growth in growth_sets() {
        let mut engine = ValuationEngine::new("Sum Co", dec!(1234.5));
        let result = engine
            .run_enterprise_valuation(&growth, dec!(0.02), dec!(0.09))
            .unwrap();
        assert_eq!(
            result.enterprise_value,
            result.pv_of_projected_fcfs + result.pv_of_terminal_value
        );

        let pv_sum: Decimal = engine
            .present_value_of_projections(dec!(0.09))
            .unwrap()
            .into_iter()
            .sum();
        assert_eq!(result.pv_of_projected_fcfs, pv_sum);
    }
}

#[test]
fn test_equity_bridge_invariants() {
    let mut engine = ValuationEngine::new("Bridge Co", dec!(500));
    let growth = [dec!(0.04); 5];
    let full = engine
        .run_full_valuation(&growth, dec!(0.02), dec!(0.08), dec!(1200), dec!(50))
        .unwrap();
    assert_eq!(full.equity_value(), full.enterprise_value() - dec!(1200));
    assert_eq!(full.price_per_share(), full.equity_value() / dec!(50));
}
