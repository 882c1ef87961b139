//! End-to-end integration tests

use dcf_valuation::config::Config;
use dcf_valuation::report::ValuationReport;
use dcf_valuation::valuation::ValuationEngine;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_microsoft_example_valuation() {
    let mut engine = ValuationEngine::new("Microsoft", dec!(45000));
    let growth = [dec!(0.08), dec!(0.08), dec!(0.07), dec!(0.07), dec!(0.06)];

    let full = engine
        .run_full_valuation(&growth, dec!(0.025), dec!(0.07), dec!(0), dec!(8400))
        .unwrap();

    // 45000 * 1.08 * 1.08 * 1.07 * 1.07 * 1.06
    assert_eq!(engine.projections()[4].fcf, dec!(63699.121872));

    let ev = &full.enterprise;
    assert_close(
        ev.pv_of_projected_fcfs,
        dec!(228372.31019645841003132135),
        dec!(0.000001),
    );
    assert_close(ev.terminal_value, dec!(1450924.44264), dec!(0.000001));
    assert_close(
        ev.pv_of_terminal_value,
        dec!(1034489.07507736463128233050),
        dec!(0.000001),
    );
    assert_close(
        full.enterprise_value(),
        dec!(1262861.38527382304131365185),
        dec!(0.000001),
    );
    assert_eq!(full.equity_value(), full.enterprise_value());
    assert_close(
        full.price_per_share(),
        dec!(150.340641104026552537339506),
        dec!(0.000001),
    );
}

#[test]
fn test_example_config_report() {
    let config = Config::example().unwrap();
    let mut engine = config.valuation.engine().unwrap();
    let assumptions = config.valuation.assumptions();
    let full = engine.run(&assumptions).unwrap();
    let report = ValuationReport::new(&engine, &assumptions, full);

    let text = report.format_table();
    assert!(text.contains("DCF VALUATION MODEL - MICROSOFT"));
    assert!(text.contains("$45,000.0M"));
    assert!(text.contains("$63,699.1M"));
    assert!(text.contains("$1,450,924.4M"));
    assert!(text.contains("$1,262,861.4M"));
    assert!(text.contains("$150.34"));
    assert!(text.contains("8,400.0M"));
}
