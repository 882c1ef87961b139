//! Integration tests for configuration loading

use dcf_valuation::config::{Config, ConfigSource};
use rust_decimal_macros::dec;
use std::io::Write;

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [valuation]
        company_name = "Tesla"
        base_fcf = 13000
        projection_years = 3
        growth_rates = [0.20, 0.15, 0.10]
        terminal_growth_rate = 0.03
        discount_rate = 0.10
        net_debt = -15000
        shares_outstanding = 3200
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.valuation.company_name, "Tesla");
    assert_eq!(config.valuation.net_debt, dec!(-15000));

    let mut engine = config.valuation.engine().unwrap();
    let full = engine.run(&config.valuation.assumptions()).unwrap();
    // Net cash adds to equity
    assert_eq!(full.equity_value(), full.enterprise_value() + dec!(15000));
}

#[test]
fn test_config_load_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[valuation]\ncompany_name = ").unwrap();
    assert!(Config::load(file.path()).is_err());
}

#[test]
fn test_config_serialize_round_trip() {
    let config = Config::example().unwrap();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed.valuation.base_fcf, config.valuation.base_fcf);
    assert_eq!(parsed.valuation.growth_rates, config.valuation.growth_rates);
}

#[test]
fn test_malformed_config_is_not_replaced_by_example() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[valuation]\ncompany_name = \"Typo Co\"\nbase_fcf = ").unwrap();

    let err = Config::load_or_example(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("parsing"));
}

#[test]
fn test_existing_config_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [valuation]
        company_name = "Apple"
        base_fcf = 110000
        growth_rates = [0.05, 0.05, 0.05, 0.05, 0.05]
        terminal_growth_rate = 0.02
        discount_rate = 0.08
        shares_outstanding = 15500
        "#
    )
    .unwrap();

    let (config, source) = Config::load_or_example(file.path()).unwrap();
    assert_eq!(source, ConfigSource::File);
    assert_eq!(config.valuation.company_name, "Apple");
}
