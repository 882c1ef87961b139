//! dcf-valuation: discounted cash flow intrinsic valuation
//!
//! This library provides:
//! - Free cash flow projection with year-over-year compounding
//! - Present value discounting at WACC
//! - Terminal value via the perpetuity growth method
//! - Enterprise value and the bridge to equity value per share
//! - Text and JSON valuation reports
//! - TOML configuration, structured logging and a CLI

pub mod cli;
pub mod config;
pub mod report;
pub mod telemetry;
pub mod valuation;
