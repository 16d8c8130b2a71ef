//! Sales aggregation module
//!
//! This module contains the summing engine, pipeline configuration, and run
//! statistics.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::PipelineConfig;
pub use engine::{read_sale_total, sum_sales, SalesSummary};
pub use stats::RunStats;
