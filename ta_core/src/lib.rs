pub mod common;
pub mod config;
pub mod engine;
pub mod kline;
pub mod math;
pub mod signal;

pub use config::analyze_config::AnalyzeConfig;
pub use config::signal_config::{AggregationPolicy, SignalConfig};
pub use engine::engine::IndicatorEngine;
pub use engine::indicator_row::IndicatorRow;
pub use kline::bar::Bar;
pub use kline::series::BarSeries;
pub use signal::classifier::Classifier;
pub use signal::verdict::Verdict;
