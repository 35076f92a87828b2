//! traderfx Core - currency normalization for game server trader tables.
//!
//! The host loads the trader table and configuration; this crate rewrites
//! every trader's loyalty thresholds and currency prices in place so they all
//! quote a single target currency.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod logging;
pub mod traders;

pub use config::NormalizerConfig;
pub use fx::{Currency, CurrencyConverter, CurrencyIds, FxError};
pub use logging::{LogFacadeSink, LogSink, MockLogSink, NoOpLogSink};
pub use traders::{
    load_trader_table, save_trader_table, CurrencyNormalizer, NormalizationReport, Trader,
    TraderConversion, TraderTable,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
