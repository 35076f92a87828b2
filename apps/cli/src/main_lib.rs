use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use traderfx_core::{
    load_trader_table, save_trader_table, CurrencyNormalizer, NormalizationReport,
    NormalizerConfig,
};

use crate::config::Config;
use crate::log_sink::TracingLogSink;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Loads the configuration and trader table, normalizes, and writes the
/// table back unless this is a dry run.
pub fn run(config: &Config) -> anyhow::Result<NormalizationReport> {
    let normalizer_config = NormalizerConfig::from_file(&config.config)
        .with_context(|| format!("loading config from {}", config.config.display()))?;
    let mut traders = load_trader_table(&config.traders)
        .with_context(|| format!("loading traders from {}", config.traders.display()))?;

    tracing::info!(
        traders = traders.len(),
        target_currency = %normalizer_config.target_currency,
        "Normalizing trader currencies"
    );

    let normalizer =
        CurrencyNormalizer::new(normalizer_config).with_log_sink(Arc::new(TracingLogSink));
    let report = normalizer.normalize(&mut traders);

    tracing::info!(
        "{} items converted across {} traders ({} skipped)",
        report.total_items_converted(),
        report.traders.len(),
        report.skipped.len()
    );

    if config.dry_run {
        tracing::info!("Dry run, nothing written");
        return Ok(report);
    }

    let output = config.output_path();
    save_trader_table(output, &traders)
        .with_context(|| format!("writing traders to {}", output.display()))?;
    tracing::info!("Wrote {}", output.display());

    Ok(report)
}
