use clap::Parser;
use std::path::{Path, PathBuf};

/// Rewrites a trader table so every trader quotes one currency.
#[derive(Parser, Debug, Clone)]
#[command(name = "traderfx", about = "Normalize trader price lists to a single currency")]
pub struct Config {
    /// Normalizer configuration (exchange rates, target currency, item templates)
    #[arg(long, env = "TRADERFX_CONFIG", default_value = "config/config.json")]
    pub config: PathBuf,

    /// Trader table to normalize, keyed by trader id
    #[arg(long, env = "TRADERFX_TRADERS", default_value = "db/traders.json")]
    pub traders: PathBuf,

    /// Where to write the normalized table (defaults to overwriting --traders)
    #[arg(long, env = "TRADERFX_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Run and log without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log output format: text or json
    #[arg(long, env = "TRADERFX_LOG_FORMAT", default_value = "text")]
    pub log_format: String,
}

impl Config {
    /// Parses arguments, with `.env` values available as fallbacks.
    pub fn from_args() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }

    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.traders)
    }
}
