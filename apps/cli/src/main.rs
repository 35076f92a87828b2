mod config;
mod log_sink;
mod main_lib;

use config::Config;
use main_lib::{init_tracing, run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_args();
    init_tracing(&config.log_format);
    run(&config)?;
    Ok(())
}
