use std::path::Path;

use super::traders_model::TraderTable;
use crate::errors::{Error, Result};

/// Loads a trader table from a JSON file keyed by trader id.
pub fn load_trader_table(path: impl AsRef<Path>) -> Result<TraderTable> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let traders: TraderTable = serde_json::from_str(&json)?;
    log::debug!("Loaded {} traders from {}", traders.len(), path.display());
    Ok(traders)
}

/// Writes a trader table as pretty-printed JSON, replacing the file.
pub fn save_trader_table(path: impl AsRef<Path>, traders: &TraderTable) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(traders)?;
    std::fs::write(path, json).map_err(|e| Error::io(path, e))?;
    log::debug!("Wrote {} traders to {}", traders.len(), path.display());
    Ok(())
}
