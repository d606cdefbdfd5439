use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment override for the data directory (used by tests and
/// sandboxed runs)
pub const DATA_DIR_ENV: &str = "NUMCONVERT_DATA_DIR";

/// Resolve the directory holding the persisted history and theme.
/// `NUMCONVERT_DATA_DIR` wins when set; otherwise the platform data
/// directory with a `numconvert` subdirectory.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join("numconvert"))
}
