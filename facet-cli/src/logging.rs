use std::fs::{self, File};
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::{CliError, Result};

/// Send all log output to `path`, truncating any previous run's log.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| CliError::io(path, e))?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
