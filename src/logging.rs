//! File logging.
//!
//! The terminal belongs to the renderer, so log lines go to a file and only
//! when `SNAKE_LOG_PATH` is set.

use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::engine::SessionConfig;

/// Install the global logger if the config names a log file.
///
/// Returns whether a logger was installed.
pub fn init(config: &SessionConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("creating log file {}", path))?;
    let log_config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Debug)
        .set_target_level(LevelFilter::Off)
        .build();

    WriteLogger::init(LevelFilter::Debug, log_config, file).context("installing logger")?;
    Ok(true)
}
