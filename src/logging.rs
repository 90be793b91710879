//! File logger for the terminal binary.
//!
//! Stdout belongs to the game screen, so records go to `TETRIS_LOG_PATH`
//! or nowhere at all.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};

struct FileLogger {
    file: Mutex<File>,
    started: Instant,
    level: LevelFilter,
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.elapsed();
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "[{:>5}.{:03}] {:<5} {}: {}",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the global logger. Without a path logging stays off.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = path else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
        started: Instant::now(),
        level,
    }))
    .context("installing logger")?;
    log::set_max_level(level);
    Ok(())
}
