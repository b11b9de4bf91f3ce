use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "Recursive Whitted-style ray tracer", version)]
pub struct Args {
    /// JSON settings file; any field left out keeps its default
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Supersampling factor S (S x S samples per pixel)
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Deepest reflection/refraction level that is still shaded
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Worker threads (defaults to one per hardware thread)
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// OBJ model to add to the demo scene
    #[arg(long)]
    pub mesh: Option<PathBuf>,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Logging level (RUST_LOG still applies per module)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Initialize the logger with the specified level.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
