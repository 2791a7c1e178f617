//! Command-line parsing and validation helpers.

mod defaults;
#[cfg(test)]
mod tests;
mod validation;

use clap::Parser;

pub use defaults::{
    DEFAULT_BUFFER_SIZE, DEFAULT_GRID_SIZE, DEFAULT_SEQUENCE_COUNT, DEFAULT_SEQUENCE_LENGTH,
    MAX_BUFFER_SIZE, MAX_GRID_SIZE, MAX_SEQUENCE_COUNT, MIN_GRID_SIZE,
};

/// CLI options for a breach session. Validated values keep the puzzle well-formed.
#[derive(Debug, Parser, Clone)]
#[command(about = "Breach Protocol", author, version)]
pub struct AppConfig {
    /// Width and height of the code matrix
    #[arg(long = "grid-size", default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Number of slots in the selection buffer
    #[arg(long = "buffer-size", default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,

    /// Number of target sequences to upload
    #[arg(long = "sequences", default_value_t = DEFAULT_SEQUENCE_COUNT)]
    pub sequence_count: usize,

    /// Length of each target sequence
    #[arg(long = "sequence-length", default_value_t = DEFAULT_SEQUENCE_LENGTH)]
    pub sequence_length: usize,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable colors in the rendered frame
    #[arg(long = "no-color", default_value_t = false)]
    pub no_color: bool,

    /// Skip the logo and instructions printed before the session
    #[arg(long = "no-banner", default_value_t = false)]
    pub no_banner: bool,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "BREACH_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "BREACH_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,
}

impl AppConfig {
    /// Whether file logging and tracing should be enabled for this run.
    pub fn logging_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }
}
