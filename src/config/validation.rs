use super::defaults::{MAX_BUFFER_SIZE, MAX_GRID_SIZE, MAX_SEQUENCE_COUNT, MIN_GRID_SIZE};
use super::AppConfig;
use anyhow::{bail, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check puzzle dimensions against each other and the supported bounds.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            bail!(
                "--grid-size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}, got {}",
                self.grid_size
            );
        }
        if !(1..=MAX_BUFFER_SIZE).contains(&self.buffer_size) {
            bail!(
                "--buffer-size must be between 1 and {MAX_BUFFER_SIZE}, got {}",
                self.buffer_size
            );
        }
        if !(1..=MAX_SEQUENCE_COUNT).contains(&self.sequence_count) {
            bail!(
                "--sequences must be between 1 and {MAX_SEQUENCE_COUNT}, got {}",
                self.sequence_count
            );
        }
        if self.sequence_length == 0 || self.sequence_length > self.buffer_size {
            bail!(
                "--sequence-length must be between 1 and --buffer-size ({}), got {}",
                self.buffer_size,
                self.sequence_length
            );
        }
        Ok(())
    }
}
