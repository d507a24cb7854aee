//! Tile extraction command
//!
//! This module implements the default command: split the source mosaic
//! into tiles and report how many were written.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::config_args::config_from_args;
use crate::extractor::TileExtractor;
use crate::mosaic::config::ExtractionConfig;
use crate::mosaic::errors::MosaicResult;
use crate::utils::logger::Logger;

/// Command for extracting tiles from a mosaic texture
pub struct ExtractCommand<'a> {
    /// Resolved extraction parameters
    config: ExtractionConfig,
    /// Whether to draw a progress bar
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MosaicResult<Self> {
        info!("Creating new extract command from arguments");

        let config = config_from_args(args)?;
        let show_progress = !args.get_flag("no-progress");

        Ok(ExtractCommand {
            config,
            show_progress,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> MosaicResult<()> {
        let count = TileExtractor::new(self.logger)
            .with_progress(self.show_progress)
            .extract_file(&self.config)?;

        info!("Tile extraction successful");
        println!("Extracted {} tiles!", count);

        Ok(())
    }
}
