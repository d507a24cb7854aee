//! Mosaic inspection command
//!
//! Reports how the configured grid lays over the source image without
//! writing any tiles.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::MosaicReport;
use crate::commands::command_traits::Command;
use crate::commands::config_args::config_from_args;
use crate::extractor::TileExtractor;
use crate::mosaic::config::ExtractionConfig;
use crate::mosaic::errors::MosaicResult;
use crate::utils::logger::Logger;

/// Command for inspecting a mosaic texture
pub struct InspectCommand<'a> {
    config: ExtractionConfig,
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> MosaicResult<Self> {
        let config = config_from_args(args)?;
        Ok(InspectCommand { config, logger })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> MosaicResult<()> {
        info!("Inspecting {}", self.config.input_path().display());

        let image = TileExtractor::open_source(self.config.input_path())?;
        let report = MosaicReport::new(&self.config, (image.width(), image.height()));
        if !report.fits() {
            warn!("Source image is smaller than the grid footprint");
        }

        self.logger.log(&report.to_string())?;
        println!("{}", report);

        Ok(())
    }
}
