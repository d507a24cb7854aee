//! Grid tile extraction
//!
//! The extractor validates a decoded source image against a `GridSpec`, cuts
//! it into `tile_size` squares in row-major order and hands each square to a
//! `TileSink`. Validation always completes before the sink is prepared, so a
//! rejected source leaves storage untouched.

use std::path::Path;

use image::DynamicImage;
use log::{debug, info, warn};

use crate::mosaic::config::ExtractionConfig;
use crate::mosaic::errors::{MosaicError, MosaicResult};
use crate::mosaic::grid::{GridSpec, TileCoordinate};
use crate::mosaic::validation;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

use super::sink::{DirectorySink, TileSink};

/// Splits mosaic textures into tiles
pub struct TileExtractor<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
    /// Whether to draw a progress bar while writing
    show_progress: bool,
}

impl<'a> TileExtractor<'a> {
    /// Create a new extractor
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    pub fn new(logger: &'a Logger) -> Self {
        TileExtractor {
            logger,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Decode the source image of a mosaic
    ///
    /// Any failure to open or decode is reported as `DecodeError`, including
    /// a missing file.
    pub fn open_source(path: &Path) -> MosaicResult<DynamicImage> {
        debug!("Decoding source image {}", path.display());
        image::open(path).map_err(|source| MosaicError::DecodeError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Cut the image into tiles, row by row
    ///
    /// This performs no validation; call `validation::check_dimensions` first
    /// or use `extract`, which does.
    pub fn tiles<'img>(
        image: &'img DynamicImage,
        grid: &GridSpec,
    ) -> impl Iterator<Item = (TileCoordinate, DynamicImage)> + 'img {
        let grid = *grid;
        grid.coordinates().map(move |coord| {
            let region = grid.region_of(coord);
            let tile = image.crop_imm(region.x, region.y, region.width, region.height);
            (coord, tile)
        })
    }

    /// Extract every tile of `grid` from `image` into `sink`
    ///
    /// # Arguments
    /// * `image` - Decoded source image
    /// * `grid` - Grid to cut along
    /// * `sink` - Destination for the tiles
    ///
    /// # Returns
    /// Number of tiles written (always `grid.tile_count()`), or the first error.
    /// Tiles written before a failing write are left in place.
    pub fn extract<S: TileSink + ?Sized>(
        &self,
        image: &DynamicImage,
        grid: &GridSpec,
        sink: &mut S,
    ) -> MosaicResult<usize> {
        validation::check_dimensions((image.width(), image.height()), grid)?;

        let (unused_right, unused_bottom) =
            validation::unused_margin((image.width(), image.height()), grid);
        if unused_right > 0 || unused_bottom > 0 {
            info!(
                "Ignoring {}px on the right and {}px at the bottom outside the grid",
                unused_right, unused_bottom
            );
        }

        sink.prepare()?;

        let progress = if self.show_progress {
            ProgressTracker::new(grid.tile_count(), "Extracting tiles")
        } else {
            ProgressTracker::hidden()
        };

        let mut count = 0;
        for (coord, tile) in Self::tiles(image, grid) {
            sink.write_tile(coord, &tile)?;
            count += 1;
            progress.increment(1);
        }
        progress.finish();

        // Every tile is on disk at this point; a failing log file must not
        // turn the result into an error
        if let Err(e) = self.logger.log(&format!(
            "Extracted {} tiles of {}px ({}x{} grid)",
            count,
            grid.tile_size(),
            grid.grid_w(),
            grid.grid_h()
        )) {
            warn!("Failed to record extraction summary: {}", e);
        }

        Ok(count)
    }

    /// Decode the configured source and write its tiles to the output directory
    pub fn extract_file(&self, config: &ExtractionConfig) -> MosaicResult<usize> {
        info!(
            "Extracting {}x{} tiles of {}px from {}",
            config.grid().grid_w(),
            config.grid().grid_h(),
            config.grid().tile_size(),
            config.input_path().display()
        );

        let image = Self::open_source(config.input_path())?;
        let mut sink = DirectorySink::from_config(config);
        self.extract(&image, config.grid(), &mut sink)
    }
}
