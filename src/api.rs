use std::fmt;
use std::path::PathBuf;

use log::info;

use crate::extractor::TileExtractor;
use crate::mosaic::config::ExtractionConfig;
use crate::mosaic::errors::MosaicResult;
use crate::mosaic::grid::TileCoordinate;
use crate::mosaic::validation;
use crate::utils::logger::Logger;

/// Split a mosaic texture into tiles on disk
///
/// Writes `grid_w * grid_h` files named `{prefix}_{row:03}_{col:03}{ext}`
/// into the configured output directory and returns how many were written.
///
/// # Arguments
/// * `config` - Validated extraction parameters
///
/// # Returns
/// The tile count, or the first `DimensionError`, `DecodeError` or I/O error
pub fn extract_mosaic_tiles(config: &ExtractionConfig) -> MosaicResult<usize> {
    let logger = Logger::disabled();
    TileExtractor::new(&logger).extract_file(config)
}

/// Summary of how a grid lays over a source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicReport {
    pub input_path: PathBuf,
    pub image_width: u32,
    pub image_height: u32,
    pub footprint_width: u32,
    pub footprint_height: u32,
    pub tile_count: u64,
    /// Pixels to the right of the grid that no tile uses
    pub unused_right: u32,
    /// Pixels below the grid that no tile uses
    pub unused_bottom: u32,
    pub first_file: String,
    pub last_file: String,
}

impl MosaicReport {
    /// Describe how the grid of `config` lays over an image of `dimensions`
    pub fn new(config: &ExtractionConfig, dimensions: (u32, u32)) -> Self {
        let grid = config.grid();
        let naming = config.naming();
        let (footprint_width, footprint_height) = grid.footprint();
        let (unused_right, unused_bottom) = validation::unused_margin(dimensions, grid);
        let last = TileCoordinate::new(grid.grid_h() - 1, grid.grid_w() - 1);

        MosaicReport {
            input_path: config.input_path().to_path_buf(),
            image_width: dimensions.0,
            image_height: dimensions.1,
            footprint_width,
            footprint_height,
            tile_count: grid.tile_count(),
            unused_right,
            unused_bottom,
            first_file: naming.file_name(TileCoordinate::new(0, 0)),
            last_file: naming.file_name(last),
        }
    }

    /// Whether the image is large enough for the grid
    pub fn fits(&self) -> bool {
        self.image_width >= self.footprint_width && self.image_height >= self.footprint_height
    }
}

impl fmt::Display for MosaicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mosaic Inspection Results:")?;
        writeln!(f, "  Source: {}", self.input_path.display())?;
        writeln!(f, "  Image size: {}x{}", self.image_width, self.image_height)?;
        writeln!(f, "  Grid footprint: {}x{}", self.footprint_width, self.footprint_height)?;
        writeln!(f, "  Tiles: {}", self.tile_count)?;
        if self.fits() {
            writeln!(f, "  Fits: yes")?;
            writeln!(f, "  Unused pixels: {} right, {} bottom", self.unused_right, self.unused_bottom)?;
        } else {
            writeln!(f, "  Fits: no (image too small)")?;
        }
        write!(f, "  Files: {} .. {}", self.first_file, self.last_file)
    }
}

/// Main interface to the MosaicKit library
pub struct MosaicKit {
    logger: Logger,
    show_progress: bool,
}

impl MosaicKit {
    /// Create a new MosaicKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a log file; without one nothing is written
    ///
    /// # Returns
    /// A MosaicKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> MosaicResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(MosaicKit { logger, show_progress: false })
    }

    /// Show a progress bar during extraction
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Extract all tiles described by `config`
    ///
    /// # Returns
    /// Number of tiles written
    pub fn extract(&self, config: &ExtractionConfig) -> MosaicResult<usize> {
        let count = TileExtractor::new(&self.logger)
            .with_progress(self.show_progress)
            .extract_file(config)?;
        info!("Extracted {} tiles into {}", count, config.out_path().display());
        Ok(count)
    }

    /// Inspect how the configured grid fits the source image without writing
    ///
    /// A source that is too small is reported, not treated as an error.
    pub fn inspect(&self, config: &ExtractionConfig) -> MosaicResult<MosaicReport> {
        let image = TileExtractor::open_source(config.input_path())?;
        let report = MosaicReport::new(config, (image.width(), image.height()));

        self.logger.log(&report.to_string())?;
        Ok(report)
    }
}
