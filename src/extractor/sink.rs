//! Tile persistence
//!
//! A `TileSink` receives tiles from the extractor one at a time. The
//! extractor only hands tiles over after the source has passed validation,
//! so `prepare` is the first point at which a sink may touch storage.

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, ImageFormat};
use log::{debug, info};

use crate::mosaic::config::ExtractionConfig;
use crate::mosaic::errors::{MosaicError, MosaicResult};
use crate::mosaic::grid::TileCoordinate;
use crate::mosaic::naming::NamingScheme;

/// Destination for extracted tiles
pub trait TileSink {
    /// Called once, after validation and before the first tile
    fn prepare(&mut self) -> MosaicResult<()> {
        Ok(())
    }

    /// Persist one tile
    ///
    /// # Arguments
    /// * `coord` - Grid position of the tile
    /// * `tile` - Pixel data of the tile
    fn write_tile(&mut self, coord: TileCoordinate, tile: &DynamicImage) -> MosaicResult<()>;
}

/// Writes each tile as an image file inside one directory
///
/// The directory (and any missing parents) is created on `prepare`; existing
/// contents are left in place and colliding file names are overwritten.
pub struct DirectorySink {
    out_path: PathBuf,
    naming: NamingScheme,
    format: ImageFormat,
}

impl DirectorySink {
    pub fn new<P: AsRef<Path>>(out_path: P, naming: NamingScheme, format: ImageFormat) -> Self {
        DirectorySink {
            out_path: out_path.as_ref().to_path_buf(),
            naming,
            format,
        }
    }

    /// Sink writing to the output directory of a configuration
    pub fn from_config(config: &ExtractionConfig) -> Self {
        DirectorySink::new(config.out_path(), config.naming().clone(), config.format())
    }

    /// Full path a tile will be written to
    pub fn tile_path(&self, coord: TileCoordinate) -> PathBuf {
        self.out_path.join(self.naming.file_name(coord))
    }
}

impl TileSink for DirectorySink {
    fn prepare(&mut self) -> MosaicResult<()> {
        info!("Writing tiles to {}", self.out_path.display());
        fs::create_dir_all(&self.out_path)?;
        Ok(())
    }

    fn write_tile(&mut self, coord: TileCoordinate, tile: &DynamicImage) -> MosaicResult<()> {
        let path = self.tile_path(coord);
        debug!("Saving tile ({}, {}) to {}", coord.row, coord.col, path.display());

        tile.save_with_format(&path, self.format).map_err(|e| match e {
            ImageError::IoError(io_err) => MosaicError::IoError(io_err),
            other => MosaicError::EncodeError { path, source: other },
        })
    }
}
