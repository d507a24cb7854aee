//! Extraction configuration
//!
//! `ExtractionConfig` bundles the seven named options of an extraction run.
//! It is only obtainable through `ExtractionConfigBuilder::build`, so every
//! config in circulation has already been validated. The builder starts from
//! the built-in defaults and can be seeded from a TOML file with a `[mosaic]`
//! table before individual values are overridden.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::debug;

use crate::mosaic::errors::{MosaicError, MosaicResult};
use crate::mosaic::grid::GridSpec;
use crate::mosaic::naming::NamingScheme;

pub const DEFAULT_INPUT_PATH: &str = "data/mosaic_texture/25745_avatars.png";
pub const DEFAULT_OUT_PATH: &str = "data/mosaics";
pub const DEFAULT_TILE_SIZE: u32 = 48;
pub const DEFAULT_GRID_W: u32 = 45;
pub const DEFAULT_GRID_H: u32 = 45;
pub const DEFAULT_PREFIX: &str = "face";
pub const DEFAULT_EXT: &str = ".png";

// Name of the table holding extraction options in a config file
const CONFIG_TABLE: &str = "mosaic";

/// Validated parameters for one extraction run
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    input_path: PathBuf,
    out_path: PathBuf,
    grid: GridSpec,
    naming: NamingScheme,
    format: ImageFormat,
}

impl ExtractionConfig {
    /// Start a builder with every option at its default
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::default()
    }

    /// Default configuration for the given source image
    pub fn for_input<P: AsRef<Path>>(input_path: P) -> MosaicResult<Self> {
        Self::builder().input_path(input_path).build()
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn naming(&self) -> &NamingScheme {
        &self.naming
    }

    /// Encoding used for every tile, derived from the extension
    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

/// Builder for `ExtractionConfig`
#[derive(Debug, Clone)]
pub struct ExtractionConfigBuilder {
    input_path: PathBuf,
    out_path: PathBuf,
    tile_size: u32,
    grid_w: u32,
    grid_h: u32,
    prefix: String,
    ext: String,
}

impl Default for ExtractionConfigBuilder {
    fn default() -> Self {
        ExtractionConfigBuilder {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            out_path: PathBuf::from(DEFAULT_OUT_PATH),
            tile_size: DEFAULT_TILE_SIZE,
            grid_w: DEFAULT_GRID_W,
            grid_h: DEFAULT_GRID_H,
            prefix: DEFAULT_PREFIX.to_string(),
            ext: DEFAULT_EXT.to_string(),
        }
    }
}

impl ExtractionConfigBuilder {
    /// Seed a builder from a TOML document
    ///
    /// Options are read from the `[mosaic]` table; missing keys keep their
    /// defaults and unknown keys are ignored.
    ///
    /// # Arguments
    /// * `content` - TOML source text
    ///
    /// # Returns
    /// A builder, or `InvalidConfig` if the document or a value is malformed
    pub fn from_toml_str(content: &str) -> MosaicResult<Self> {
        let document: toml::Table = content
            .parse()
            .map_err(|e| MosaicError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?;

        let mut builder = ExtractionConfigBuilder::default();

        let table = match document.get(CONFIG_TABLE) {
            Some(value) => value.as_table().ok_or_else(|| {
                MosaicError::InvalidConfig(format!("[{}] must be a table", CONFIG_TABLE))
            })?,
            None => {
                debug!("No [{}] table in configuration, using defaults", CONFIG_TABLE);
                return Ok(builder);
            }
        };

        if let Some(value) = Self::read_string(table, "input_path")? {
            builder.input_path = PathBuf::from(value);
        }
        if let Some(value) = Self::read_string(table, "out_path")? {
            builder.out_path = PathBuf::from(value);
        }
        if let Some(value) = Self::read_u32(table, "tile_size")? {
            builder.tile_size = value;
        }
        if let Some(value) = Self::read_u32(table, "grid_w")? {
            builder.grid_w = value;
        }
        if let Some(value) = Self::read_u32(table, "grid_h")? {
            builder.grid_h = value;
        }
        if let Some(value) = Self::read_string(table, "prefix")? {
            builder.prefix = value;
        }
        if let Some(value) = Self::read_string(table, "ext")? {
            builder.ext = value;
        }

        Ok(builder)
    }

    /// Seed a builder from a TOML file on disk
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> MosaicResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn input_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.input_path = path.as_ref().to_path_buf();
        self
    }

    pub fn out_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.out_path = path.as_ref().to_path_buf();
        self
    }

    pub fn tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn grid_w(mut self, grid_w: u32) -> Self {
        self.grid_w = grid_w;
        self
    }

    pub fn grid_h(mut self, grid_h: u32) -> Self {
        self.grid_h = grid_h;
        self
    }

    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn ext(mut self, ext: &str) -> Self {
        self.ext = ext.to_string();
        self
    }

    /// Validate the options and produce the final configuration
    pub fn build(self) -> MosaicResult<ExtractionConfig> {
        let grid = GridSpec::new(self.tile_size, self.grid_w, self.grid_h)?;
        let naming = NamingScheme::new(&self.prefix, &self.ext)?;
        let format = naming.image_format()?;

        Ok(ExtractionConfig {
            input_path: self.input_path,
            out_path: self.out_path,
            grid,
            naming,
            format,
        })
    }

    fn read_string(table: &toml::Table, key: &str) -> MosaicResult<Option<String>> {
        match table.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| MosaicError::InvalidConfig(format!("'{}' must be a string", key))),
        }
    }

    fn read_u32(table: &toml::Table, key: &str) -> MosaicResult<Option<u32>> {
        match table.get(key) {
            None => Ok(None),
            Some(value) => {
                let raw = value.as_integer().ok_or_else(|| {
                    MosaicError::InvalidConfig(format!("'{}' must be an integer", key))
                })?;
                u32::try_from(raw).map(Some).map_err(|_| {
                    MosaicError::InvalidConfig(format!("'{}' out of range: {}", key, raw))
                })
            }
        }
    }
}
