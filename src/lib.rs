pub mod mosaic;
pub mod extractor;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{extract_mosaic_tiles, MosaicKit, MosaicReport};

pub use mosaic::{ExtractionConfig, ExtractionConfigBuilder, GridSpec, MosaicError, MosaicResult, NamingScheme, TileCoordinate};
pub use extractor::{DirectorySink, Region, TileExtractor, TileSink};
