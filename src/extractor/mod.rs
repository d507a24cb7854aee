//! Tile extraction from mosaic textures
//!
//! This module cuts a decoded image into grid tiles and hands them to a
//! pluggable sink for persistence.

mod region;
mod sink;
mod tile_extractor;

pub use region::Region;
pub use sink::{DirectorySink, TileSink};
pub use tile_extractor::TileExtractor;
