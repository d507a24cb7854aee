//! Mosaic texture domain model
//!
//! This module provides the grid geometry, file naming, configuration and
//! validation used to split a sprite sheet into tiles.

pub mod errors;
pub mod grid;
pub mod naming;
pub mod config;
pub(crate) mod validation;
#[cfg(test)]
mod tests;

pub use errors::{MosaicError, MosaicResult};
pub use grid::{GridSpec, TileCoordinate};
pub use naming::{NamingScheme, COORD_WIDTH};
pub use config::{ExtractionConfig, ExtractionConfigBuilder};
