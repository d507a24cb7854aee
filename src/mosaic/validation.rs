//! Source image validation against the grid footprint

use log::debug;

use crate::mosaic::errors::{MosaicError, MosaicResult};
use crate::mosaic::grid::GridSpec;

/// Check that an image of `(width, height)` can hold the whole grid
///
/// Only a lower bound is enforced. Pixels to the right of or below the
/// footprint are never referenced by any tile and are not an error.
pub fn check_dimensions(dimensions: (u32, u32), grid: &GridSpec) -> MosaicResult<()> {
    let (actual_width, actual_height) = dimensions;
    let (expected_width, expected_height) = grid.footprint();

    debug!(
        "Validating source {}x{} against grid footprint {}x{}",
        actual_width, actual_height, expected_width, expected_height
    );

    if actual_width < expected_width || actual_height < expected_height {
        return Err(MosaicError::DimensionError {
            actual_width,
            actual_height,
            expected_width,
            expected_height,
        });
    }

    Ok(())
}

/// Pixels `(right, bottom)` of the source left outside every tile
pub fn unused_margin(dimensions: (u32, u32), grid: &GridSpec) -> (u32, u32) {
    let (expected_width, expected_height) = grid.footprint();
    (
        dimensions.0.saturating_sub(expected_width),
        dimensions.1.saturating_sub(expected_height),
    )
}
