//! Grid geometry for mosaic textures
//!
//! A mosaic is described by a `GridSpec`: `grid_h` rows by `grid_w` columns of
//! square cells, each `tile_size` pixels wide, anchored at the top-left corner
//! of the source image with no gaps or overlaps. Every cell is addressed by a
//! `TileCoordinate`.

use crate::extractor::Region;
use crate::mosaic::errors::{MosaicError, MosaicResult};

/// Position of one cell within the grid (zero-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoordinate {
    /// Row index, counted from the top
    pub row: u32,
    /// Column index, counted from the left
    pub col: u32,
}

impl TileCoordinate {
    pub fn new(row: u32, col: u32) -> Self {
        TileCoordinate { row, col }
    }

    /// Pixel region covered by this cell for the given tile size
    ///
    /// The region spans `[col*tile_size, (col+1)*tile_size)` horizontally and
    /// `[row*tile_size, (row+1)*tile_size)` vertically.
    pub fn region(&self, tile_size: u32) -> Region {
        Region::new(self.col * tile_size, self.row * tile_size, tile_size, tile_size)
    }
}

/// Immutable grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    tile_size: u32,
    grid_w: u32,
    grid_h: u32,
}

impl GridSpec {
    /// Create a new grid specification
    ///
    /// # Arguments
    /// * `tile_size` - Width/height of each tile in pixels
    /// * `grid_w` - Number of columns
    /// * `grid_h` - Number of rows
    ///
    /// # Returns
    /// The grid, or `InvalidConfig` if any value is zero or the footprint
    /// does not fit in 32-bit pixel coordinates
    pub fn new(tile_size: u32, grid_w: u32, grid_h: u32) -> MosaicResult<Self> {
        if tile_size == 0 {
            return Err(MosaicError::InvalidConfig("tile_size must be positive".to_string()));
        }
        if grid_w == 0 || grid_h == 0 {
            return Err(MosaicError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                grid_w, grid_h
            )));
        }
        if grid_w.checked_mul(tile_size).is_none() || grid_h.checked_mul(tile_size).is_none() {
            return Err(MosaicError::InvalidConfig(format!(
                "grid footprint {}x{} tiles of {}px exceeds the addressable pixel range",
                grid_w, grid_h, tile_size
            )));
        }

        Ok(GridSpec { tile_size, grid_w, grid_h })
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn grid_w(&self) -> u32 {
        self.grid_w
    }

    pub fn grid_h(&self) -> u32 {
        self.grid_h
    }

    /// Pixel size `(width, height)` of the area covered by the grid
    pub fn footprint(&self) -> (u32, u32) {
        // Overflow is ruled out in `new`
        (self.grid_w * self.tile_size, self.grid_h * self.tile_size)
    }

    /// Total number of cells
    pub fn tile_count(&self) -> u64 {
        u64::from(self.grid_w) * u64::from(self.grid_h)
    }

    pub fn contains(&self, coord: TileCoordinate) -> bool {
        coord.row < self.grid_h && coord.col < self.grid_w
    }

    /// Iterate all cells in row-major order
    ///
    /// Row 0 is emitted in full (every column, ascending) before row 1 begins.
    pub fn coordinates(&self) -> impl Iterator<Item = TileCoordinate> {
        let grid_w = self.grid_w;
        (0..self.grid_h).flat_map(move |row| (0..grid_w).map(move |col| TileCoordinate::new(row, col)))
    }

    /// Pixel region of a cell
    pub fn region_of(&self, coord: TileCoordinate) -> Region {
        coord.region(self.tile_size)
    }
}
