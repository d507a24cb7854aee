//! Region structure for defining a tile's area
//!
//! The coordinates are in pixels and follow the usual image coordinate
//! system where (0,0) is the top-left corner of the source image.

/// Rectangular pixel area of the source image
///
/// Represents a rectangle by its top-left corner and dimensions. Every tile
/// of a mosaic is cut out along one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Whether the region lies entirely inside an image of the given size
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.end_x() <= width && self.end_y() <= height
    }
}
