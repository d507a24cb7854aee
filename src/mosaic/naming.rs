//! Output file naming for extracted tiles

use image::ImageFormat;

use crate::mosaic::errors::{MosaicError, MosaicResult};
use crate::mosaic::grid::TileCoordinate;

/// Minimum number of digits used for row and column indices
///
/// Three digits keep lexicographic order equal to grid order for grids of
/// up to 1000x1000 cells. Larger indices are written in full.
pub const COORD_WIDTH: usize = 3;

/// Maps grid coordinates to `{prefix}_{row}_{col}{ext}` file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingScheme {
    prefix: String,
    ext: String,
}

impl NamingScheme {
    /// Create a naming scheme; `prefix` and `ext` are used verbatim
    pub fn new(prefix: &str, ext: &str) -> MosaicResult<Self> {
        if prefix.is_empty() {
            return Err(MosaicError::InvalidConfig("prefix must not be empty".to_string()));
        }
        if ext.is_empty() {
            return Err(MosaicError::InvalidConfig("ext must not be empty".to_string()));
        }

        Ok(NamingScheme {
            prefix: prefix.to_string(),
            ext: ext.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// File name for one tile, e.g. `face_007_042.png`
    pub fn file_name(&self, coord: TileCoordinate) -> String {
        format!(
            "{}_{:0width$}_{:0width$}{}",
            self.prefix,
            coord.row,
            coord.col,
            self.ext,
            width = COORD_WIDTH
        )
    }

    /// Image format the extension stands for
    pub fn image_format(&self) -> MosaicResult<ImageFormat> {
        format_for_extension(&self.ext)
    }
}

/// Resolve an output extension such as `.png` or `JPG` to an encodable format
///
/// Formats `image` can only decode (e.g. `.dds`) are rejected here so that
/// no output is touched before the first tile would fail to encode.
pub fn format_for_extension(ext: &str) -> MosaicResult<ImageFormat> {
    let bare = ext.strip_prefix('.').unwrap_or(ext);
    let format = ImageFormat::from_extension(bare).ok_or_else(|| {
        MosaicError::InvalidConfig(format!("Unsupported output extension: {}", ext))
    })?;

    if !format.writing_enabled() {
        return Err(MosaicError::InvalidConfig(format!(
            "Cannot encode tiles as {:?} (extension {})",
            format, ext
        )));
    }

    Ok(format)
}
