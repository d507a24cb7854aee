//! Custom error types for mosaic extraction

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use image::ImageError;

/// Mosaic extraction error types
#[derive(Debug)]
pub enum MosaicError {
    /// I/O error (directory creation, tile write)
    IoError(io::Error),
    /// Source image missing, unreadable or not a supported image
    DecodeError {
        path: PathBuf,
        source: ImageError,
    },
    /// Tile could not be encoded to the requested format
    EncodeError {
        path: PathBuf,
        source: ImageError,
    },
    /// Source image is smaller than the grid footprint
    DimensionError {
        actual_width: u32,
        actual_height: u32,
        expected_width: u32,
        expected_height: u32,
    },
    /// Rejected extraction parameters
    InvalidConfig(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosaicError::IoError(e) => write!(f, "I/O error: {}", e),
            MosaicError::DecodeError { path, source } => {
                write!(f, "Failed to decode image {}: {}", path.display(), source)
            }
            MosaicError::EncodeError { path, source } => {
                write!(f, "Failed to encode tile {}: {}", path.display(), source)
            }
            MosaicError::DimensionError {
                actual_width,
                actual_height,
                expected_width,
                expected_height,
            } => write!(
                f,
                "Image too small: got {}x{}, expected at least {}x{}",
                actual_width, actual_height, expected_width, expected_height
            ),
            MosaicError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            MosaicError::GenericError(msg) => write!(f, "Mosaic error: {}", msg),
        }
    }
}

impl Error for MosaicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MosaicError::IoError(e) => Some(e),
            MosaicError::DecodeError { source, .. } | MosaicError::EncodeError { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<io::Error> for MosaicError {
    fn from(error: io::Error) -> Self {
        MosaicError::IoError(error)
    }
}

impl From<String> for MosaicError {
    fn from(msg: String) -> Self {
        MosaicError::GenericError(msg)
    }
}

/// Result type for mosaic operations
pub type MosaicResult<T> = Result<T, MosaicError>;
