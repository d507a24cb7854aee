//! Tests for source dimension validation

use crate::mosaic::errors::MosaicError;
use crate::mosaic::grid::GridSpec;
use crate::mosaic::validation::{check_dimensions, unused_margin};

#[test]
fn test_exact_fit_passes() {
    let grid = GridSpec::new(48, 2, 2).unwrap();
    assert!(check_dimensions((96, 96), &grid).is_ok());
}

#[test]
fn test_oversized_source_passes() {
    let grid = GridSpec::new(48, 2, 2).unwrap();
    assert!(check_dimensions((100, 131), &grid).is_ok());
    assert_eq!(unused_margin((100, 131), &grid), (4, 35));
}

#[test]
fn test_one_pixel_short_fails_with_dimensions() {
    let grid = GridSpec::new(48, 2, 2).unwrap();

    match check_dimensions((95, 96), &grid) {
        Err(MosaicError::DimensionError {
            actual_width,
            actual_height,
            expected_width,
            expected_height,
        }) => {
            assert_eq!((actual_width, actual_height), (95, 96));
            assert_eq!((expected_width, expected_height), (96, 96));
        }
        other => panic!("expected DimensionError, got {:?}", other),
    }

    assert!(matches!(
        check_dimensions((96, 95), &grid),
        Err(MosaicError::DimensionError { .. })
    ));
}

#[test]
fn test_dimension_error_message() {
    let grid = GridSpec::new(48, 45, 45).unwrap();
    let err = check_dimensions((2000, 2160), &grid).unwrap_err();
    assert_eq!(err.to_string(), "Image too small: got 2000x2160, expected at least 2160x2160");
}
