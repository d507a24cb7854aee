//! Tests for tile file naming

use std::collections::HashSet;

use image::ImageFormat;

use crate::mosaic::errors::MosaicError;
use crate::mosaic::grid::{GridSpec, TileCoordinate};
use crate::mosaic::naming::{format_for_extension, NamingScheme};

#[test]
fn test_file_name_is_zero_padded() {
    let naming = NamingScheme::new("face", ".png").unwrap();
    assert_eq!(naming.file_name(TileCoordinate::new(7, 42)), "face_007_042.png");
    assert_eq!(naming.file_name(TileCoordinate::new(0, 0)), "face_000_000.png");
    assert_eq!(naming.file_name(TileCoordinate::new(44, 44)), "face_044_044.png");
}

#[test]
fn test_file_name_beyond_padding_width() {
    let naming = NamingScheme::new("t", ".png").unwrap();
    assert_eq!(naming.file_name(TileCoordinate::new(1234, 5)), "t_1234_005.png");
}

#[test]
fn test_prefix_and_ext_are_verbatim() {
    let naming = NamingScheme::new("my sprite", ".PNG").unwrap();
    assert_eq!(naming.file_name(TileCoordinate::new(1, 2)), "my sprite_001_002.PNG");
}

#[test]
fn test_empty_parts_rejected() {
    assert!(matches!(NamingScheme::new("", ".png"), Err(MosaicError::InvalidConfig(_))));
    assert!(matches!(NamingScheme::new("face", ""), Err(MosaicError::InvalidConfig(_))));
}

#[test]
fn test_names_are_unique_and_sort_in_grid_order() {
    let naming = NamingScheme::new("face", ".png").unwrap();
    let grid = GridSpec::new(1, 12, 11).unwrap();

    let names: Vec<String> = grid.coordinates().map(|c| naming.file_name(c)).collect();
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(sorted, names);
}

#[test]
fn test_format_for_extension() {
    assert_eq!(format_for_extension(".png").unwrap(), ImageFormat::Png);
    assert_eq!(format_for_extension("png").unwrap(), ImageFormat::Png);
    assert_eq!(format_for_extension(".JPG").unwrap(), ImageFormat::Jpeg);
    assert!(matches!(format_for_extension(".sprite"), Err(MosaicError::InvalidConfig(_))));
}

#[test]
fn test_decode_only_format_rejected() {
    assert!(matches!(format_for_extension(".dds"), Err(MosaicError::InvalidConfig(_))));

    let naming = NamingScheme::new("face", ".dds").unwrap();
    assert!(matches!(naming.image_format(), Err(MosaicError::InvalidConfig(_))));
}
