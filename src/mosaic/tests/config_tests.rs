//! Tests for extraction configuration

use std::path::Path;

use image::ImageFormat;

use crate::mosaic::config::{ExtractionConfig, ExtractionConfigBuilder};
use crate::mosaic::errors::MosaicError;
use crate::mosaic::grid::TileCoordinate;

#[test]
fn test_defaults() {
    let config = ExtractionConfig::builder().build().unwrap();

    assert_eq!(config.input_path(), Path::new("data/mosaic_texture/25745_avatars.png"));
    assert_eq!(config.out_path(), Path::new("data/mosaics"));
    assert_eq!(config.grid().tile_size(), 48);
    assert_eq!(config.grid().grid_w(), 45);
    assert_eq!(config.grid().grid_h(), 45);
    assert_eq!(config.naming().prefix(), "face");
    assert_eq!(config.naming().ext(), ".png");
    assert_eq!(config.format(), ImageFormat::Png);
}

#[test]
fn test_overrides() {
    let config = ExtractionConfig::builder()
        .input_path("sheet.png")
        .out_path("out")
        .tile_size(16)
        .grid_w(4)
        .grid_h(3)
        .prefix("t")
        .ext(".jpg")
        .build()
        .unwrap();

    assert_eq!(config.grid().footprint(), (64, 48));
    assert_eq!(config.naming().file_name(TileCoordinate::new(2, 3)), "t_002_003.jpg");
    assert_eq!(config.format(), ImageFormat::Jpeg);
}

#[test]
fn test_invalid_values_rejected_at_build() {
    assert!(matches!(
        ExtractionConfig::builder().tile_size(0).build(),
        Err(MosaicError::InvalidConfig(_))
    ));
    assert!(matches!(
        ExtractionConfig::builder().prefix("").build(),
        Err(MosaicError::InvalidConfig(_))
    ));
    assert!(matches!(
        ExtractionConfig::builder().ext(".nope").build(),
        Err(MosaicError::InvalidConfig(_))
    ));
    assert!(matches!(
        ExtractionConfig::builder().ext(".dds").build(),
        Err(MosaicError::InvalidConfig(_))
    ));
}

#[test]
fn test_toml_partial_override() {
    let content = r#"
        [mosaic]
        input_path = "assets/sheet.png"
        tile_size = 32
        grid_w = 8
        prefix = "icon"
        unknown_key = true
    "#;

    let config = ExtractionConfigBuilder::from_toml_str(content).unwrap().build().unwrap();

    assert_eq!(config.input_path(), Path::new("assets/sheet.png"));
    assert_eq!(config.out_path(), Path::new("data/mosaics"));
    assert_eq!(config.grid().tile_size(), 32);
    assert_eq!(config.grid().grid_w(), 8);
    assert_eq!(config.grid().grid_h(), 45);
    assert_eq!(config.naming().prefix(), "icon");
}

#[test]
fn test_toml_without_table_uses_defaults() {
    let config = ExtractionConfigBuilder::from_toml_str("title = \"x\"").unwrap().build().unwrap();
    assert_eq!(config.grid().tile_size(), 48);
}

#[test]
fn test_toml_bad_values() {
    assert!(matches!(
        ExtractionConfigBuilder::from_toml_str("[mosaic]\ntile_size = -4"),
        Err(MosaicError::InvalidConfig(_))
    ));
    assert!(matches!(
        ExtractionConfigBuilder::from_toml_str("[mosaic]\ngrid_w = \"ten\""),
        Err(MosaicError::InvalidConfig(_))
    ));
    assert!(matches!(
        ExtractionConfigBuilder::from_toml_str("mosaic = 3"),
        Err(MosaicError::InvalidConfig(_))
    ));
    assert!(matches!(
        ExtractionConfigBuilder::from_toml_str("[mosaic"),
        Err(MosaicError::InvalidConfig(_))
    ));
}

#[test]
fn test_builder_overrides_toml() {
    let config = ExtractionConfigBuilder::from_toml_str("[mosaic]\ngrid_h = 2\ngrid_w = 2")
        .unwrap()
        .grid_h(5)
        .build()
        .unwrap();

    assert_eq!(config.grid().grid_w(), 2);
    assert_eq!(config.grid().grid_h(), 5);
}
