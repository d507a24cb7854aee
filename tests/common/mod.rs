//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Image where every pixel encodes its own position and quadrant
///
/// Pixels are distinct across the image as long as it is at most 256px in
/// each direction, so any misplaced crop shows up as a pixel mismatch.
pub fn patterned_image(width: u32, height: u32, tile_size: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let cell = (x / tile_size + 3 * (y / tile_size)) as u8;
        Rgb([x as u8, y as u8, cell.wrapping_mul(40)])
    })
}

/// Save a patterned source image into `dir` and return its path
pub fn write_source(dir: &Path, name: &str, width: u32, height: u32, tile_size: u32) -> PathBuf {
    let path = dir.join(name);
    patterned_image(width, height, tile_size)
        .save(&path)
        .expect("Failed to write source image");
    path
}

/// Sorted file names inside a directory
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read output directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
