//! Command-line interface definition
//!
//! Options without a built-in default here fall back to the extraction
//! config defaults, so that a `--config` file can fill them in.

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the `mosaickit` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("MosaicKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Split a grid-aligned mosaic texture into individual tiles")
        .arg(
            Arg::new("input")
                .help("Input mosaic texture (defaults to data/mosaic_texture/25745_avatars.png)")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory to save extracted tiles [default: data/mosaics]")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("tile-size")
                .long("tile-size")
                .help("Width/height of each tile in pixels [default: 48]")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("grid-w")
                .long("grid-w")
                .help("Number of columns in the grid [default: 45]")
                .value_name("COLUMNS")
                .required(false),
        )
        .arg(
            Arg::new("grid-h")
                .long("grid-h")
                .help("Number of rows in the grid [default: 45]")
                .value_name("ROWS")
                .required(false),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("Filename prefix for saved tiles [default: face]")
                .value_name("PREFIX")
                .required(false),
        )
        .arg(
            Arg::new("ext")
                .long("ext")
                .help("File extension for output images, also selects the format [default: .png]")
                .value_name("EXT")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with a [mosaic] table of extraction options")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Report how the grid fits the image without writing tiles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Do not draw a progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
