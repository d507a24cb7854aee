//! Building an extraction configuration from CLI arguments
//!
//! Values are layered: built-in defaults, then the optional `--config` TOML
//! file, then any option given on the command line.

use clap::ArgMatches;
use log::info;

use crate::mosaic::config::{ExtractionConfig, ExtractionConfigBuilder};
use crate::mosaic::errors::{MosaicError, MosaicResult};

/// Resolve the extraction configuration for a command
pub fn config_from_args(args: &ArgMatches) -> MosaicResult<ExtractionConfig> {
    let mut builder = match args.get_one::<String>("config") {
        Some(path) => {
            info!("Reading configuration file: {}", path);
            ExtractionConfigBuilder::from_toml_file(path)?
        }
        None => ExtractionConfig::builder(),
    };

    if let Some(input) = args.get_one::<String>("input") {
        builder = builder.input_path(input);
    }
    if let Some(output) = args.get_one::<String>("output") {
        builder = builder.out_path(output);
    }
    if let Some(tile_size) = parse_u32(args, "tile-size")? {
        builder = builder.tile_size(tile_size);
    }
    if let Some(grid_w) = parse_u32(args, "grid-w")? {
        builder = builder.grid_w(grid_w);
    }
    if let Some(grid_h) = parse_u32(args, "grid-h")? {
        builder = builder.grid_h(grid_h);
    }
    if let Some(prefix) = args.get_one::<String>("prefix") {
        builder = builder.prefix(prefix);
    }
    if let Some(ext) = args.get_one::<String>("ext") {
        builder = builder.ext(ext);
    }

    let config = builder.build()?;
    info!("Input file: {}", config.input_path().display());
    info!("Output directory: {}", config.out_path().display());
    Ok(config)
}

fn parse_u32(args: &ArgMatches, name: &str) -> MosaicResult<Option<u32>> {
    match args.get_one::<String>(name) {
        Some(value) => value.parse::<u32>()
            .map(Some)
            .map_err(|_| MosaicError::InvalidConfig(format!("Invalid value for --{}: {}", name, value))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::config_from_args;
    use crate::commands::cli::build_cli;
    use crate::mosaic::errors::MosaicError;

    fn matches(args: &[&str]) -> clap::ArgMatches {
        let mut argv = vec!["mosaickit"];
        argv.extend_from_slice(args);
        build_cli().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        let config = config_from_args(&matches(&[])).unwrap();
        assert_eq!(config.input_path(), Path::new("data/mosaic_texture/25745_avatars.png"));
        assert_eq!(config.out_path(), Path::new("data/mosaics"));
        assert_eq!(config.grid().footprint(), (2160, 2160));
    }

    #[test]
    fn test_command_line_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("mosaic.toml");
        fs::write(&config_path, "[mosaic]\ngrid_w = 10\ngrid_h = 7\nprefix = \"cfg\"\n").unwrap();
        let config_arg = config_path.to_string_lossy().into_owned();

        let config = config_from_args(&matches(&["--config", &config_arg, "--grid-w", "3"])).unwrap();

        assert_eq!(config.grid().grid_w(), 3);
        assert_eq!(config.grid().grid_h(), 7);
        assert_eq!(config.grid().tile_size(), 48);
        assert_eq!(config.naming().prefix(), "cfg");
    }

    #[test]
    fn test_positional_input_and_output() {
        let config = config_from_args(&matches(&["sheet.png", "-o", "out", "--ext", ".jpg"])).unwrap();
        assert_eq!(config.input_path(), Path::new("sheet.png"));
        assert_eq!(config.out_path(), Path::new("out"));
        assert_eq!(config.naming().ext(), ".jpg");
    }

    #[test]
    fn test_non_numeric_tile_size_rejected() {
        let result = config_from_args(&matches(&["--tile-size", "abc"]));
        assert!(matches!(result, Err(MosaicError::InvalidConfig(_))));
    }

    #[test]
    fn test_hyphenated_ext_reaches_validation() {
        let args = matches(&["--ext", "-png"]);
        assert_eq!(args.get_one::<String>("ext").map(String::as_str), Some("-png"));

        let result = config_from_args(&args);
        assert!(matches!(result, Err(MosaicError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let result = config_from_args(&matches(&["--config", "does/not/exist.toml"]));
        assert!(matches!(result, Err(MosaicError::IoError(_))));
    }
}
