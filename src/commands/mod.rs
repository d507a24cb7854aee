//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub(crate) mod config_args;
pub mod extract_command;
pub mod inspect_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use inspect_command::InspectCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::mosaic::errors::MosaicResult;

/// Factory for creating command instances based on CLI arguments
pub struct MosaickitCommandFactory;

impl MosaickitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        MosaickitCommandFactory
    }
}

impl Default for MosaickitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for MosaickitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> MosaicResult<Box<dyn Command + 'a>> {
        if args.get_flag("inspect") {
            Ok(Box::new(InspectCommand::new(args, logger)?))
        } else {
            // Default to extraction
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}
