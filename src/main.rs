use std::process;
use log::{error, LevelFilter};

use mosaickit::utils::logger::Logger;
use mosaickit::commands::{build_cli, CommandFactory, MosaickitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let logger = match Logger::new("mosaickit.log") {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("mosaickit-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = MosaickitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
