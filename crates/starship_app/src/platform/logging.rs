//! Maps the command-line logging options onto `engine_logging`.

use engine_logging::LogDestination;
use log::LevelFilter;

use crate::cli::{Cli, LogTarget};

pub fn initialize(cli: &Cli) {
    let destination = match cli.log {
        LogTarget::Off => return,
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::File => LogDestination::File(cli.log_file.clone()),
        LogTarget::Both => LogDestination::Both(cli.log_file.clone()),
    };
    engine_logging::initialize(destination, level_for(cli.verbose));
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}
