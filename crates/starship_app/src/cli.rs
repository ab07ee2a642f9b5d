use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use starship_engine::DEFAULT_BASE_URL;

/// Work out how many resupply stops each starship needs to cover a distance.
#[derive(Debug, Parser)]
#[command(name = "starship-stops", version)]
pub struct Cli {
    /// Distance to travel, in megalights. Distances are read from stdin when omitted.
    #[arg(short, long, allow_hyphen_values = true)]
    pub distance: Option<String>,

    /// First page of the starship catalog.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Reload from scratch this many times after a failed load.
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Per-request timeout, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Log file used by `--log file` and `--log both`.
    #[arg(long, default_value = "starships.log")]
    pub log_file: PathBuf,

    /// Raise the log level (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Off,
    Terminal,
    File,
    Both,
}
