// NOTE: Command Organization
//
// `page` is the scriptable one-shot view, `browse` the interactive one.
// Both read the same roster file and the same config; `config` manages that file.

mod commands;

pub use commands::*;

use crate::types::LogLevel;
use clap::Parser;

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Page, filter and browse member rosters", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $ROLLCALL_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}
