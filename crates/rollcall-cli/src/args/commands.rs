use crate::types::{OutputFormat, WindowArg};
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print one page of approved and pending members")]
    Page(PageArgs),

    #[command(about = "Browse a roster interactively")]
    Browse {
        #[arg(help = "Roster JSON file")]
        roster: PathBuf,

        #[arg(long, help = "Treat the roster as a trust role (no pending list)")]
        trust: bool,
    },

    #[command(about = "Show or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    #[arg(help = "Roster JSON file")]
    pub roster: PathBuf,

    #[arg(long, default_value = "1", allow_hyphen_values = true, help = "Approved list page (clamped into range)")]
    pub page: i64,

    #[arg(long, default_value = "1", allow_hyphen_values = true, help = "Pending list page (clamped into range)")]
    pub pending_page: i64,

    #[arg(long, help = "Members per page (default from config)")]
    pub page_size: Option<usize>,

    #[arg(long, help = "Only members whose name or full name contains TEXT")]
    pub filter: Option<String>,

    #[arg(long, help = "Disable pagination and print every member")]
    pub all: bool,

    #[arg(long, help = "Page-number window style (default from config)")]
    pub window: Option<WindowArg>,

    #[arg(long, help = "Treat the roster as a trust role (no pending list)")]
    pub trust: bool,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective config as TOML")]
    Show,

    #[command(about = "Write the default config file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
