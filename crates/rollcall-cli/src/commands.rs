use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging;
use anyhow::{Context, Result};
use rollcall_runtime::{Config, resolve_config_path};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, Commands::Browse { .. });
    logging::init(cli.log_level, interactive);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    tracing::debug!(path = %config_path.display(), "config path resolved");

    match cli.command {
        Commands::Page(args) => {
            let config = load_config(&config_path)?;
            handlers::page::handle(&config, args)
        }

        Commands::Browse { roster, trust } => {
            let config = load_config(&config_path)?;
            handlers::browse::handle(&config, &roster, trust)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                let config = load_config(&config_path)?;
                handlers::config::show(&config)
            }
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_from(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    Ok(config.validated())
}
