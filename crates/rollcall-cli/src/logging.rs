//! Tracing subscriber setup.
//!
//! `ROLLCALL_LOG` wins, then `RUST_LOG`, then `--log-level`. The interactive
//! browser owns the terminal, so it only logs when a filter is set explicitly.

use crate::types::LogLevel;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

pub fn init(level: LogLevel, interactive: bool) {
    let env_filter =
        EnvFilter::try_from_env("ROLLCALL_LOG").or_else(|_| EnvFilter::try_from_default_env());

    let env_filter = match env_filter {
        Ok(filter) => filter,
        Err(_) if interactive => return,
        Err(_) => EnvFilter::new(level.to_string()),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
