// NOTE: Layering
//
// rollcall-engine holds pure pagination/filter state, rollcall-runtime adds
// the clock (debounce), files (config, roster) and the member split. This
// crate only parses arguments and renders; it never feeds results back into
// the state it displays.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod output;
pub mod tui;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, PageArgs};
pub use commands::run;
