//! Testing infrastructure for rollcall integration tests.
//!
//! - `TestWorld`: isolated temp directory with roster and config files, plus CLI execution
//! - `assertions`: checks over the JSON emitted by `rollcall page --format json`
//! - `fixtures`: sample rosters and numbered datasets

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
