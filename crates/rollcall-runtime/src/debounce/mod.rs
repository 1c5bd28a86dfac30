//! Debounced propagation of rapidly changing input.
//!
//! Two drivers with the same semantics: every update re-arms a single
//! pending slot `delay` into the future, only the latest value is ever
//! committed, a zero delay commits immediately, and a torn-down instance
//! never commits.
//!
//! - [`Debouncer`] is a clock-injected state machine for event loops that
//!   own their timer (the TUI polls input with a timeout up to its deadline).
//! - [`DebouncedText`] runs one tokio task per instance and publishes
//!   committed values through a `watch` channel.

mod task;
mod timer;

pub use task::DebouncedText;
pub use timer::Debouncer;
