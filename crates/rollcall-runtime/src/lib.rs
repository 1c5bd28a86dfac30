// Runtime layer - owns the clock-dependent and I/O-facing pieces:
// debounced filter input, filtered/member pagination, config and roster files.

pub mod config;
pub mod debounce;
pub mod error;
pub mod filtered;
pub mod members;
pub mod roster;

pub use config::{Config, FilterConfig, PaginationConfig, resolve_config_path};
pub use debounce::{DebouncedText, Debouncer};
pub use error::{Error, Result};
pub use filtered::{DebouncedFilter, FilteredPagination};
pub use members::{MemberList, MemberPagination};
pub use roster::{Roster, load_roster, parse_roster};

// Re-export the engine surface consumers need alongside runtime types
pub use rollcall_engine::{PageSizeOptions, PageView, Pagination, WindowStyle};
pub use rollcall_types::{CollectionDetails, Member, PageItem};

// Clock type accepted by the tick-driven APIs
pub use tokio::time::Instant;
