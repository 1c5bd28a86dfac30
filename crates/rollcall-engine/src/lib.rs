// Engine module - pure view-state logic (windowing, navigation, filtering)
// This layer sits between roster records (types) and the runtime/CLI layers.
// Nothing here performs I/O or reads a clock.

pub mod filter;
pub mod page_size;
pub mod pagination;
pub mod render;
pub mod window;

pub use filter::{filter_records, is_blank, matches, record_matches};
pub use page_size::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, PageSizeOptions};
pub use pagination::{PageView, Pagination, clamp_page, page_bounds, total_pages};
pub use window::{
    DEFAULT_WINDOW_DELTA, DEFAULT_WINDOW_WIDTH, EllipsisWindow, PageWindow, SlidingWindow, WindowStyle,
};

pub use rollcall_types::{PageItem, Searchable};
