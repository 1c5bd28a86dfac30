pub mod domain;
pub mod page;
pub mod search;

pub use domain::*;
pub use page::PageItem;
pub use search::Searchable;
