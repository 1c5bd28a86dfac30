mod member;

pub use member::{CollectionDetails, Member};
