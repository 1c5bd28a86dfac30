/// Records that can be narrowed down by a free-text search box.
///
/// The primary key is always consulted; the secondary key (for example a
/// display name) is consulted when present. A record matches when any key
/// matches.
pub trait Searchable {
    fn search_key(&self) -> &str;

    fn secondary_search_key(&self) -> Option<&str> {
        None
    }
}

impl Searchable for String {
    fn search_key(&self) -> &str {
        self
    }
}

impl Searchable for &str {
    fn search_key(&self) -> &str {
        self
    }
}
