//! Fixtures for sample data generation.
//!
//! Provides:
//! - Numbered datasets for pagination arithmetic
//! - A small mixed roster (approved and pending members, with and without full names)
//! - Roster JSON in both accepted file shapes

use anyhow::Result;
use rollcall_types::{Member, Searchable};
use serde_json::json;

/// A minimal searchable record keyed by its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: usize,
    pub name: String,
}

impl Searchable for Item {
    fn search_key(&self) -> &str {
        &self.name
    }
}

/// Items `1..=n`, named `Item 1`, `Item 2`, ...
pub fn numbered_items(n: usize) -> Vec<Item> {
    (1..=n)
        .map(|id| Item {
            id,
            name: format!("Item {}", id),
        })
        .collect()
}

/// Approved members `user.001 ..= user.{n}`, zero-padded so name order equals numeric order.
pub fn numbered_members(n: usize) -> Vec<Member> {
    (1..=n).map(|i| Member::new(format!("user.{:03}", i))).collect()
}

/// Six members in scrambled order; carol and eve are pending, dave has no full name.
///
/// Sorted by name: alice, bob, carol, dave, eve, frank.
pub fn sample_members() -> Vec<Member> {
    vec![
        Member::new("user.frank").with_full_name("Frank Smith"),
        Member::new("user.alice").with_full_name("Alice Smith"),
        Member::new("user.eve").with_full_name("Eve Adams").pending(),
        Member::new("user.bob").with_full_name("Bob Jones"),
        Member::new("user.dave"),
        Member::new("user.carol").with_full_name("Carol White").pending(),
    ]
}

/// Roster file body as a bare JSON array.
pub fn roster_json(members: &[Member]) -> Result<String> {
    Ok(serde_json::to_string_pretty(members)?)
}

/// Roster file body wrapped as `{"members": [...]}`.
pub fn wrapped_roster_json(members: &[Member]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({ "members": members }))?)
}
