use serde::{Deserialize, Serialize};

use crate::search::Searchable;

/// A principal listed in a role or group roster.
///
/// Field names follow the console's JSON payloads (`memberName`,
/// `memberFullName`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Fully qualified principal name (e.g. `user.alice`)
    pub member_name: String,

    /// Human readable name, when the directory knows one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_full_name: Option<String>,

    /// `false` while the membership is waiting for review
    #[serde(default = "default_approved")]
    pub approved: bool,

    /// Opaque expiration timestamp as delivered by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
}

fn default_approved() -> bool {
    true
}

impl Member {
    pub fn new(member_name: impl Into<String>) -> Self {
        Self {
            member_name: member_name.into(),
            member_full_name: None,
            approved: true,
            expiration: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.member_full_name = Some(full_name.into());
        self
    }

    pub fn pending(mut self) -> Self {
        self.approved = false;
        self
    }

    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
        self
    }
}

impl Searchable for Member {
    fn search_key(&self) -> &str {
        &self.member_name
    }

    fn secondary_search_key(&self) -> Option<&str> {
        self.member_full_name.as_deref()
    }
}

/// Settings of the role/group that owns a roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDetails {
    /// Delegated (trust) roles have no pending queue: every listed member counts as approved.
    #[serde(default)]
    pub trust: bool,
}

impl CollectionDetails {
    pub fn trusted() -> Self {
        Self { trust: true }
    }
}
