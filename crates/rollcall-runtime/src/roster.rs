//! Roster files: a JSON array of members, or `{"members": [...], "trust": bool}`.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::{Error, Result};
use rollcall_types::{CollectionDetails, Member};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    pub members: Vec<Member>,
    pub details: CollectionDetails,
}

#[derive(Deserialize)]
struct WrappedRoster {
    members: Vec<Member>,
    #[serde(flatten)]
    details: CollectionDetails,
}

pub fn load_roster(path: &Path) -> Result<Roster> {
    let content = std::fs::read_to_string(path)?;
    let roster = parse_roster(&content)?;
    tracing::debug!(
        path = %path.display(),
        members = roster.members.len(),
        trust = roster.details.trust,
        "roster loaded"
    );
    Ok(roster)
}

pub fn parse_roster(content: &str) -> Result<Roster> {
    let value: Value = serde_json::from_str(content)?;

    if value.is_array() {
        let members =
            Vec::<Member>::deserialize(value).map_err(|e| Error::InvalidRoster(e.to_string()))?;
        return Ok(Roster {
            members,
            details: CollectionDetails::default(),
        });
    }

    if value.get("members").is_some() {
        let wrapped =
            WrappedRoster::deserialize(value).map_err(|e| Error::InvalidRoster(e.to_string()))?;
        return Ok(Roster {
            members: wrapped.members,
            details: wrapped.details,
        });
    }

    Err(Error::InvalidRoster(
        "expected a JSON array of members or an object with a \"members\" array".to_string(),
    ))
}
