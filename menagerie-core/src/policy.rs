use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What a create does when the client-chosen id is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// Fail the create with [`AnimalError::Conflict`](crate::AnimalError::Conflict).
    #[default]
    Reject,
    /// Replace the stored record with the new payload.
    Overwrite,
}

impl fmt::Display for DuplicateIdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateIdPolicy::Reject => f.write_str("reject"),
            DuplicateIdPolicy::Overwrite => f.write_str("overwrite"),
        }
    }
}

impl FromStr for DuplicateIdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(DuplicateIdPolicy::Reject),
            "overwrite" => Ok(DuplicateIdPolicy::Overwrite),
            other => Err(format!(
                "unknown duplicate id policy '{other}' (expected 'reject' or 'overwrite')"
            )),
        }
    }
}
