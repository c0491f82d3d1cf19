use serde::{Deserialize, Serialize};

/// Placeholder identifier for blocks that never named one.
pub const UNKNOWN_ID: &str = "Unknown ID";

/// Placeholder for friend codes and PUIDs that could not be determined.
pub const UNKNOWN: &str = "Unknown";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Where a record came from. Provenance only — identity is the merge key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Remote,
    Database,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Database => write!(f, "database"),
        }
    }
}

/// A single directory entry, from either the upstream dump or the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub identifier: String,
    pub friend_code: String,
    pub puid: String,
    pub origin: Origin,
}

impl Record {
    pub fn remote(
        identifier: impl Into<String>,
        friend_code: impl Into<String>,
        puid: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            friend_code: friend_code.into(),
            puid: puid.into(),
            origin: Origin::Remote,
        }
    }

    pub fn database(
        identifier: impl Into<String>,
        friend_code: impl Into<String>,
        puid: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            friend_code: friend_code.into(),
            puid: puid.into(),
            origin: Origin::Database,
        }
    }

    /// Identity used to deduplicate records across origins: the PUID when
    /// known, otherwise identifier + friend code.
    pub fn merge_key(&self) -> String {
        if self.puid != UNKNOWN {
            self.puid.clone()
        } else {
            format!("{}-{}", self.identifier, self.friend_code)
        }
    }
}
