use std::fmt;

/// Persistence failures, split the way the user tells them apart.
#[derive(Debug)]
pub enum StoreError {
    /// A record with this PUID already exists (pre-check hit or UNIQUE
    /// constraint violation).
    Duplicate,
    /// Any other backend failure, carrying the raw message when available.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate => write!(f, "This record already exists in the database."),
            Self::Backend(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
