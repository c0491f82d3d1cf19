use std::fmt;

/// A rejected submission field, carrying the human-readable reason that is
/// surfaced inline to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Identifier(String),
    FriendCode(String),
    Puid(String),
}

impl ValidationError {
    /// The message shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Identifier(msg) | Self::FriendCode(msg) | Self::Puid(msg) => msg,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}
