//! Submission field validators.
//!
//! Each validator is a total function from raw text to a normalized value
//! or a human-readable rejection. Nothing reaches the database without
//! passing all three.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;

/// Required PUID length after stripping non-hex characters.
const PUID_LEN: usize = 32;

/// Zero or more non-`#` characters, then `#` and exactly 4 digits.
fn friend_code_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[^#]*#[0-9]{4}$").expect("friend code regex"))
}

/// Identifier: anything non-empty once trimmed.
pub fn validate_identifier(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Identifier("ID is required.".into()));
    }
    Ok(trimmed.to_string())
}

/// Friend code: no whitespace, and `#` followed by exactly 4 digits at the
/// end. The normalized value is the trimmed input unchanged.
pub fn validate_friend_code(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return Err(ValidationError::FriendCode(
            "Friend code cannot contain spaces.".into(),
        ));
    }
    if !friend_code_shape().is_match(trimmed) {
        return Err(ValidationError::FriendCode(
            "Friend code must have # followed by exactly 4 numbers (e.g., warmapex#2446).".into(),
        ));
    }
    Ok(trimmed.to_string())
}

/// PUID: exactly 32 hex characters once everything else is stripped.
/// Case is preserved, not forced.
pub fn validate_puid(raw: &str) -> Result<String, ValidationError> {
    let stripped: String = raw.trim().chars().filter(char::is_ascii_hexdigit).collect();
    if stripped.len() != PUID_LEN {
        return Err(ValidationError::Puid(
            "PUID must be exactly 32 hexadecimal characters.".into(),
        ));
    }
    Ok(stripped)
}

/// Validated, normalized submission fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub identifier: String,
    pub friend_code: String,
    pub puid: String,
}

/// Validate all three fields in surfacing order — identifier, friend code,
/// PUID — returning the first failure.
pub fn validate_submission(
    identifier: &str,
    friend_code: &str,
    puid: &str,
) -> Result<Submission, ValidationError> {
    Ok(Submission {
        identifier: validate_identifier(identifier)?,
        friend_code: validate_friend_code(friend_code)?,
        puid: validate_puid(puid)?,
    })
}
