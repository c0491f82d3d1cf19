//! CLI exit code registry.
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of
//! the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain    | Description                              |
//! |---------|-----------|------------------------------------------|
//! | 0       | Universal | Success                                  |
//! | 1       | Universal | General error (unspecified)              |
//! | 2       | Universal | CLI usage error (bad args, missing file) |
//! | 10-19   | load      | Loading the merged record view           |
//! | 20-29   | add       | Record submission                        |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Load (10-19)
// =============================================================================

/// The merged view could not be loaded (remote fetch failed and the cache
/// had nothing fresh).
pub const EXIT_LOAD: u8 = 10;

// =============================================================================
// Add (20-29)
// =============================================================================

/// Submission rejected by field validation.
pub const EXIT_ADD_VALIDATION: u8 = 20;

/// Record already exists (duplicate pre-check hit or uniqueness constraint).
pub const EXIT_ADD_EXISTS: u8 = 21;

/// Backend rejected the submission for another reason.
pub const EXIT_ADD_BACKEND: u8 = 22;
