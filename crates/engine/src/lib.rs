//! `aufiles-engine` — record reconciliation engine for the AUFiles archive.
//!
//! Pure engine crate: parses the upstream text dump, merges remote and
//! database records, validates submissions, and drives the search/paging
//! view. No CLI or IO dependencies.

pub mod error;
pub mod merge;
pub mod model;
pub mod parse;
pub mod validate;
pub mod view;

pub use error::ValidationError;
pub use merge::merge_records;
pub use model::{Origin, Record};
pub use parse::{parse_text, to_block_text};
pub use validate::{validate_submission, Submission};
pub use view::{filter_records, page_slice, PageSize, RecordView};
