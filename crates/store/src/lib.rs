//! `aufiles-store` — persistence collaborators for the AUFiles archive.
//!
//! The record database (SQLite), the time-boxed cache of parsed remote
//! records, and the one-shot submission log.

pub mod cache;
pub mod db;
pub mod error;
pub mod kv;
pub mod submit_log;

pub use cache::{now_ms, RemoteCache, DEFAULT_TTL_MS};
pub use db::RecordDb;
pub use error::StoreError;
pub use kv::{FileStore, KvStore, MemStore};
pub use submit_log::SubmitLog;
