//! `aufiles-client` — HTTP client for the upstream dump.
//!
//! Blocking reqwest client (no Tokio runtime required).

pub mod client;

pub use client::{FetchError, TextClient};
