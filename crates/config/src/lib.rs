//! `aufiles-config` — configuration for the AUFiles tools.

pub mod settings;

pub use settings::Settings;
