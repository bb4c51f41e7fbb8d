//! Settings models loaded from configuration.

pub mod browse;
#[cfg(feature = "server")]
pub mod config;
