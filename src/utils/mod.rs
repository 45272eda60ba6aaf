//! Configuration and process setup helpers.

/// Tracing subscriber setup.
pub mod telemetry;
/// `nex.toml` loading with environment overrides.
pub mod toml_config;
