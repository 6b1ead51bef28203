//! Causal discovery toolkit configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for the toolkit config file
//! - Semantic validation of FDR policies
//! - Config resolution (explicit path → env → XDG → defaults)

pub mod fdr_policy;
pub mod resolve;

pub use fdr_policy::{ConfigError, ConfigFile, FdrPolicy};
pub use resolve::{resolve_config, ConfigSource, ResolvedConfig, CONFIG_ENV_VAR};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
