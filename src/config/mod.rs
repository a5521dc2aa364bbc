//! Configuration module for Pagescope
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a default.
//!
//! # Example
//!
//! ```no_run
//! use pagescope::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pagescope.toml")).unwrap();
//! println!("Probe timeout: {}s", config.analyzer.probe_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalyzerConfig, Config, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
