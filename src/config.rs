//! Runtime Configuration
//!
//! Settings come from the environment and are then overlaid by explicit
//! flags from the caller (CLI arguments, FFI host).

use std::env;

use crate::utils::logging;

pub const ENV_DEBUG: &str = "MNEMONIC_CHECKSUM_DEBUG";
pub const ENV_JSON: &str = "MNEMONIC_CHECKSUM_JSON";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit debug and info log lines on stderr
    pub debug: bool,
    /// Render results as JSON instead of labeled lines
    pub json_output: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            debug: lookup(ENV_DEBUG).as_deref().map(parse_flag).unwrap_or(false),
            json_output: lookup(ENV_JSON).as_deref().map(parse_flag).unwrap_or(false),
        }
    }

    /// Flags that are set win; unset flags keep the environment value
    pub fn with_overrides(mut self, debug: bool, json_output: bool) -> Self {
        self.debug |= debug;
        self.json_output |= json_output;
        self
    }

    /// Push settings into process-wide state
    pub fn apply(&self) {
        if self.debug {
            logging::enable_debug();
        } else {
            logging::disable_debug();
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
