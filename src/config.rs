// src/config.rs
// Construction-time settings for a BlockTimer.

use std::env;

pub const DEFAULT_TAG: &str = "BlockTimer";
pub const TAG_ENV_VAR: &str = "BLOCKTIMER_TAG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Label attached to every emitted line. Not prefixed; pick something greppable.
    pub tag: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
        }
    }

    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Reads the tag from `BLOCKTIMER_TAG`, falling back to the default when unset or empty.
    pub fn from_env() -> Self {
        match env::var(TAG_ENV_VAR) {
            Ok(tag) if !tag.trim().is_empty() => Self::with_tag(tag.trim()),
            _ => Self::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
