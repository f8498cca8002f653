//! Rule configuration.
//!
//! Every option defaults to off, which reproduces the permissive referee:
//! moves into self-check are allowed, castling through attacked squares is
//! allowed, and undo only restores square occupancy.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a rules configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Opt-in rule behaviors for a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Reject moves that leave the mover's own king in check.
    pub forbid_self_check: bool,
    /// Also require [`Piece::can_castle`](crate::Piece::can_castle) for castling moves.
    pub castling_attack_check: bool,
    /// Make undo reset has-moved flags and return a castled rook to its corner.
    pub restore_on_undo: bool,
}

impl RulesConfig {
    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it is not valid TOML for this struct.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads a configuration from `path` if the file exists, defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The configuration with every stricter option enabled.
    pub const fn strict() -> Self {
        RulesConfig {
            forbid_self_check: true,
            castling_attack_check: true,
            restore_on_undo: true,
        }
    }
}
