//! Optional YAML configuration
//!
//! `support-ticket.yaml` in the working directory may set the data-file
//! path and a default comment author. A missing file means defaults;
//! command-line flags override everything here.

use crate::error::{Result, SupportTicketError};
use crate::storage::DEFAULT_TICKETS_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "support-ticket.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the persisted ticket collection
    #[serde(default = "default_tickets_file")]
    pub tickets_file: PathBuf,

    /// Author used for comments when none is given on the command line
    #[serde(default)]
    pub default_author: Option<String>,
}

fn default_tickets_file() -> PathBuf {
    PathBuf::from(DEFAULT_TICKETS_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tickets_file: default_tickets_file(),
            default_author: None,
        }
    }
}

impl Config {
    /// Load `support-ticket.yaml` from the working directory, or defaults
    /// when it does not exist
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from an explicit path, or defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| SupportTicketError::Config {
            reason: e.to_string(),
        })
    }
}
