//! Boot configuration
//!
//! Every field has a default matching the host page conventions, so an empty
//! JSON object is a valid configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::consts;
use crate::error::ShimError;

/// Port names exposed by the embedded app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortNames {
    pub check_password: String,
    pub password_score: String,
    pub save_state: String,
}

impl Default for PortNames {
    fn default() -> Self {
        Self {
            check_password: consts::PORT_CHECK_PASSWORD.to_string(),
            password_score: consts::PORT_PASSWORD_SCORE.to_string(),
            save_state: consts::PORT_SAVE_STATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootConfig {
    /// Storage record for the app state
    pub storage_key: String,
    /// Element id to mount the app into
    pub mount_id: String,
    /// Global exposing `embed(node, flags)`
    pub app_module: String,
    /// Global password scoring function
    pub scorer: String,
    pub ports: PortNames,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_string(),
            mount_id: consts::MOUNT_ID.to_string(),
            app_module: consts::APP_MODULE.to_string(),
            scorer: consts::SCORER.to_string(),
            ports: PortNames::default(),
            log_level: "info".to_string(),
        }
    }
}

impl BootConfig {
    pub fn from_json(json: &str) -> Result<Self, ShimError> {
        serde_json::from_str(json).map_err(ShimError::Config)
    }

    /// Parsed log level, `Info` when unrecognised
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}
