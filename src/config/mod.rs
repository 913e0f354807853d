//! # Engine Configuration
//!
//! Settings that shape the engine's behavior without changing its rules: the reason text
//! used when bulk runs reject blocking requests, whether rejected requests are also
//! resolved, the default branch, and logging output.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use publication_core::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Environment auto-detected from PUBLICATION_ENV / APP_ENV
//! let config = ConfigLoader::new().load()?;
//! println!("bulk reject reason: {}", config.bulk.system_reject_reason);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};

use crate::constants::{defaults, MASTER_BRANCH_ID};
use crate::models::BranchId;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::{detect_environment, ConfigLoader};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bulk: BulkConfig,
    pub branches: BranchConfig,
    pub logging: LoggingConfig,
}

/// Bulk publish/depublish behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BulkConfig {
    /// Reason recorded when a bulk run rejects a blocking request
    pub system_reject_reason: String,
    /// Also cancel/reject requests that were already rejected
    pub resolve_rejected_requests: bool,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            system_reject_reason: defaults::SYSTEM_REJECT_REASON.to_string(),
            resolve_rejected_requests: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BranchConfig {
    /// Branch used when the caller has no active branch
    pub default_branch: String,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            default_branch: MASTER_BRANCH_ID.to_string(),
        }
    }
}

impl BranchConfig {
    pub fn default_branch_id(&self) -> BranchId {
        BranchId::new(self.default_branch.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive overriding the environment default (e.g. `"info"`)
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl EngineConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.bulk.system_reject_reason.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "bulk.system_reject_reason",
                &self.bulk.system_reject_reason,
                "a non-empty reason is required to reject requests",
            ));
        }
        if self.branches.default_branch.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "branches.default_branch",
                &self.branches.default_branch,
                "branch id must not be empty",
            ));
        }
        if let Some(level) = &self.logging.level {
            if level.trim().is_empty() {
                return Err(ConfigurationError::invalid_value(
                    "logging.level",
                    level,
                    "omit the level instead of leaving it blank",
                ));
            }
        }
        Ok(())
    }
}
