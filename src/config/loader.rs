//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the gratuity
//! accrual policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{AccrualTier, GratuityPolicy};

/// Loads and provides access to the gratuity accrual policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/uae/
/// └── policy.yaml   # Accrual tiers, month length, minimum service
/// ```
///
/// # Example
///
/// ```no_run
/// use eosg_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/uae").unwrap();
/// println!("Policy: {} ({})", loader.policy().name, loader.policy().currency);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: GratuityPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/uae")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` is missing (`ConfigNotFound`)
    /// - `policy.yaml` contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The policy tiers are inconsistent (`InvalidPolicy`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<GratuityPolicy>(&policy_path)?;

        let loader = Self::from_policy(policy)?;
        info!(
            path = %policy_path.display(),
            policy = %loader.policy.name,
            currency = %loader.policy.currency,
            tiers = loader.policy.tiers.len(),
            "Loaded gratuity policy"
        );
        Ok(loader)
    }

    /// Wraps an in-memory policy after checking it.
    pub fn from_policy(policy: GratuityPolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &GratuityPolicy {
        &self.policy
    }

    /// Returns the accrual tier covering a 1-based service year.
    ///
    /// # Example
    ///
    /// ```
    /// use eosg_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::default();
    /// assert_eq!(loader.get_tier(3).unwrap().days_per_year, 21);
    /// assert_eq!(loader.get_tier(8).unwrap().days_per_year, 30);
    /// ```
    pub fn get_tier(&self, year: u32) -> Option<&AccrualTier> {
        self.policy.tier_for_year(year)
    }
}
