//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading compensation
//! policies from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::CompensationPolicy;

/// Loads and provides access to a compensation policy.
///
/// The `PolicyLoader` reads a YAML policy file from a directory and
/// validates its structural invariants before handing it out.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// └── policy.yaml   # Metadata, raise policy, bonus tiers, status rules
/// ```
///
/// # Example
///
/// ```no_run
/// use compensation_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/default").unwrap();
/// println!("Loaded policy: {}", loader.policy().policy.name);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: CompensationPolicy,
}

impl PolicyLoader {
    /// Loads a policy from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - `policy.yaml` is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The policy violates a structural invariant (`InvalidPolicy`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use compensation_engine::config::PolicyLoader;
    ///
    /// let loader = PolicyLoader::load("./config/default")?;
    /// # Ok::<(), compensation_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<CompensationPolicy>(&policy_path)?;
        policy.validate()?;

        Ok(Self { policy })
    }

    /// Builds a loader around the built-in default policy.
    pub fn with_defaults() -> Self {
        Self {
            policy: CompensationPolicy::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying compensation policy.
    pub fn policy(&self) -> &CompensationPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_policy() {
        let result = PolicyLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load policy: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().policy.code, "comp_default");
        assert_eq!(loader.policy().policy.name, "Default Compensation Policy");
    }

    #[test]
    fn test_loaded_policy_matches_builtin_defaults() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        let defaults = CompensationPolicy::default();

        assert_eq!(
            loader.policy().raise.minimum_rating,
            defaults.raise.minimum_rating
        );
        for rating in -1..=6 {
            assert_eq!(
                loader.policy().bonus.percentage_for(rating),
                defaults.bonus.percentage_for(rating),
                "bonus percentage diverges for rating {rating}"
            );
        }
        assert_eq!(
            loader.policy().status.rules.len(),
            defaults.status.rules.len()
        );
        assert_eq!(
            loader.policy().status.fallback_label,
            defaults.status.fallback_label
        );
    }

    #[test]
    fn test_loaded_bonus_tiers() {
        let loader = PolicyLoader::load(config_path()).unwrap();

        assert_eq!(loader.policy().bonus.percentage_for(5), dec("0.15"));
        assert_eq!(loader.policy().bonus.percentage_for(4), dec("0.10"));
        assert_eq!(loader.policy().bonus.percentage_for(3), dec("0.05"));
        assert_eq!(loader.policy().bonus.percentage_for(1), Decimal::ZERO);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = PolicyLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_with_defaults_requires_no_file() {
        let loader = PolicyLoader::with_defaults();
        assert_eq!(loader.policy().raise.minimum_rating, 4);
    }
}
