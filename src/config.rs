//! Configuration types and validation for the pipeline

use std::{fs, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::output_generator::DEFAULT_FILE_NAME;
use crate::report::{ReportConfig, DEFAULT_TITLE};

/// Environment variable holding the DNS name of the machine's domain.
pub const DOMAIN_ENV_VAR: &str = "USERDNSDOMAIN";

/// UNC prefix of SYSVOL shares.
pub const DEFAULT_SYSVOL_PREFIX: &str = "//";

/// Global run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub domain: Option<String>,
    /// Put in front of `{domain}/sysvol/{domain}/Policies`.
    pub sysvol_prefix: PathBuf,
    /// Defaults to the platform temporary directory.
    pub output_dir: Option<PathBuf>,
    pub file_name: String,
    pub open_in_viewer: bool,
    pub title: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            domain: None,
            sysvol_prefix: PathBuf::from(DEFAULT_SYSVOL_PREFIX),
            output_dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            open_in_viewer: true,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl InventoryConfig {
    /// Loads a JSON config file, falling back to YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file {}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .or_else(|_| serde_yaml::from_str(&content))
            .map_err(|e| Error::Config(format!("Config parsing error: {}", e)))
    }

    /// Fills in the domain from the environment when none is configured.
    pub fn with_env_domain(mut self) -> Self {
        if self.domain.is_none() {
            self.domain = std::env::var(DOMAIN_ENV_VAR).ok();
        }
        self
    }

    /// The configured domain, or a config error if there is none.
    pub fn require_domain(&self) -> Result<&str> {
        self.domain.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "No domain given and {} is not set. Use a fully qualified name such as ad.contoso.com",
                DOMAIN_ENV_VAR
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(domain) = &self.domain {
            if domain.trim().is_empty() {
                return Err(Error::Config("Domain must not be empty".into()));
            }
            if domain.contains(['/', '\\']) {
                return Err(Error::Config(format!("Domain '{}' must not contain path separators", domain)));
            }
        }
        if self.file_name.trim().is_empty() {
            return Err(Error::Config("Report file name must not be empty".into()));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "Report file name '{}' must not contain path separators",
                self.file_name
            )));
        }
        Ok(())
    }

    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            title: self.title.clone(),
        }
    }
}
