//! Policy path cataloging.
//!
//! A domain's policy objects live under
//! `{prefix}{domain}/sysvol/{domain}/Policies/<object>`; the ones that deploy
//! printers carry `User/Preferences/Printers/Printers.xml`.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use super::policy_store::PolicyStore;

/// Location of the printer preferences file relative to a policy object.
pub const PRINTER_PREFERENCES_SUFFIX: [&str; 4] = ["User", "Preferences", "Printers", "Printers.xml"];

/// Outcome of cataloging one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyCatalog {
    pub policies_root: PathBuf,
    /// Number of policy objects found, with or without printer preferences.
    pub policy_objects: usize,
    /// Existing printer preference files, in policy object order.
    pub paths: Vec<PathBuf>,
}

/// Builds `{prefix}{domain}/sysvol/{domain}/Policies`.
pub fn policies_root(sysvol_prefix: &Path, domain: &str) -> PathBuf {
    sysvol_prefix
        .join(domain)
        .join("sysvol")
        .join(domain)
        .join("Policies")
}

/// Appends the printer preferences suffix to a policy object directory.
pub fn printer_preferences_path(policy_object: &Path) -> PathBuf {
    PRINTER_PREFERENCES_SUFFIX
        .iter()
        .fold(policy_object.to_path_buf(), |acc, part| acc.join(part))
}

#[derive(Debug)]
pub struct PolicyScanner<'a, S: PolicyStore> {
    store: &'a S,
    sysvol_prefix: PathBuf,
}

impl<'a, S: PolicyStore> PolicyScanner<'a, S> {
    pub fn new(store: &'a S, sysvol_prefix: impl Into<PathBuf>) -> Self {
        Self {
            store,
            sysvol_prefix: sysvol_prefix.into(),
        }
    }

    /// Lists every policy object of `domain` and keeps the printer preference
    /// files that exist. Objects without one are skipped.
    ///
    /// Fails with [`Error::DomainResolution`] when the policy tree cannot be
    /// listed or holds no policy objects at all.
    #[instrument(skip(self))]
    pub fn catalog(&self, domain: &str) -> Result<PolicyCatalog> {
        let root = policies_root(&self.sysvol_prefix, domain);

        let objects = match self.store.list_policy_objects(&root) {
            Ok(objects) => objects,
            Err(e) => {
                debug!("Cannot list {}: {}", root.display(), e);
                Vec::new()
            }
        };

        if objects.is_empty() {
            return Err(Error::DomainResolution {
                domain: domain.to_string(),
                policies_root: root,
            });
        }

        let mut paths = Vec::new();
        for object in &objects {
            let candidate = printer_preferences_path(object);
            if self.store.exists(&candidate) {
                paths.push(candidate);
            } else {
                debug!("No printer preferences in {}", object.display());
            }
        }

        info!(
            "Found {} printer preference file(s) in {} policy object(s)",
            paths.len(),
            objects.len()
        );

        Ok(PolicyCatalog {
            policies_root: root,
            policy_objects: objects.len(),
            paths,
        })
    }

    /// Paths of every existing printer preference file of `domain`.
    pub fn catalog_paths(&self, domain: &str) -> Result<Vec<PathBuf>> {
        Ok(self.catalog(domain)?.paths)
    }
}
