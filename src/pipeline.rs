//! Printer inventory pipeline: catalog, parse, aggregate, render.
//!
//! Every stage runs to completion before the next one starts, and any error
//! ends the run without producing a document.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    config::InventoryConfig,
    error::{Error, Result},
    parser::parse_policy_file,
    report::ReportGenerator,
    scanner::{FsPolicyStore, PolicyCatalog, PolicyScanner, PolicyStore},
    types::PrinterInventory,
};

/// Counts describing one completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub policy_objects: usize,
    pub files_parsed: usize,
    pub printers: usize,
    pub groups: usize,
    pub assignments: usize,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct InventoryReport {
    pub document: String,
    pub inventory: PrinterInventory,
    pub summary: RunSummary,
}

#[derive(Debug)]
pub struct Pipeline<S: PolicyStore = FsPolicyStore> {
    store: S,
    sysvol_prefix: PathBuf,
    generator: ReportGenerator,
}

impl Pipeline<FsPolicyStore> {
    /// Pipeline reading the policy tree from the filesystem.
    pub fn new(config: &InventoryConfig) -> Self {
        Self::with_store(FsPolicyStore, config)
    }
}

impl<S: PolicyStore> Pipeline<S> {
    pub fn with_store(store: S, config: &InventoryConfig) -> Self {
        Self {
            store,
            sysvol_prefix: config.sysvol_prefix.clone(),
            generator: ReportGenerator::new(config.report_config()),
        }
    }

    fn scanner(&self) -> PolicyScanner<'_, S> {
        PolicyScanner::new(&self.store, self.sysvol_prefix.clone())
    }

    /// Lists the printer preference files of `domain` without parsing them.
    pub fn catalog(&self, domain: &str) -> Result<PolicyCatalog> {
        self.scanner().catalog(domain)
    }

    /// Runs the whole pipeline and returns only the rendered document.
    pub fn run(&self, domain: &str) -> Result<String> {
        Ok(self.execute(domain)?.document)
    }

    #[instrument(skip(self))]
    pub fn execute(&self, domain: &str) -> Result<InventoryReport> {
        info!("Inventorying printer deployments for {}", domain);

        let catalog = self.catalog(domain)?;
        if catalog.paths.is_empty() {
            return Err(Error::NoPrinterPreferences {
                domain: domain.to_string(),
            });
        }

        let inventory = self.aggregate(&catalog)?;
        let document = self
            .generator
            .render(inventory.printers(), inventory.groups());

        let summary = RunSummary {
            policy_objects: catalog.policy_objects,
            files_parsed: catalog.paths.len(),
            printers: inventory.printers().len(),
            groups: inventory.groups().len(),
            assignments: inventory.assignment_count(),
        };
        info!(
            "{} printer(s), {} group(s), {} assignment(s) from {} file(s)",
            summary.printers, summary.groups, summary.assignments, summary.files_parsed
        );

        Ok(InventoryReport {
            document,
            inventory,
            summary,
        })
    }

    /// Parses every catalogued file in order into one inventory.
    #[instrument(skip(self, catalog))]
    fn aggregate(&self, catalog: &PolicyCatalog) -> Result<PrinterInventory> {
        let mut inventory = PrinterInventory::new();
        for path in &catalog.paths {
            let policy = parse_policy_file(&self.store, path)?;
            inventory.add_policy(&policy);
        }
        Ok(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{policies_root, printer_preferences_path, MemoryPolicyStore};
    use std::path::Path;

    const DOMAIN: &str = "ad.contoso.com";

    fn config() -> InventoryConfig {
        InventoryConfig {
            domain: Some(DOMAIN.into()),
            sysvol_prefix: PathBuf::from("/net"),
            ..Default::default()
        }
    }

    fn store_with(files: &[(&str, Option<&str>)]) -> MemoryPolicyStore {
        let root = policies_root(Path::new("/net"), DOMAIN);
        let mut store = MemoryPolicyStore::new();
        for (object, xml) in files {
            let dir = root.join(object);
            store.add_dir(dir.clone());
            if let Some(xml) = xml {
                store.add_file(printer_preferences_path(&dir), *xml);
            }
        }
        store
    }

    #[test]
    fn test_no_policy_objects_is_domain_resolution_error() {
        let pipeline = Pipeline::with_store(MemoryPolicyStore::new(), &config());
        let err = pipeline.run(DOMAIN).unwrap_err();
        assert!(err.is_domain_resolution());
    }

    #[test]
    fn test_no_printer_files_is_no_preferences_error() {
        let store = store_with(&[("{A}", None), ("{B}", None)]);
        let pipeline = Pipeline::with_store(store, &config());
        let err = pipeline.run(DOMAIN).unwrap_err();
        assert!(err.is_no_printer_preferences());
        assert!(!err.is_domain_resolution());
    }

    #[test]
    fn test_scenario_prefixed_group() {
        let xml = r#"<Printers><SharedPrinter name="Color-1">
            <Filters><FilterGroup name="Sales"/><FilterGroup name="HR\Sales"/></Filters>
        </SharedPrinter></Printers>"#;
        let store = store_with(&[("{A}", Some(xml))]);
        let report = Pipeline::with_store(store, &config()).execute(DOMAIN).unwrap();

        assert_eq!(report.inventory.printers()["COLOR-1"], vec!["Sales", "Sales"]);
        assert_eq!(report.inventory.groups()["Sales"], vec!["Color-1", "Color-1"]);
        assert_eq!(
            report.summary,
            RunSummary {
                policy_objects: 1,
                files_parsed: 1,
                printers: 1,
                groups: 1,
                assignments: 2,
            }
        );
    }

    #[test]
    fn test_parse_failure_aborts_run() {
        let good = r#"<Printers><SharedPrinter name="P"><FilterGroup name="G"/></SharedPrinter></Printers>"#;
        let store = store_with(&[("{A}", Some(good)), ("{B}", Some("<Printers>"))]);
        let err = Pipeline::with_store(store, &config()).run(DOMAIN).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
