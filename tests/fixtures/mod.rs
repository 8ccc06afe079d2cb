#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use gpp_printers::scanner::{policies_root, printer_preferences_path};
use gpp_printers::InventoryConfig;
use tempfile::TempDir;

pub const DOMAIN: &str = "ad.contoso.com";

/// A SYSVOL replication tree laid out under a temporary directory.
pub struct SysvolFixture {
    dir: TempDir,
}

impl SysvolFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn prefix(&self) -> &Path {
        self.dir.path()
    }

    pub fn policies_root(&self) -> PathBuf {
        policies_root(self.prefix(), DOMAIN)
    }

    /// Creates an empty policy object directory.
    pub fn add_policy(&self, guid: &str) -> PathBuf {
        let dir = self.policies_root().join(guid);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Creates a policy object carrying `xml` as its printer preferences.
    pub fn add_printers(&self, guid: &str, xml: &str) -> PathBuf {
        let file = printer_preferences_path(&self.add_policy(guid));
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, xml).unwrap();
        file
    }

    pub fn config(&self) -> InventoryConfig {
        InventoryConfig {
            domain: Some(DOMAIN.to_string()),
            sysvol_prefix: self.prefix().to_path_buf(),
            output_dir: Some(self.prefix().join("out")),
            open_in_viewer: false,
            ..Default::default()
        }
    }
}

/// Builds a `Printers.xml` body from `(printer, [group, ...])` entries.
pub fn printers_xml(printers: &[(&str, &[&str])]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <Printers clsid=\"{1F577D12-3D1B-471e-A1B7-060317597B9C}\">\n",
    );
    for (name, groups) in printers {
        xml.push_str(&format!(
            "  <SharedPrinter clsid=\"{{9A5E9697-9095-436d-A0EE-4D128FDFBCE5}}\" name=\"{}\">\n\
             \x20   <Properties action=\"U\" path=\"\\\\print01\\{}\"/>\n",
            name, name
        ));
        if !groups.is_empty() {
            xml.push_str("    <Filters>\n");
            for group in groups.iter() {
                xml.push_str(&format!(
                    "      <FilterGroup bool=\"AND\" not=\"0\" name=\"{}\" userContext=\"1\"/>\n",
                    group
                ));
            }
            xml.push_str("    </Filters>\n");
        }
        xml.push_str("  </SharedPrinter>\n");
    }
    xml.push_str("</Printers>\n");
    xml
}
