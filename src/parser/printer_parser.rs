//! Extraction of printer deployments from a `Printers.xml` preference file.
//!
//! ```xml
//! <Printers clsid="...">
//!   <SharedPrinter name="Color-1" ...>
//!     <Properties path="\\print01\Color-1" .../>
//!     <Filters>
//!       <FilterGroup name="CONTOSO\Sales" .../>
//!     </Filters>
//!   </SharedPrinter>
//! </Printers>
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::error::ParseError;
use crate::scanner::PolicyStore;
use crate::utils::group_key;
use super::xml_tree::XmlDocument;

const PRINTERS_TAG: &str = "Printers";
const SHARED_PRINTER_TAG: &str = "SharedPrinter";
const FILTER_GROUP_TAG: &str = "FilterGroup";
const NAME_ATTR: &str = "name";

/// One shared printer definition and the groups it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedPrinter {
    /// Display name as written in the policy.
    pub name: String,
    /// Group names with any `DOMAIN\` prefix already stripped, in document order.
    pub groups: Vec<String>,
}

/// Everything extracted from one preference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyFile {
    pub path: PathBuf,
    pub printers: Vec<SharedPrinter>,
}

impl PolicyFile {
    /// `(printer, group)` pairs, one per filter group element.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.printers.iter().flat_map(|p| {
            p.groups
                .iter()
                .map(move |g| (p.name.as_str(), g.as_str()))
        })
    }

    pub fn assignment_count(&self) -> usize {
        self.printers.iter().map(|p| p.groups.len()).sum()
    }
}

/// Reads `path` from `store` and extracts its shared printers.
#[instrument(skip(store))]
pub fn parse_policy_file<S: PolicyStore>(store: &S, path: &Path) -> Result<PolicyFile, ParseError> {
    let bytes = store.read(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let policy = parse_policy_bytes(&bytes, path)?;
    debug!(
        "{}: {} printer(s), {} group assignment(s)",
        path.display(),
        policy.printers.len(),
        policy.assignment_count()
    );
    Ok(policy)
}

/// Extracts shared printers from already loaded markup.
pub fn parse_policy_bytes(bytes: &[u8], path: &Path) -> Result<PolicyFile, ParseError> {
    let doc = XmlDocument::parse(bytes, path)?;

    let mut printers = Vec::new();
    for element in doc.select_children_of(PRINTERS_TAG, SHARED_PRINTER_TAG) {
        let name = element.required_attribute(NAME_ATTR, path)?.to_string();
        let mut groups = Vec::new();
        for filter in element.descendants_named(FILTER_GROUP_TAG) {
            groups.push(group_key(filter.required_attribute(NAME_ATTR, path)?));
        }
        printers.push(SharedPrinter { name, groups });
    }

    Ok(PolicyFile {
        path: path.to_path_buf(),
        printers,
    })
}
