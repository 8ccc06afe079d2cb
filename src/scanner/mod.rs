//! Discovery of printer preference files in a domain's policy store.

pub mod policy_scanner;
pub mod policy_store;

pub use policy_scanner::{
    policies_root, printer_preferences_path, PolicyCatalog, PolicyScanner,
    PRINTER_PREFERENCES_SUFFIX,
};
pub use policy_store::{FsPolicyStore, MemoryPolicyStore, PolicyStore};
