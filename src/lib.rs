//! Group Policy Preferences printer inventory.
//!
//! Walks a domain's policy replication tree, collects which security groups
//! receive which shared printers, and renders both directions of that
//! mapping as one cross-linked HTML page.

// Configuration and Core Pipeline
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Stage 1: Policy Path Cataloging
pub mod scanner;

// Stage 2: Policy File Parsing
pub mod parser;

// Stage 3: Report Rendering
pub mod report;

// Delivery of the finished report
pub mod output;

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use config::InventoryConfig;
pub use error::{Error, ParseError, Result};
pub use output::{FileReportSink, OutputError, ReportSink, SystemViewer, Viewer};
pub use parser::{parse_policy_file, PolicyFile, SharedPrinter};
pub use pipeline::{InventoryReport, Pipeline, RunSummary};
pub use report::{ReportConfig, ReportGenerator};
pub use scanner::{FsPolicyStore, MemoryPolicyStore, PolicyCatalog, PolicyScanner, PolicyStore};
pub use types::{GroupTable, PrinterInventory, RelationTable};
pub use utils::sanitize_anchor;
