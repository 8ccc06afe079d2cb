//! Error types and handling for the printer inventory library

use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

use crate::output::OutputError;
use crate::utils::SidError;

/// Custom result type for inventory operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for inventory operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Domain '{domain}' not found or not reachable: no policy objects under {}", .policies_root.display())]
    DomainResolution {
        domain: String,
        policies_root: PathBuf,
    },

    #[error("Domain '{domain}' has no printer preferences configured in any policy object")]
    NoPrinterPreferences { domain: String },

    #[error("Policy parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Identifier error: {0}")]
    Identifier(#[from] SidError),
}

impl Error {
    /// True when the domain's policy tree could not be listed at all.
    pub fn is_domain_resolution(&self) -> bool {
        matches!(self, Error::DomainResolution { .. })
    }

    /// True when the domain resolved but no policy object carries printer preferences.
    pub fn is_no_printer_preferences(&self) -> bool {
        matches!(self, Error::NoPrinterPreferences { .. })
    }
}

// -------------------- Sub-Error Categories --------------------

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed markup in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Unbalanced markup in {}: {detail}", .path.display())]
    Unbalanced { path: PathBuf, detail: String },

    #[error("<{element}> in {} is missing required attribute '{attribute}'", .path.display())]
    MissingAttribute {
        path: PathBuf,
        element: String,
        attribute: String,
    },
}
