//! Delivery of the rendered report: writing it out and opening it.

use std::path::PathBuf;

use thiserror::Error;

pub mod output_generator;
pub mod viewer;

pub use output_generator::{FileReportSink, ReportSink};
pub use viewer::{SystemViewer, Viewer};

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OutputError {
    #[error("Failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch viewer for {}: {source}", .path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
