//! Report generation module for the printer inventory pipeline

use serde::{Deserialize, Serialize};

pub mod generator;
pub mod templates;

pub use generator::{ReportBuilder, ReportGenerator};
pub use templates::TemplateEngine;

pub const DEFAULT_TITLE: &str = "GPO Printer Groups";

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
