//! Policy file parsing.

pub mod printer_parser;
pub mod xml_tree;

pub use printer_parser::{parse_policy_bytes, parse_policy_file, PolicyFile, SharedPrinter};
pub use xml_tree::{XmlDocument, XmlElement};
