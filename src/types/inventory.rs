//! Printer/group relationship tables.
//!
//! Both tables are views of the same edge set and only grow: entries are
//! appended in discovery order and duplicates are kept.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::parser::PolicyFile;
use crate::utils::{group_key, printer_key};

/// Upper-cased printer name -> group keys.
pub type RelationTable = BTreeMap<String, Vec<String>>;

/// Group key -> printer names as written in the policy.
pub type GroupTable = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrinterInventory {
    printers: RelationTable,
    groups: GroupTable,
}

impl PrinterInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure the printer has an entry even if it targets no group.
    pub fn register_printer(&mut self, printer_name: &str) {
        self.printers.entry(printer_key(printer_name)).or_default();
    }

    /// Records one printer/group assignment in both tables.
    pub fn record(&mut self, printer_name: &str, group_name: &str) {
        let group = group_key(group_name);
        self.printers
            .entry(printer_key(printer_name))
            .or_default()
            .push(group.clone());
        self.groups
            .entry(group)
            .or_default()
            .push(printer_name.to_string());
    }

    /// Registers every printer of a parsed file and records its assignments.
    pub fn add_policy(&mut self, policy: &PolicyFile) {
        for printer in &policy.printers {
            self.register_printer(&printer.name);
            for group in &printer.groups {
                self.record(&printer.name, group);
            }
        }
    }

    pub fn printers(&self) -> &RelationTable {
        &self.printers
    }

    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    /// Total number of recorded assignments, duplicates included.
    pub fn assignment_count(&self) -> usize {
        self.printers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.printers.is_empty()
    }
}
