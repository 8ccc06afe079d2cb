// Type definitions for the printer inventory pipeline

pub mod inventory;

pub use inventory::*;
