//! Utility Module Implementation
//!
//! Aggregates internal helpers: name normalization, filesystem access,
//! and the standalone identifier tools.

// Submodules
pub mod guid_utils;
pub mod io;
pub mod sanitization_utils;
pub mod sid_utils;

// Re-exports for unified access
pub use self::{
    guid_utils::generate_guid,
    io::*,
    sanitization_utils::*,
    sid_utils::{decode_sid, decode_sid_hex, SidError},
};
