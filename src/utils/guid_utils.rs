//! Random GUID generation in the braced registry format.

use uuid::Uuid;

/// Returns a fresh random GUID, e.g. `{3F2504E0-4F89-41D3-9A0C-0305E82C3301}`.
pub fn generate_guid() -> String {
    format!("{:X}", Uuid::new_v4().braced())
}
