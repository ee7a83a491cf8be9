//! Marketplace manifest (`marketplace.json`) validation: top-level structure,
//! plugin entries, and the on-disk paths those entries reference.

pub mod manifest;
mod references;
pub mod report;

pub use manifest::{
    is_kebab_case, is_loose_semver, load_manifest, validate_marketplace,
    validate_marketplace_with_root,
};
pub use report::ValidationReport;
