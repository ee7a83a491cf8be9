pub mod diagnostics;
pub mod errors;
pub mod fs_util;
pub mod logging;
pub mod marketplace;

// Re-export key types at crate root for convenience.
pub use diagnostics::{Diagnostic, FindingKind, Severity};
pub use errors::{MarketplaceError, Result};
pub use marketplace::{
    is_kebab_case, is_loose_semver, load_manifest, validate_marketplace,
    validate_marketplace_with_root, ValidationReport,
};
