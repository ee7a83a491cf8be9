//! Structured findings produced by marketplace validation.
//!
//! Every finding carries a stable code, the class of problem it describes,
//! and the severity bucket it lands in. Severity is derived from the kind:
//! convention findings are advisory, everything else blocks success.

use std::fmt;

use serde::Serialize;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A problem that causes validation failure.
    Error,
    /// An advisory issue that does not cause failure.
    Warning,
}

/// Class of problem a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    /// Manifest unreadable or not valid JSON. Always the sole finding.
    Parse,
    /// Required field missing or of the wrong type.
    Structural,
    /// Referenced path missing or of the wrong type (file vs. directory).
    Reference,
    /// Naming, format or extension deviation.
    Convention,
}

impl FindingKind {
    /// Severity bucket findings of this kind are recorded in.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            FindingKind::Convention => Severity::Warning,
            FindingKind::Parse | FindingKind::Structural | FindingKind::Reference => {
                Severity::Error
            }
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level, derived from `kind`.
    pub severity: Severity,
    /// Problem class.
    pub kind: FindingKind,
    /// Stable finding code (e.g., `"M001"`, `"P004"`, `"R010"`).
    pub code: &'static str,
    /// Human-readable message. May span several lines.
    pub message: String,
}

impl Diagnostic {
    /// Create a new finding; severity follows from `kind`.
    #[must_use]
    pub fn new(kind: FindingKind, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            code,
            message: message.into(),
        }
    }

    /// Returns `true` if this finding blocks success.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns `true` if this finding is advisory.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Findings display as their bare message; the report adds bullets.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ── Finding code constants ──────────────────────────────────────────────

// Marketplace-level findings (M001–M009)

/// Manifest missing, unreadable, or invalid JSON.
pub const M001: &str = "M001";
/// Missing required field `name`.
pub const M002: &str = "M002";
/// Marketplace name is not kebab-case.
pub const M003: &str = "M003";
/// Missing required field `owner`.
pub const M004: &str = "M004";
/// `owner` is not an object.
pub const M005: &str = "M005";
/// Missing required field `owner.name`.
pub const M006: &str = "M006";
/// Missing recommended field `owner.email`.
pub const M007: &str = "M007";
/// Missing required field `plugins`.
pub const M008: &str = "M008";
/// `plugins` is not an array.
pub const M009: &str = "M009";

// Plugin entry findings (P001–P004)

/// Plugin entry missing `name`.
pub const P001: &str = "P001";
/// Plugin name is not kebab-case.
pub const P002: &str = "P002";
/// Plugin entry missing `source`.
pub const P003: &str = "P003";
/// Plugin version is not x.y.z.
pub const P004: &str = "P004";

// Referenced path findings (R001–R014)

/// `agents` is not an array.
pub const R001: &str = "R001";
/// Agent path is not a string.
pub const R002: &str = "R002";
/// Agent file does not exist.
pub const R003: &str = "R003";
/// Agent path is not a file.
pub const R004: &str = "R004";
/// Agent file lacks the `.md` extension.
pub const R005: &str = "R005";
/// `skills` is not an array.
pub const R006: &str = "R006";
/// Skill path is not a string.
pub const R007: &str = "R007";
/// Skill directory does not exist.
pub const R008: &str = "R008";
/// Skill path is not a directory.
pub const R009: &str = "R009";
/// Skill directory has no `SKILL.md`.
pub const R010: &str = "R010";
/// `mcpServers` is not a string.
pub const R011: &str = "R011";
/// MCP server file does not exist.
pub const R012: &str = "R012";
/// MCP server path is not a file.
pub const R013: &str = "R013";
/// MCP server file lacks the `.json` extension.
pub const R014: &str = "R014";
