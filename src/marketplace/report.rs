//! Validation results and their text and JSON renderings.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::diagnostics::{Diagnostic, Severity};

/// Width of the `=` banner framing the report title.
const BANNER_WIDTH: usize = 70;

/// Findings from one validation run, split into ordered severity buckets.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Manifest path as given by the caller.
    pub path: PathBuf,
    /// Blocking findings, in discovery order.
    pub errors: Vec<Diagnostic>,
    /// Advisory findings, in discovery order.
    pub warnings: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Create an empty report for `path`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Append a finding to the bucket matching its severity.
    pub fn push(&mut self, diag: Diagnostic) {
        match diag.severity {
            Severity::Error => self.errors.push(diag),
            Severity::Warning => self.warnings.push(diag),
        }
    }

    /// Validation succeeds when no errors were recorded; warnings don't count.
    #[must_use]
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable report: banner, file, warnings, errors, verdict.
    #[must_use]
    pub fn render_text(&self) -> String {
        let banner = "=".repeat(BANNER_WIDTH);
        let mut out = String::new();
        let _ = writeln!(out, "{banner}");
        let _ = writeln!(out, "Marketplace Validation Report");
        let _ = writeln!(out, "{banner}");
        let _ = writeln!(out, "File: {}", self.path.display());
        let _ = writeln!(out);

        if !self.warnings.is_empty() {
            let _ = writeln!(out, "⚠️  Warnings ({}):", self.warnings.len());
            for w in &self.warnings {
                let _ = writeln!(out, "  - {w}");
            }
            let _ = writeln!(out);
        }

        if !self.errors.is_empty() {
            let _ = writeln!(out, "❌ Errors ({}):", self.errors.len());
            for e in &self.errors {
                let _ = writeln!(out, "  - {e}");
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "Validation FAILED");
        } else {
            let _ = writeln!(out, "✅ Validation PASSED");
            if !self.warnings.is_empty() {
                let _ = writeln!(out, "   ({} warning(s) found)", self.warnings.len());
            }
        }
        out
    }

    /// Machine-readable report.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "path": self.path.display().to_string(),
            "success": self.success(),
            "errors": self.errors,
            "warnings": self.warnings,
        })
    }
}
