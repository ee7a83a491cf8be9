//! Loading and structural validation of `marketplace.json`.

use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde_json::Value;

use crate::diagnostics::{
    Diagnostic, FindingKind, M001, M002, M003, M004, M005, M006, M007, M008, M009, P001, P002,
    P003, P004,
};
use crate::errors::{MarketplaceError, Result};
use crate::fs_util::repo_root_for;
use crate::marketplace::report::ValidationReport;

/// Lowercase letters, digits and hyphens; no leading or trailing hyphen.
static KEBAB_CASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Ll}\p{Nd}](?:[\p{Ll}\p{Nd}-]*[\p{Ll}\p{Nd}])?$").expect("kebab-case regex")
});

/// Loose semver: exactly three dot-separated all-digit components.
static SEMVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}+\.\p{Nd}+\.\p{Nd}+$").expect("semver regex"));

/// Returns `true` if `s` is kebab-case.
///
/// Consecutive hyphens and a leading digit are accepted; the empty string is not.
#[must_use]
pub fn is_kebab_case(s: &str) -> bool {
    KEBAB_CASE_RE.is_match(s)
}

/// Returns `true` if `version` has the shape `x.y.z` with all-digit parts.
///
/// Pre-release and build suffixes are rejected.
#[must_use]
pub fn is_loose_semver(version: &str) -> bool {
    SEMVER_RE.is_match(version)
}

/// Read and parse a manifest file as JSON.
///
/// No schema is applied: wrong field types are left for validation to report.
pub fn load_manifest(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MarketplaceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => MarketplaceError::Io(e),
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Validate the marketplace manifest at `path`.
///
/// Plugin paths resolve against the manifest's grandparent directory
/// (`<repo>/.claude-plugin/marketplace.json` → `<repo>`). Never fails: load
/// problems are reported as a single M001 error.
#[must_use]
pub fn validate_marketplace(path: &Path) -> ValidationReport {
    validate_marketplace_with_root(path, &repo_root_for(path))
}

/// Validate the marketplace manifest at `path`, resolving plugin paths
/// against `root`.
#[must_use]
pub fn validate_marketplace_with_root(path: &Path, root: &Path) -> ValidationReport {
    let mut validator = Validator {
        root,
        report: ValidationReport::new(path),
    };

    let data = match load_manifest(path) {
        Ok(v) => v,
        Err(e) => {
            debug!(
                "event=manifest_load status=error path={}",
                path.display()
            );
            let message = match e {
                not_found @ MarketplaceError::NotFound { .. } => not_found.to_string(),
                MarketplaceError::Json(err) => format!("Invalid JSON syntax: {err}"),
                other => format!("Cannot read file: {}: {other}", path.display()),
            };
            validator.push(Diagnostic::new(FindingKind::Parse, M001, message));
            return validator.report;
        }
    };
    debug!(
        "event=manifest_load status=ok path={} root={}",
        path.display(),
        root.display()
    );

    validator.validate_structure(&data);
    validator.validate_plugins(&data);

    debug!(
        "event=validation_done errors={} warnings={}",
        validator.report.errors.len(),
        validator.report.warnings.len()
    );
    validator.report
}

/// Accumulates findings for one validation run.
pub(super) struct Validator<'a> {
    pub(super) root: &'a Path,
    pub(super) report: ValidationReport,
}

impl Validator<'_> {
    pub(super) fn push(&mut self, diag: Diagnostic) {
        debug!(
            "event=finding code={} severity={:?}",
            diag.code, diag.severity
        );
        self.report.push(diag);
    }

    fn validate_structure(&mut self, data: &Value) {
        match data.get("name") {
            None => self.push(Diagnostic::new(
                FindingKind::Structural,
                M002,
                "Missing required field: 'name'",
            )),
            Some(name) if !value_is_kebab_case(name) => self.push(Diagnostic::new(
                FindingKind::Structural,
                M003,
                format!(
                    "Marketplace name '{}' should be in kebab-case",
                    display_value(name)
                ),
            )),
            Some(_) => {}
        }

        match data.get("owner") {
            None => self.push(Diagnostic::new(
                FindingKind::Structural,
                M004,
                "Missing required field: 'owner'",
            )),
            Some(Value::Object(owner)) => {
                if !owner.contains_key("name") {
                    self.push(Diagnostic::new(
                        FindingKind::Structural,
                        M006,
                        "Missing required field: 'owner.name'",
                    ));
                }
                if !owner.contains_key("email") {
                    self.push(Diagnostic::new(
                        FindingKind::Convention,
                        M007,
                        "Missing recommended field: 'owner.email'",
                    ));
                }
            }
            Some(_) => self.push(Diagnostic::new(
                FindingKind::Structural,
                M005,
                "Field 'owner' should be an object",
            )),
        }

        match data.get("plugins") {
            None => self.push(Diagnostic::new(
                FindingKind::Structural,
                M008,
                "Missing required field: 'plugins'",
            )),
            Some(Value::Array(_)) => {}
            Some(_) => self.push(Diagnostic::new(
                FindingKind::Structural,
                M009,
                "Field 'plugins' should be an array",
            )),
        }
    }

    fn validate_plugins(&mut self, data: &Value) {
        let Some(plugins) = data.get("plugins").and_then(Value::as_array) else {
            return;
        };
        for (idx, plugin) in plugins.iter().enumerate() {
            self.validate_plugin(plugin, idx);
        }
    }

    fn validate_plugin(&mut self, plugin: &Value, idx: usize) {
        // Without a name there is nothing to label the remaining findings with.
        let Some(name) = plugin.get("name") else {
            self.push(Diagnostic::new(
                FindingKind::Structural,
                P001,
                format!("Plugin [{idx}]: Missing required field 'name'"),
            ));
            return;
        };

        let plugin_name = display_value(name);
        debug!("event=plugin_check index={idx} name={plugin_name}");
        let prefix = format!("Plugin '{plugin_name}'");

        if !value_is_kebab_case(name) {
            self.push(Diagnostic::new(
                FindingKind::Structural,
                P002,
                format!("{prefix}: Name should be in kebab-case"),
            ));
        }

        if plugin.get("source").is_none() {
            self.push(Diagnostic::new(
                FindingKind::Structural,
                P003,
                format!("{prefix}: Missing required field 'source'"),
            ));
        }

        if let Some(version) = plugin.get("version") {
            if !version.as_str().is_some_and(is_loose_semver) {
                self.push(Diagnostic::new(
                    FindingKind::Convention,
                    P004,
                    format!(
                        "{prefix}: Version '{}' should follow semver format (e.g., '0.1.0')",
                        display_value(version)
                    ),
                ));
            }
        }

        if let Some(agents) = plugin.get("agents") {
            self.validate_agent_paths(agents, &prefix);
        }
        if let Some(skills) = plugin.get("skills") {
            self.validate_skill_paths(skills, &prefix);
        }
        if let Some(mcp) = plugin.get("mcpServers") {
            self.validate_mcp_server_path(mcp, &prefix);
        }
    }
}

fn value_is_kebab_case(value: &Value) -> bool {
    value.as_str().is_some_and(is_kebab_case)
}

/// Strings render bare, anything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
