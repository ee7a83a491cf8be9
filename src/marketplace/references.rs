//! Checks for the files and directories a plugin entry points at.

use serde_json::Value;

use crate::diagnostics::{
    Diagnostic, FindingKind, R001, R002, R003, R004, R005, R006, R007, R008, R009, R010, R011,
    R012, R013, R014,
};
use crate::fs_util::{display_absolute, path_kind, resolve_reference, PathKind};
use crate::marketplace::manifest::Validator;

/// File every skill directory must contain.
const SKILL_FILE: &str = "SKILL.md";

impl Validator<'_> {
    /// `agents`: array of paths to `.md` files.
    pub(super) fn validate_agent_paths(&mut self, agents: &Value, prefix: &str) {
        let Some(agents) = agents.as_array() else {
            self.push(Diagnostic::new(
                FindingKind::Structural,
                R001,
                format!("{prefix}: 'agents' should be an array"),
            ));
            return;
        };

        for agent in agents {
            let Some(agent_path) = agent.as_str() else {
                self.push(Diagnostic::new(
                    FindingKind::Structural,
                    R002,
                    format!("{prefix}: Agent path should be a string"),
                ));
                continue;
            };

            let full_path = resolve_reference(self.root, agent_path);
            match path_kind(&full_path) {
                PathKind::Missing => self.push(Diagnostic::new(
                    FindingKind::Reference,
                    R003,
                    format!(
                        "{prefix}: Agent file not found: {agent_path}\n  Expected at: {}",
                        display_absolute(&full_path).display()
                    ),
                )),
                PathKind::File => {
                    if !agent_path.ends_with(".md") {
                        self.push(Diagnostic::new(
                            FindingKind::Convention,
                            R005,
                            format!("{prefix}: Agent file '{agent_path}' should have .md extension"),
                        ));
                    }
                }
                PathKind::Dir | PathKind::Other => self.push(Diagnostic::new(
                    FindingKind::Reference,
                    R004,
                    format!("{prefix}: Agent path is not a file: {agent_path}"),
                )),
            }
        }
    }

    /// `skills`: array of directories, each holding a `SKILL.md`.
    pub(super) fn validate_skill_paths(&mut self, skills: &Value, prefix: &str) {
        let Some(skills) = skills.as_array() else {
            self.push(Diagnostic::new(
                FindingKind::Structural,
                R006,
                format!("{prefix}: 'skills' should be an array"),
            ));
            return;
        };

        for skill in skills {
            let Some(skill_path) = skill.as_str() else {
                self.push(Diagnostic::new(
                    FindingKind::Structural,
                    R007,
                    format!("{prefix}: Skill path should be a string"),
                ));
                continue;
            };

            let full_path = resolve_reference(self.root, skill_path);
            match path_kind(&full_path) {
                PathKind::Missing => self.push(Diagnostic::new(
                    FindingKind::Reference,
                    R008,
                    format!(
                        "{prefix}: Skill directory not found: {skill_path}\n  Expected at: {}",
                        display_absolute(&full_path).display()
                    ),
                )),
                PathKind::Dir => {
                    if path_kind(&full_path.join(SKILL_FILE)) == PathKind::Missing {
                        self.push(Diagnostic::new(
                            FindingKind::Reference,
                            R010,
                            format!("{prefix}: Missing {SKILL_FILE} in skill directory: {skill_path}"),
                        ));
                    }
                }
                PathKind::File | PathKind::Other => self.push(Diagnostic::new(
                    FindingKind::Reference,
                    R009,
                    format!("{prefix}: Skill path is not a directory: {skill_path}"),
                )),
            }
        }
    }

    /// `mcpServers`: a single path to a `.json` file.
    pub(super) fn validate_mcp_server_path(&mut self, mcp: &Value, prefix: &str) {
        let Some(mcp_path) = mcp.as_str() else {
            self.push(Diagnostic::new(
                FindingKind::Structural,
                R011,
                format!("{prefix}: 'mcpServers' should be a string"),
            ));
            return;
        };

        let full_path = resolve_reference(self.root, mcp_path);
        match path_kind(&full_path) {
            PathKind::Missing => self.push(Diagnostic::new(
                FindingKind::Reference,
                R012,
                format!(
                    "{prefix}: MCP server file not found: {mcp_path}\n  Expected at: {}",
                    display_absolute(&full_path).display()
                ),
            )),
            PathKind::File => {
                if !mcp_path.ends_with(".json") {
                    self.push(Diagnostic::new(
                        FindingKind::Convention,
                        R014,
                        format!("{prefix}: MCP server file '{mcp_path}' should have .json extension"),
                    ));
                }
            }
            PathKind::Dir | PathKind::Other => self.push(Diagnostic::new(
                FindingKind::Reference,
                R013,
                format!("{prefix}: MCP server path is not a file: {mcp_path}"),
            )),
        }
    }
}
