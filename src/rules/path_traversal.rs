use crate::rules::heuristics::{SuppressionScope, match_lines};
use crate::rules::types::{Finding, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

/// Detects user-controlled input flowing into file system operations
/// without nearby path validation.
pub struct PathTraversalRule;

static TRAVERSAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Path construction fed by request/user-controlled identifiers.
        r"(?i)(os\.path\.join|path\.join|filepath\.Join)\s*\([^)]*(?:request|input|param|arg|tool_input)",
        // File open/read/write fed by such identifiers.
        r"(?i)(open|readFile|writeFile|read_file|write_file)\s*\([^)]*(?:request|input|param|arg|tool_input)",
        // Literal parent-directory traversal sequences.
        r"(?i)(?:\.\./|\.\.\\)",
        // Base-directory concatenation with a user-controlled name.
        r"(?i)(root_dir|base_path|repository)\s*[+/]\s*(?:request|input|param|arg|name)",
        // Process spawn fed by user-controlled identifiers.
        r"(?i)(subprocess|exec|spawn|system)\s*\([^)]*(?:request|input|param|tool_input)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("MCP-001: invalid regex"))
    .collect()
});

static VALIDATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:realpath|abspath|resolve|Clean|sanitize|validate.*path|normpath)",
        r"(?i)(?:startswith|HasPrefix|strings\.Contains.*\.\.|path_traversal)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("MCP-001: invalid regex"))
    .collect()
});

impl Rule for PathTraversalRule {
    fn id(&self) -> &'static str {
        "MCP-001"
    }

    fn name(&self) -> &'static str {
        "Path Traversal"
    }

    fn description(&self) -> &'static str {
        "Detects potential path traversal vulnerabilities where user-controlled input is used in file system operations without proper validation."
    }

    fn default_severity(&self) -> Severity {
        Severity::Critical
    }

    fn check(&self, file_path: &str, content: &str) -> Vec<Finding> {
        match_lines(
            content,
            &TRAVERSAL_PATTERNS,
            &VALIDATION_PATTERNS,
            SuppressionScope::Window(5),
        )
        .into_iter()
        .map(|m| Finding {
            rule_id: self.id().to_string(),
            title: "Potential path traversal vulnerability".to_string(),
            description: "User-controlled input used in file path without validation. Attackers could access files outside the intended directory.".to_string(),
            severity: self.default_severity(),
            file_path: file_path.to_string(),
            line: m.line,
            column: 1,
            snippet: m.text.trim().to_string(),
            remediation: "Validate and sanitize all file paths. Use realpath/abspath to resolve paths and verify they start with the expected base directory.".to_string(),
        })
        .collect()
    }
}
