use crate::rules::heuristics::{SuppressionScope, match_lines};
use crate::rules::types::{Finding, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

/// Detects overly broad capability grants. This rule has no mitigation
/// table: a broad grant is flagged unconditionally once matched.
pub struct ExcessivePermissionsRule;

static EXCESSIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Filesystem enumeration rooted at /.
        r#"(?i)(?:glob|walk|listdir|readdir|scandir)\s*\(\s*["']/["']"#,
        // File operations under sensitive system roots.
        r#"(?i)(?:open|read|write)\s*\(\s*["']/(?:etc|usr|var|root|home)"#,
        // Network binding to the unrestricted address.
        r#"(?i)(?:0\.0\.0\.0|INADDR_ANY|bind.*["']0\.0\.0\.0)"#,
        // Shell/subprocess execution.
        r"(?i)(?:subprocess\.(?:call|run|Popen)|os\.(?:system|exec|popen)|exec\.Command)\s*\(",
        // Unscoped destructive SQL statements.
        r"(?i)(?:DROP\s+TABLE|TRUNCATE\s+TABLE)",
        // Environment access indexed by request-derived identifiers.
        r"(?i)(?:os\.environ|process\.env|os\.Getenv)\s*(?:\[|\()\s*(?:request|input|param)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("MCP-004: invalid regex"))
    .collect()
});

impl Rule for ExcessivePermissionsRule {
    fn id(&self) -> &'static str {
        "MCP-004"
    }

    fn name(&self) -> &'static str {
        "Excessive Permissions"
    }

    fn description(&self) -> &'static str {
        "Detects MCP server tools with overly broad permissions: unrestricted file system access, shell execution, broad network binding, or unscoped database queries."
    }

    fn default_severity(&self) -> Severity {
        Severity::Medium
    }

    fn check(&self, file_path: &str, content: &str) -> Vec<Finding> {
        match_lines(content, &EXCESSIVE_PATTERNS, &[], SuppressionScope::None)
            .into_iter()
            .map(|m| Finding {
                rule_id: self.id().to_string(),
                title: "Excessive permissions detected".to_string(),
                description: "MCP server tool has overly broad capabilities that violate the principle of least privilege. OWASP identifies 'Excessive Agency' as a top LLM risk.".to_string(),
                severity: self.default_severity(),
                file_path: file_path.to_string(),
                line: m.line,
                column: 1,
                snippet: m.text.trim().to_string(),
                remediation: "Apply least-privilege: scope file access to specific directories, restrict network binding, use parameterized queries, and avoid shell execution where possible.".to_string(),
            })
            .collect()
    }
}
