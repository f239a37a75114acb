use crate::rules::heuristics::{SuppressionScope, has_file_wide_match, match_lines};
use crate::rules::types::{Finding, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Detects MCP tool handlers and resource endpoints that appear to lack
/// authentication or authorization checks.
///
/// Two-tier scope: any auth signature anywhere in the file vetoes the whole
/// file (auth is normally established once, globally); only without a
/// file-wide hit does the rule fall back to a 10-line window per match.
/// A deliberately permissive trade-off: fewer false positives at the cost
/// of missing per-handler gaps in files that mix protected and unprotected
/// handlers.
pub struct AuthGapsRule;

static HANDLER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // MCP tool handler declaration idioms.
        r"(?i)(?:@server\.tool|@app\.tool|tool_handler|handle_tool|CallToolResult)\s*",
        // HTTP verb route registrations.
        r#"(?i)(?:\.get|\.post|\.put|\.delete|\.patch)\s*\(\s*["'/]"#,
        // Resource read/write/list operations.
        r"(?i)(?:read_resource|write_resource|list_resources|ResourceTemplate)\s*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("MCP-002: invalid regex"))
    .collect()
});

static AUTH_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:authenticate|authorize|auth_required|check_permission|verify_token|api_key|bearer|jwt|oauth)",
        r"(?i)(?:middleware.*auth|auth.*middleware|requireAuth|isAuthenticated|@login_required|@requires_auth)",
        r"(?i)(?:session\.user|request\.user|ctx\.user|current_user|get_user)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("MCP-002: invalid regex"))
    .collect()
});

impl Rule for AuthGapsRule {
    fn id(&self) -> &'static str {
        "MCP-002"
    }

    fn name(&self) -> &'static str {
        "Missing Authentication/Authorization"
    }

    fn description(&self) -> &'static str {
        "Detects MCP tool handlers and resource endpoints that may lack authentication or authorization checks."
    }

    fn default_severity(&self) -> Severity {
        Severity::High
    }

    fn check(&self, file_path: &str, content: &str) -> Vec<Finding> {
        // Tier one: any auth signature anywhere means the file is treated
        // as protected.
        if has_file_wide_match(content, &AUTH_PATTERNS) {
            debug!(file = file_path, "file-wide auth signature, skipping");
            return Vec::new();
        }

        match_lines(
            content,
            &HANDLER_PATTERNS,
            &AUTH_PATTERNS,
            SuppressionScope::Window(10),
        )
        .into_iter()
        .map(|m| Finding {
            rule_id: self.id().to_string(),
            title: "MCP handler without authentication".to_string(),
            description: "Tool or resource handler appears to lack authentication/authorization checks. Unauthenticated access could allow unauthorized operations.".to_string(),
            severity: self.default_severity(),
            file_path: file_path.to_string(),
            line: m.line,
            column: 1,
            snippet: m.text.trim().to_string(),
            remediation: "Add authentication middleware or explicit permission checks before processing tool calls. Implement least-privilege access controls.".to_string(),
        })
        .collect()
    }
}
