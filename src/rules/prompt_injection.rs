use crate::rules::heuristics::{SuppressionScope, match_lines};
use crate::rules::types::{Finding, Severity};
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;

/// Detects tool outputs that may pass unsanitized external data back to
/// the LLM.
pub struct PromptInjectionRule;

static INJECTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Output explicitly flagged raw/unescaped or sourced from user input.
        r"(?i)(?:return|yield|respond)\s*.*(?:raw|unsanitized|unescaped|user_input|external)",
        // String formatting blending result/output terms with tool/mcp terms.
        r#"(?i)(?:f["']|\.format\(|%s|fmt\.Sprintf)\s*.*(?:result|output|response|data)\s*.*(?:tool|mcp)"#,
        // Structured tool content wired to request/input/fetch/URL terms.
        r"(?i)(?:TextContent|text_content|content=)\s*.*(?:request|input|query|fetch|http|url)",
        // Attribute assignment driven by request-like identifiers.
        r"(?i)(?:href|src|url|link)\s*=\s*(?:request|input|param|data|result)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("MCP-003: invalid regex"))
    .collect()
});

static SANITIZATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:sanitize|escape|encode|strip|clean|purify|bleach|DOMPurify|html\.escape|markupsafe)",
        r"(?i)(?:allowlist|whitelist|validate_output|output_filter|content_filter)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("MCP-003: invalid regex"))
    .collect()
});

impl Rule for PromptInjectionRule {
    fn id(&self) -> &'static str {
        "MCP-003"
    }

    fn name(&self) -> &'static str {
        "Prompt Injection Surface"
    }

    fn description(&self) -> &'static str {
        "Detects tool outputs that may pass unsanitized external data back to the LLM, creating prompt injection attack surfaces."
    }

    fn default_severity(&self) -> Severity {
        Severity::High
    }

    fn check(&self, file_path: &str, content: &str) -> Vec<Finding> {
        match_lines(
            content,
            &INJECTION_PATTERNS,
            &SANITIZATION_PATTERNS,
            SuppressionScope::Window(5),
        )
        .into_iter()
        .map(|m| Finding {
            rule_id: self.id().to_string(),
            title: "Potential prompt injection surface in tool output".to_string(),
            description: "Tool output may include unsanitized external data that could be used for prompt injection when returned to the LLM.".to_string(),
            severity: self.default_severity(),
            file_path: file_path.to_string(),
            line: m.line,
            column: 1,
            snippet: m.text.trim().to_string(),
            remediation: "Sanitize all external data before including in tool responses. Consider output filtering, content-type restrictions, and structured output formats.".to_string(),
        })
        .collect()
    }
}
