pub mod auth_gaps;
pub mod excessive_permissions;
pub mod heuristics;
pub mod path_traversal;
pub mod prompt_injection;
pub mod secrets_exposure;
pub mod types;

pub use auth_gaps::AuthGapsRule;
pub use excessive_permissions::ExcessivePermissionsRule;
pub use path_traversal::PathTraversalRule;
pub use prompt_injection::PromptInjectionRule;
pub use secrets_exposure::SecretsExposureRule;
pub use types::{Finding, Severity};

/// Contract implemented by every security rule.
///
/// `check` must be a pure function of its inputs so rules can run against
/// different files in parallel without synchronization. Pattern tables are
/// compiled once per process and shared read-only.
pub trait Rule: Send + Sync {
    /// Stable rule identifier, e.g. "MCP-001".
    fn id(&self) -> &'static str;
    /// Human-readable rule name.
    fn name(&self) -> &'static str;
    /// What the rule checks for.
    fn description(&self) -> &'static str;
    /// Default severity for findings from this rule.
    fn default_severity(&self) -> Severity;
    /// Scans one file's content and returns findings. A rule never emits a
    /// finding for a match it has judged suppressed by contextual evidence.
    fn check(&self, file_path: &str, content: &str) -> Vec<Finding>;
}

/// The built-in rule set, in registration order. Ordering is part of the
/// scan result contract, so this stays an explicit list rather than any
/// dynamic discovery.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(PathTraversalRule),
        Box::new(AuthGapsRule),
        Box::new(PromptInjectionRule),
        Box::new(ExcessivePermissionsRule),
        Box::new(SecretsExposureRule),
    ]
}
