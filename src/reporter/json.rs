use crate::reporter::Reporter;
use crate::scanner::ScanResult;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, result: &ScanResult) -> String {
        serde_json::to_string_pretty(result)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{create_finding, create_test_result};
    use crate::rules::Severity;

    #[test]
    fn test_json_output_structure() {
        let reporter = JsonReporter::new();
        let result = create_test_result(vec![]);
        let output = reporter.report(&result);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["files_scanned"], 3);
        assert_eq!(parsed["rules_run"], 5);
        assert!(parsed["findings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_output_with_findings() {
        let reporter = JsonReporter::new();
        let finding = create_finding("MCP-005", Severity::Critical, "server.py", 10);
        let result = create_test_result(vec![finding]);
        let output = reporter.report(&result);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["findings"][0]["rule_id"], "MCP-005");
        assert_eq!(parsed["findings"][0]["severity"], "critical");
        assert_eq!(parsed["findings"][0]["line"], 10);
    }
}
