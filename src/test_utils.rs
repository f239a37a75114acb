#[cfg(test)]
pub mod fixtures {
    use crate::rules::{Finding, Severity};
    use crate::scanner::ScanResult;

    pub fn create_test_result(findings: Vec<Finding>) -> ScanResult {
        ScanResult {
            findings,
            files_scanned: 3,
            rules_run: 5,
        }
    }

    pub fn create_finding(
        rule_id: &str,
        severity: Severity,
        file_path: &str,
        line: usize,
    ) -> Finding {
        Finding {
            rule_id: rule_id.to_string(),
            title: "Test finding".to_string(),
            description: "test description".to_string(),
            severity,
            file_path: file_path.to_string(),
            line,
            column: 1,
            snippet: "test snippet".to_string(),
            remediation: "test remediation".to_string(),
        }
    }
}
