use crate::reporter::Reporter;
use crate::rules::{Finding, Severity};
use crate::scanner::ScanResult;
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn severity_label(&self, severity: &Severity) -> colored::ColoredString {
        let label = format!("[{}]", severity.as_str().to_uppercase());
        match severity {
            Severity::Critical => label.red().bold(),
            Severity::High => label.yellow().bold(),
            Severity::Medium => label.cyan(),
            Severity::Low | Severity::Info => label.white(),
        }
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}: {}\n",
            self.severity_label(&finding.severity),
            finding.rule_id,
            finding.title
        ));
        output.push_str(&format!(
            "  Location: {}:{}:{}\n",
            finding.file_path, finding.line, finding.column
        ));
        output.push_str(&format!("  Snippet: {}\n", finding.snippet.dimmed()));

        if self.verbose {
            output.push_str(&format!("  Detail: {}\n", finding.description));
            output.push_str(&format!(
                "  Remediation: {}\n",
                finding.remediation.green()
            ));
        }

        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ScanResult) -> String {
        let mut output = String::new();

        for finding in &result.findings {
            output.push_str(&self.format_finding(finding));
            output.push('\n');
        }

        output.push_str(&result.summary());
        output.push('\n');
        output
    }
}
