//! SARIF v2.1.0 output for GitHub Code Scanning and other CI consumers.

use crate::reporter::Reporter;
use crate::scanner::ScanResult;
use serde::Serialize;
use std::collections::HashSet;

pub struct SarifReporter;

impl SarifReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SarifReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SarifReporter {
    fn report(&self, result: &ScanResult) -> String {
        let sarif = SarifReport::from_scan_result(result);
        serde_json::to_string_pretty(&sarif)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize SARIF: {}"}}"#, e))
    }
}

#[derive(Debug, Serialize)]
pub struct SarifReport {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifDriver {
    pub name: String,
    pub version: String,
    pub information_uri: String,
    pub rules: Vec<SarifRule>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRule {
    pub id: String,
    pub name: String,
    pub short_description: SarifMessage,
    pub default_configuration: SarifRuleConfig,
}

#[derive(Debug, Serialize)]
pub struct SarifRuleConfig {
    pub level: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: String,
    pub level: String,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
pub struct SarifMessage {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    pub physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPhysicalLocation {
    pub artifact_location: SarifArtifactLocation,
    pub region: SarifRegion,
}

#[derive(Debug, Serialize)]
pub struct SarifArtifactLocation {
    pub uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRegion {
    pub start_line: usize,
    pub start_column: usize,
}

impl SarifReport {
    pub fn from_scan_result(result: &ScanResult) -> Self {
        // Rule descriptors: one entry per distinct rule that produced
        // findings, with the level inferred from the finding severity.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut rules: Vec<SarifRule> = Vec::new();
        for finding in &result.findings {
            if seen.insert(finding.rule_id.as_str()) {
                rules.push(SarifRule {
                    id: finding.rule_id.clone(),
                    name: finding.title.clone(),
                    short_description: SarifMessage {
                        text: finding.description.clone(),
                    },
                    default_configuration: SarifRuleConfig {
                        level: finding.severity.sarif_level().to_string(),
                    },
                });
            }
        }

        let results: Vec<SarifResult> = result
            .findings
            .iter()
            .map(|f| SarifResult {
                rule_id: f.rule_id.clone(),
                level: f.severity.sarif_level().to_string(),
                message: SarifMessage {
                    text: format!("{}\n\nRemediation: {}", f.description, f.remediation),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: f.file_path.clone(),
                        },
                        region: SarifRegion {
                            start_line: f.line,
                            start_column: f.column,
                        },
                    },
                }],
            })
            .collect();

        SarifReport {
            schema: "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json".to_string(),
            version: "2.1.0".to_string(),
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "mcpscan".to_string(),
                        version: env!("CARGO_PKG_VERSION").to_string(),
                        information_uri: "https://github.com/nostalgicskinco/mcpscan".to_string(),
                        rules,
                    },
                },
                results,
            }],
        }
    }
}
