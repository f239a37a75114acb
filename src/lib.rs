pub mod cli;
pub mod error;
pub mod reporter;
pub mod rules;
pub mod scanner;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use error::{Result, ScanError};
pub use reporter::{
    Reporter, json::JsonReporter, sarif::SarifReporter, terminal::TerminalReporter,
};
pub use rules::{Finding, Rule, Severity, default_rules};
pub use scanner::{ScanResult, Scanner};
