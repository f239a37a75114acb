use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Sarif,
}

#[derive(Parser, Debug)]
#[command(
    name = "mcpscan",
    version,
    about = "Static security scanner for MCP server source trees",
    long_about = "mcpscan scans Model-Context-Protocol server source code for path traversal, missing authentication, prompt injection surfaces, excessive permissions, and hardcoded secrets."
)]
pub struct Cli {
    /// Directory to scan
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Show descriptions and remediation in terminal output
    #[arg(short, long)]
    pub verbose: bool,
}
