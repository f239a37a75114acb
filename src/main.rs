use clap::Parser;
use mcpscan::{
    Cli, JsonReporter, OutputFormat, Reporter, SarifReporter, Scanner, TerminalReporter,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let scanner = Scanner::new();

    let result = match scanner.scan_directory(&cli.path) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("mcpscan: {}", e);
            return ExitCode::from(2);
        }
    };

    let reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Terminal => Box::new(TerminalReporter::new(cli.verbose)),
        OutputFormat::Json => Box::new(JsonReporter::new()),
        OutputFormat::Sarif => Box::new(SarifReporter::new()),
    };
    let output = reporter.report(&result);
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    if result.has_blocking_findings() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
