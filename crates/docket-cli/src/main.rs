//! Docket CLI - entry point for the `docket` binary.

use clap::Parser;
use docket_cli::{execute_analyze, execute_verify, Cli, Command};

fn main() {
    // Log to stderr so piped JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => execute_analyze(args, cli.ledger_dir, cli.format),
        Command::Verify(args) => execute_verify(args, cli.ledger_dir, cli.format),
    }
}
