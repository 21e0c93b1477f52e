use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;

use lintwarden_core::session::LintSession;
use lintwarden_core::types::Severity;

#[derive(Parser)]
#[command(name = "lintwarden", version, about = "Continuous lint report for JS/TS projects")]
struct Cli {
    /// Project root to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Print every diagnostic instead of the summary
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let session = LintSession::new(&cli.root)?;
    let outcome = session.initial_scan();

    if cli.verbose {
        for d in &outcome.diagnostics {
            let tag = match d.severity {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow().bold(),
            };
            println!(
                "{}: {} {} [{}:{}:{}]",
                tag,
                d.message,
                format!("({})", d.rule_id).dimmed(),
                d.path.display(),
                d.start_line,
                d.start_column
            );
        }
    }

    println!(
        "{} files analyzed, {} diagnostics",
        outcome.files_analyzed,
        outcome.diagnostics.len()
    );

    if outcome.has_findings() {
        process::exit(1);
    }
    Ok(())
}
