mod cli;
mod settings;
mod workflow;

use std::io;

use anyhow::Result;
use cli::parse_cli;
use workflow::ReportWorkflow;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = parse_cli();
    pcstat::logging::initialize(cli.verbose);

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
        if cli.files.is_empty() && cli.pid.is_none() {
            return Ok(());
        }
    }

    let workflow = ReportWorkflow::from_config(cli.files, cli.pid, resolved)?;
    let summary = workflow.run(&mut io::stdout().lock())?;
    tracing::info!(
        reported = summary.reported,
        skipped = summary.skipped.len(),
        "report complete"
    );

    Ok(())
}
