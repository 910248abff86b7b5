//! planck-queue demo tool.
//!
//! Host-side caller for the queue engine: the two classic demo programs
//! (an integer queue and a fixed-width log queue) and a runner for
//! TOML-scripted push/pop scenarios.

mod cli;
mod demos;
mod scenario;

use anyhow::{Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        cli::Command::Basic(ref args) => {
            println!("{}", demos::basic(args)?);
            Ok(())
        }
        cli::Command::Log(ref args) => {
            for line in demos::log(args)? {
                println!("{line}");
            }
            Ok(())
        }
        cli::Command::Run(ref args) => cmd_run(args),
    }
}

/// Installs the global `tracing` subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load a scenario, run it, print every step, and fail on any mismatch.
fn cmd_run(args: &cli::RunArgs) -> Result<()> {
    let scenario = scenario::Scenario::load(&args.scenario)?;
    println!(
        "Running {} ({} steps, {}x{} bytes)",
        args.scenario.display(),
        scenario.steps.len(),
        scenario.capacity,
        scenario.element_size,
    );

    let report = scenario.run()?;
    for step in &report.steps {
        println!("{step}");
    }

    let failed = report.failed();
    if failed > 0 {
        bail!("{failed} of {} steps failed", report.steps.len());
    }
    println!("\nAll {} steps passed.", report.steps.len());
    Ok(())
}
