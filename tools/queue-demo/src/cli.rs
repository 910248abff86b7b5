//! Command-line interface definitions for queue-demo.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Demo programs and a scenario runner for planck-queue.
#[derive(Parser)]
#[command(name = "queue-demo", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Push one integer through a queue and print it back.
    Basic(BasicArgs),
    /// Queue fixed-width log records and print them in order.
    Log(LogArgs),
    /// Execute a TOML scenario file against a byte queue.
    Run(RunArgs),
}

/// Arguments for the `basic` subcommand.
#[derive(Parser)]
pub struct BasicArgs {
    /// Queue capacity in elements.
    #[arg(long, short = 'c', default_value_t = 5)]
    pub capacity: u16,

    /// Value to push.
    #[arg(long, default_value_t = 10)]
    pub value: i32,
}

/// Arguments for the `log` subcommand.
#[derive(Parser)]
pub struct LogArgs {
    /// Queue capacity in records.
    #[arg(long, short = 'c', default_value_t = 20)]
    pub capacity: u16,

    /// Messages to enqueue; each is truncated to one record.
    #[arg(default_values_t = [
        "System initialized".to_string(),
        "Temperature sensor ready".to_string(),
        "Main loop started".to_string(),
    ])]
    pub messages: Vec<String>,
}

/// Arguments for the `run` subcommand.
#[derive(Parser)]
pub struct RunArgs {
    /// Path to the scenario file.
    pub scenario: PathBuf,
}
