// ABOUTME: Command-line interface definitions and the fixtures dump subcommand

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::fixtures::Fixtures;

#[derive(Parser)]
#[command(
    name = "macromind",
    about = "Terminal fitness tracker with a mock AI coach, dashboard, and form checker",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the event-loop tick interval in milliseconds
    #[arg(long, global = true)]
    pub tick_rate: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default when no command is given)
    Tui,
    /// Print the mock datasets as pretty JSON
    Fixtures,
}

/// `macromind fixtures` — dump the full mock dataset for inspection.
pub fn print_fixtures() -> Result<()> {
    let fixtures = Fixtures::new();
    println!("{}", serde_json::to_string_pretty(&fixtures)?);
    Ok(())
}
