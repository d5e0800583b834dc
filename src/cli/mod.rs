//! Command-line interface wiring for the `topkarten` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod caption;
pub mod check;
pub mod compose;
pub mod utils;
pub mod wrap;

/// Parsed CLI entrypoint for the `topkarten` binary.
#[derive(Parser, Debug)]
#[command(
    name = "topkarten",
    version,
    about = "Render committee notices into social-media card images"
)]
pub struct Cli {
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one card image per agenda item of a notice.
    Compose(compose::ComposeArgs),
    /// Print the carousel caption for a notice.
    Caption(caption::CaptionArgs),
    /// Show how a text wraps into display lines.
    Wrap(wrap::WrapArgs),
    /// Validate the template assets eagerly.
    Check(check::CheckArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compose(args) => compose::handle(args),
        Command::Caption(args) => caption::handle(args),
        Command::Wrap(args) => wrap::handle(args),
        Command::Check(args) => check::handle(args),
    }
}
