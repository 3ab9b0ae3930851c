//! CLI argument definitions for p5k.
//!
//! Uses `clap` derive macros to define the command surface. The [`Command`]
//! enum is the full list of commands, fixed before parsing begins; each
//! variant corresponds to a handler in the [`super::commands`] module.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "p5k",
    version,
    about = "Developer tool for the p5k RISC-V kernel"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Boot the kernel
    #[command(visible_alias = "B", short_flag = 'B')]
    Boot(BootArgs),
}

/// Arguments of `p5k boot`. The command takes none.
#[derive(Args, Debug, Default)]
pub struct BootArgs {}

pub fn parse() -> Cli {
    Cli::parse()
}
