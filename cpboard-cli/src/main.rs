//! cpboard CLI - Find the serial ports of attached CircuitPython boards.
//!
//! ## Features
//!
//! - List CircuitPython ports with their role (REPL or data)
//! - Print the first REPL or data port for use in scripts
//! - JSON output for tooling
//! - Shell completion generation

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use env_logger::Env;
use log::debug;
use std::env;

mod commands;

use commands::{
    completions::cmd_completions,
    ports::{OutputMode, Selection, cmd_ports},
};

/// cpboard - Find the serial ports of attached CircuitPython boards.
///
/// Environment variables:
///   CPBOARD_JSON   - Output JSON instead of a human-readable list
#[derive(Parser)]
#[command(name = "cpboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON to stdout.
    #[arg(long, global = true, env = "CPBOARD_JSON")]
    json: bool,

    /// Verbose output level (-v, -vv for increasing detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-essential output).
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List CircuitPython serial ports.
    List {
        /// Include every serial port, not only CircuitPython ones.
        #[arg(long)]
        all: bool,
    },

    /// List ports presenting the CircuitPython REPL.
    Repl {
        /// Print only the first matching device path.
        #[arg(long)]
        first: bool,
    },

    /// List ports used for data transfer.
    Data {
        /// Print only the first matching device path.
        #[arg(long)]
        first: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell type for completions.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Default log filter for the requested verbosity.
fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if env::var("NO_COLOR").is_ok() || !console::Term::stderr().is_term() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level(cli.quiet, cli.verbose)))
        .format_target(cli.verbose >= 2)
        .format_timestamp(if cli.verbose >= 2 {
            Some(env_logger::TimestampPrecision::Millis)
        } else {
            None
        })
        .init();

    debug!(
        "cpboard v{} (verbose level: {})",
        env!("CARGO_PKG_VERSION"),
        cli.verbose
    );

    let mode = |first| OutputMode {
        json: cli.json,
        first,
    };

    match &cli.command {
        Commands::List { all } => {
            let selection = if *all {
                Selection::All
            } else {
                Selection::CircuitPython
            };
            cmd_ports(selection, mode(false))?;
        },
        Commands::Repl { first } => {
            cmd_ports(Selection::Repl, mode(*first))?;
        },
        Commands::Data { first } => {
            cmd_ports(Selection::Data, mode(*first))?;
        },
        Commands::Completions { shell } => {
            cmd_completions(*shell);
        },
    }

    Ok(())
}
