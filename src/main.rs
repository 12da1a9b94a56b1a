use clap::{Parser, Subcommand};
use log::error;
use std::process;
use wktlib::serialization::Strictness;

mod cli_commands;

/// Read, normalize and inspect WKT geometries
#[derive(Parser, Debug)]
#[command(name = "wktlib", version, about)]
struct Cli {
    /// Reject malformed coordinates instead of reading them as NaN
    #[arg(long, global = true)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a geometry and print it as canonical WKT
    Normalize {
        /// Geometry in WKT format
        input: String,

        /// Write the result to this file instead of printing it
        #[arg(short, long, value_name = "FILE")]
        output: Option<String>,
    },
    /// Parse a geometry and print a summary of its structure
    Describe {
        /// Geometry in WKT format
        input: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mode = if cli.strict {
        Strictness::Strict
    } else {
        Strictness::Lenient
    };
    log::debug!("Decoding with {mode:?} strictness");

    let result = match &cli.command {
        Command::Normalize { input, output } => {
            cli_commands::normalize(input, mode, output.as_deref())
        }
        Command::Describe { input } => cli_commands::describe(input, mode),
    };

    match result {
        Ok(msg) => println!("{msg}"),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
