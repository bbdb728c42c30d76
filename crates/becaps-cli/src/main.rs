//! becaps CLI.
//!
//! Commands:
//! - `becaps demo` - Run the vector and stream demonstration (default)
//! - `becaps types` - List registered object types and their operations
//! - `becaps call <type> <invocation>...` - Invoke operations by name on one instance

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

// Object types register themselves at link time.
use becaps_objects as _;

#[derive(Parser)]
#[command(name = "becaps")]
#[command(about = "Capability-table object runtime", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the vector and stream demonstration
    Demo,

    /// List registered object types and their operations
    Types,

    /// Construct one instance and invoke operations on it in order
    Call {
        /// Object type name (e.g., Vector2)
        type_name: String,

        /// Invocations such as "init 3 4" or "magnitude"
        #[arg(required = true)]
        invocations: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::demo::run_stdio(),
        Commands::Types => commands::types::run(),
        Commands::Call { type_name, invocations } => commands::call::run(&type_name, &invocations),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
