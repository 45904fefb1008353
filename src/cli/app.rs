//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use epflags::output::OutputMode;

/// epflags - Error Prone configuration compiler
#[derive(Parser, Debug)]
#[command(
    name = "epflags",
    version,
    about = "Compile Error Prone options into javac plugin flags",
    long_about = "Compile a TOML description of Error Prone options into the\n\
                  ordered -Xep* argument list the compiler plugin expects.\n\n\
                  Structured values are validated first, so configuration\n\
                  mistakes fail here instead of inside the javac invocation."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the configuration into the final argument list
    Render {
        /// Path to the configuration file
        #[arg(short, long, default_value = epflags::config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Validate the configuration without printing the arguments
    Check {
        /// Path to the configuration file
        #[arg(short, long, default_value = epflags::config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Render { config }) => commands::render(&config, output_mode),
        Some(Command::Check { config }) => commands::check(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("epflags v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("epflags v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'epflags --help' for usage");
                println!("Run 'epflags render' to compile errorprone.toml");
            }
            Ok(())
        },
    }
}
