//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use repotidy::output::{ErrorResult, OutputMode};

/// repotidy - Check a library repository against a standard
#[derive(Parser, Debug)]
#[command(
    name = "repotidy",
    version,
    about = "Check a library repository against a standard",
    long_about = "Check a library repository against a declarative standard.\n\n\
                  A standard is an ordered list of named checks. Every check runs once\n\
                  and reports passed, failed or skipped; the run fails if any check fails."
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
    /// Check a repository against the standard
    Check {
        /// Repository to check
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Standard to check against (default: <path>/.repotidy.toml, then the bundled standard)
        #[arg(short, long)]
        standard: Option<PathBuf>,

        /// Directory holding reference artifacts
        #[arg(long)]
        references: Option<PathBuf>,

        /// Print remediation guidance for failed checks
        #[arg(long)]
        fix: bool,

        /// Only run these checks (comma separated identifiers)
        #[arg(long, value_delimiter = ',')]
        checks: Vec<String>,

        /// Override the repository name
        #[arg(long)]
        repo_name: Option<String>,
    },

    /// List registered checks
    List {
        /// Standard to compare with (default: ./.repotidy.toml, then the bundled standard)
        #[arg(short, long)]
        standard: Option<PathBuf>,
    },

    /// Write the bundled standard to .repotidy.toml
    Init {
        /// Repository to initialize
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing .repotidy.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI, returning the process exit code
pub fn run() -> anyhow::Result<i32> {
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

    match dispatch(cli, output_mode) {
        Ok(code) => Ok(code),
        Err(e) if output_mode == OutputMode::Json => {
            ErrorResult {
                error: format!("{e:#}"),
            }
            .render(output_mode);
            Ok(repotidy::EXIT_CONFIG_ERROR)
        },
        Err(e) => Err(e),
    }
}

fn dispatch(cli: Cli, output_mode: OutputMode) -> anyhow::Result<i32> {
    match cli.command {
        Some(Command::Check {
            path,
            standard,
            references,
            fix,
            checks,
            repo_name,
        }) => {
            let args = commands::CheckArgs {
                path,
                standard,
                references,
                fix,
                checks,
                repo_name,
            };
            commands::check(&args, cli.verbose, output_mode)
        },
        Some(Command::List { standard }) => commands::list(standard.as_deref(), output_mode),
        Some(Command::Init { path, force }) => commands::init(&path, force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": repotidy::VERSION
                    })
                );
            } else {
                println!("repotidy v{}", repotidy::VERSION);
            }
            Ok(repotidy::EXIT_SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": repotidy::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("repotidy v{}", repotidy::VERSION);
                println!("\nRun 'repotidy --help' for usage");
                println!("Run 'repotidy check' to check the current repository");
            }
            Ok(repotidy::EXIT_SUCCESS)
        },
    }
}
