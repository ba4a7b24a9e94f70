//! navgate CLI - Main entry point

mod cli;

use clap::{Parser, Subcommand};
use navgate_foundation::{GateSettings, PermissionTable};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// navgate - validated page-to-page navigation
#[derive(Parser, Debug)]
#[command(name = "navgate")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and resolve a registry file, then list its path keys
    Check {
        /// Registry document (navigation.json)
        registry: PathBuf,
    },
    /// Run one navigation attempt against a registry
    Attempt {
        /// Registry document (navigation.json)
        registry: PathBuf,

        /// Path key to navigate to
        #[arg(short = 'k', long)]
        path_key: String,

        /// Payload file ({"required": {...}, "optional": {...}})
        #[arg(short, long)]
        payload: PathBuf,

        /// Originating page identifier
        #[arg(short, long)]
        origin: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match args.command {
        Command::Check { registry } => {
            cli::check(&registry)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Attempt {
            registry,
            path_key,
            payload,
            origin,
        } => {
            let settings = GateSettings::load().unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load gate settings: {}", e);
                GateSettings::default()
            });
            let overlay = PermissionTable::load().unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load permissions: {}", e);
                PermissionTable::default()
            });

            let committed = cli::attempt(
                &registry,
                &path_key,
                &payload,
                origin.as_deref(),
                settings,
                overlay,
            )?;
            Ok(if committed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
