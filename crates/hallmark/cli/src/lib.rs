//! Hallmark CLI - operate the provenance registries from a terminal
//!
//! Registry state lives in a JSON snapshot file. Each invocation loads it,
//! applies at most one transaction as `--caller` at `--sequence`, and writes
//! it back.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{admin, artisan, design, journal, material, Session};
use config::CliConfig;
pub use error::{CliError, CliResult};
use hallmark_runtime::{Deployment, DeploymentConfig, Principal};

/// Hallmark CLI application
#[derive(Parser)]
#[command(name = "hallmark")]
#[command(about = "Hallmark - artisan, material and design provenance registries", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "HALLMARK_CONFIG")]
    config: Option<String>,

    /// Snapshot file holding registry state
    #[arg(short, long, env = "HALLMARK_STATE")]
    state: Option<PathBuf>,

    /// Principal sending the transaction
    #[arg(long, env = "HALLMARK_CALLER")]
    caller: Option<String>,

    /// Block height for the transaction (defaults to the last applied one)
    #[arg(long)]
    sequence: Option<u64>,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value = "text")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Deploy fresh registries into the state file
    Init {
        /// Initial admin of every registry
        #[arg(long)]
        deployer: Option<String>,

        /// Overwrite an existing state file
        #[arg(short, long)]
        force: bool,
    },

    /// Registry admins
    Admin {
        #[command(subcommand)]
        command: admin::AdminCommands,
    },

    /// Artisan identity verification
    Artisan {
        #[command(subcommand)]
        command: artisan::ArtisanCommands,
    },

    /// Material certification
    Material {
        #[command(subcommand)]
        command: material::MaterialCommands,
    },

    /// Design registration
    Design {
        #[command(subcommand)]
        command: design::DesignCommands,
    },

    /// Show applied transactions
    Journal {
        /// First receipt index to show
        #[arg(long, default_value_t = 0)]
        from: u64,

        /// Maximum receipts to show (0 = all)
        #[arg(short, long, default_value_t = 0)]
        limit: usize,
    },
}

/// Run using the current process arguments and print the result.
pub fn run() -> CliResult<()> {
    let rendered = run_with_args(std::env::args_os())?;
    println!("{rendered}");
    Ok(())
}

/// Run using the provided argument iterator, returning the rendered output.
pub fn run_with_args<I, T>(args: I) -> CliResult<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let session = Session {
        state_path: config.state_path(cli.state),
        format: cli.output,
        caller: cli
            .caller
            .or_else(|| config.default_caller.clone())
            .map(Principal::new),
        sequence: cli.sequence,
    };

    match cli.command {
        Commands::Init { deployer, force } => init(&session, &config, deployer, force),
        Commands::Admin { command } => admin::execute(command, &session),
        Commands::Artisan { command } => artisan::execute(command, &session),
        Commands::Material { command } => material::execute(command, &session),
        Commands::Design { command } => design::execute(command, &session),
        Commands::Journal { from, limit } => journal::execute(from, limit, &session),
    }
}

fn init(
    session: &Session,
    config: &CliConfig,
    deployer: Option<String>,
    force: bool,
) -> CliResult<String> {
    if session.state_path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "{} already exists; pass --force to replace it",
            session.state_path.display()
        )));
    }

    let deployment_config = match deployer.or_else(|| config.deployer.clone()) {
        Some(deployer) => DeploymentConfig::with_deployer(deployer),
        None => DeploymentConfig::default(),
    };
    let deployment = Deployment::new(deployment_config);
    deployment.save(&session.state_path)?;

    let text = format!(
        "Deployed registries to {} (admin {})",
        session.state_path.display(),
        deployment.config().deployer
    );
    output::render(session.format, deployment.config(), text)
}
