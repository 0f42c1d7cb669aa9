//! `ndfc-doc`: Ansible documentation from NDFC templates.
//!
//! Fetches a configuration template from a Nexus Dashboard Fabric
//! Controller, corrects the controller's loose parameter typing, and prints
//! the module argument documentation as YAML.
//!
//! # Examples
//!
//! ```bash
//! export NDFC_IP4=10.1.1.1 NDFC_PASSWORD=mypassword
//!
//! # Argument documentation for Easy_Fabric
//! ndfc-doc document Easy_Fabric > easy_fabric.yaml
//!
//! # Full module skeleton, resolving template-name choices
//! ndfc-doc document Easy_Fabric --layout module --with-catalog --author "Fabric Team"
//!
//! # Save once, then work offline
//! ndfc-doc save Easy_Fabric --output templates/ --with-catalog
//! ndfc-doc document Easy_Fabric --from-file templates/ --with-catalog
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use ndfc_cli::commands::common::ControllerArgs;
use ndfc_cli::commands::document::DocumentArgs;
use ndfc_cli::commands::raw::RawArgs;
use ndfc_cli::commands::save::SaveArgs;
use ndfc_cli::commands::{self, exit_code_for};
use ndfc_cli::{LogFormat, settings};
use ndfc_core::cli::ExitCode;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate Ansible module documentation from NDFC configuration templates.
///
/// Controller credentials are read from NDFC_IP4, NDFC_USERNAME,
/// NDFC_PASSWORD and NDFC_DOMAIN unless given on the command line.
#[derive(Parser, Debug)]
#[command(name = "ndfc-doc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Configuration file (default: <config dir>/ndfc-doc/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    controller: ControllerArgs,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the Ansible documentation of a template.
    ///
    /// # Examples
    ///
    /// ```bash
    /// ndfc-doc document Easy_Fabric
    /// ndfc-doc document Easy_Fabric --format json
    /// ndfc-doc document Easy_Fabric --from-file Easy_Fabric.json
    /// ```
    Document(DocumentArgs),

    /// Print a template as returned by the controller, without its body.
    Raw(RawArgs),

    /// Save a template as JSON for use with --from-file.
    Save(SaveArgs),

    /// Generate shell completions.
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_format) {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(ExitCode::ERROR.as_i32());
    }

    let exit_code = match execute_command(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Command failed");
            eprintln!("{} {e:#}", "error:".red().bold());
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(verbose: bool, format: LogFormat) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

async fn execute_command(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Document(args) => {
            let settings = settings::load(cli.config.as_deref()).await?;
            commands::document::run(args, &cli.controller, &settings).await
        }
        Commands::Raw(args) => commands::raw::run(args, &cli.controller).await,
        Commands::Save(args) => commands::save::run(args, &cli.controller).await,
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
