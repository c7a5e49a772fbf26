//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use docvars_core::emit::{self, EmitFormat};
use docvars_core::resolver;
use docvars_shared::{AppConfig, VariableRegistry, init_config, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docvars — publish manifest fields as documentation template variables.
#[derive(Parser)]
#[command(
    name = "docvars",
    version,
    about = "Resolve the project manifest version into documentation template variables.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Resolve the manifest version and emit the variable registry.
    Resolve {
        /// Path to the XML manifest (overrides the config file).
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write the output to a file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Config file to use instead of ./docvars.toml.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Output format for the `resolve` command.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
    Env,
}

impl From<OutputFormat> for EmitFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => EmitFormat::Text,
            OutputFormat::Json => EmitFormat::Json,
            OutputFormat::Env => EmitFormat::Env,
        }
    }
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docvars=info",
        1 => "docvars=debug",
        _ => "docvars=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            manifest,
            format,
            out,
            config,
        } => cmd_resolve(manifest, format, out.as_deref(), config.as_deref()),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_resolve(
    manifest: Option<PathBuf>,
    format: OutputFormat,
    out: Option<&std::path::Path>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    // CLI flag wins over the config file's manifest path.
    let manifest_path = manifest.unwrap_or_else(|| config.manifest_path());

    // Seed static variables from config before resolution.
    let mut registry: VariableRegistry = config
        .variables
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    info!(
        manifest = %manifest_path.display(),
        seeded = registry.len(),
        "resolving manifest version"
    );

    let result = resolver::resolve_version(&manifest_path, &mut registry)?;

    let rendered = emit::render(&registry, format.into(), env!("CARGO_PKG_VERSION"))?;

    match out {
        Some(path) => {
            std::fs::write(path, &rendered)
                .map_err(|e| eyre!("cannot write '{}': {e}", path.display()))?;
            println!();
            println!("  Variables written.");
            println!("  Version:   {}", result.version);
            println!("  Variables: {}", registry.len());
            println!("  Path:      {}", path.display());
            println!();
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
