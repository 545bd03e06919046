//! Device PPI
//!
//! Diagnostic command line for the display density resolver: resolves a
//! given hardware identifier with preset display signals, or lists the
//! built-in classification table.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use device_ppi::{
    DeviceClass, FixedDisplay, FixedIdentity, PpiConfig, PpiResolver, Resolver, Result,
    ScaleSignal,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Device PPI - physical display density from hardware identifiers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// YAML configuration file
    #[arg(long, env = "PPI_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the density for a hardware identifier
    Resolve(ResolveArgs),
    /// List every known hardware identifier
    Table {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ClapArgs, Debug)]
struct ResolveArgs {
    /// Hardware identifier (e.g. "iPhone14,5"); omit to simulate an unavailable one
    #[arg(long)]
    identifier: Option<String>,

    /// Device class used if the identifier is unknown (phone, tablet)
    #[arg(long, default_value = "phone")]
    device_class: DeviceClass,

    /// Logical display scale
    #[arg(long, default_value_t = 2.0)]
    scale: f64,

    /// Native display scale, defaults to the logical scale
    #[arg(long)]
    native_scale: Option<f64>,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args);
    debug!("{} {}", device_ppi::NAME, device_ppi::VERSION);

    let config = match &args.config {
        Some(path) => PpiConfig::from_file(path)?,
        None => PpiConfig::default(),
    };

    match args.command {
        Command::Resolve(resolve) => run_resolve(resolve, &config),
        Command::Table { json } => run_table(json, &config),
    }
}

fn run_resolve(args: ResolveArgs, config: &PpiConfig) -> Result<()> {
    let scale = ScaleSignal::new(args.scale, args.native_scale.unwrap_or(args.scale));
    scale.validate()?;

    let resolver = PpiResolver::with_config(
        Arc::new(FixedIdentity::from(args.identifier)),
        Arc::new(FixedDisplay::new(args.device_class, scale)),
        config,
    )?;

    let outcome = resolver.resolve_ppi();
    info!(exact = outcome.is_exact(), ppi = outcome.ppi(), "Resolved display density");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.is_exact() {
        println!("Exact: {}", outcome);
    } else {
        println!("Best guess: {}", outcome);
    }
    Ok(())
}

fn run_table(json: bool, config: &PpiConfig) -> Result<()> {
    let resolver: Arc<Resolver> = if config.extra_models.is_empty() {
        Resolver::builtin()
    } else {
        Arc::new(config.build_resolver()?)
    };
    let models = resolver.models();

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    for model in models {
        println!("{:<12} {:>5} ppi  {}", model.identifier, model.ppi, model.name);
    }
    Ok(())
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Logs go to stderr so stdout stays parseable
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
