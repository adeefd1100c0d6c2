mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use pcset_core::{AnalysisConfig, PitchClassSet};
use tracing_subscriber::EnvFilter;

use crate::report::SetReport;

fn main() -> pcset_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.base)?;

    match cli.command {
        Commands::Info { set, json } => run_info(&set, json, &config),
        Commands::SetClass { set } => run_set_class(&set, &config),
    }
}

fn run_info(raw: &str, json: bool, config: &AnalysisConfig) -> pcset_core::Result<()> {
    let set = parse_set(raw, config)?;
    tracing::info!(%set, base = set.base(), "analysing set");

    let report = SetReport::build(&set, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn run_set_class(raw: &str, config: &AnalysisConfig) -> pcset_core::Result<()> {
    let set = parse_set(raw, config)?;
    let class = set.set_class();
    tracing::info!(%set, members = class.len(), "enumerating set class");

    for member in class {
        println!("{member}");
    }
    Ok(())
}

fn load_config(path: Option<&Path>, base: Option<u32>) -> pcset_core::Result<AnalysisConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!(?path, "loading config");
            AnalysisConfig::from_json_str(&std::fs::read_to_string(path)?)?
        }
        None => AnalysisConfig::default(),
    };

    Ok(match base {
        Some(base) => config.with_base(base),
        None => config,
    })
}

/// A JSON array such as `[0, 4, 7]` goes through the integer constructor;
/// anything else is decoded as a compact base-36 string like `047`.
fn parse_set(raw: &str, config: &AnalysisConfig) -> pcset_core::Result<PitchClassSet> {
    if raw.trim_start().starts_with('[') {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        PitchClassSet::from_json(&value, config.base)
    } else {
        config.decode(raw)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Pitch-class set analysis", long_about = None)]
struct Cli {
    /// JSON file with analysis defaults (base, multiplier, axis, middle_c).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Modulus to use, overriding the config file.
    #[arg(short, long, global = true)]
    base: Option<u32>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print normal and prime forms, vectors and scale properties of a set.
    Info {
        /// Set as a JSON array (`[0,4,7]`) or compact digits (`047`, `9ab`).
        set: String,
        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the normal form of every transposition and inversion of a set.
    SetClass {
        /// Set as a JSON array (`[0,4,7]`) or compact digits (`047`, `9ab`).
        set: String,
    },
}
