//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::adapters::{CsvTableStore, load_meta_config};
use crate::app::AppContext;
use crate::app::commands::{
    RecordKind, check,
    fmt::{self, FmtOptions},
    generate::{self, DEFAULT_TYPES_PATH, GenerateOptions},
    inspect::{self, InspectOptions},
};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sensor-meta")]
#[command(version)]
#[command(about = "Read, check and format sensor network metadata tables", long_about = None)]
struct Cli {
    /// Snapshot root that table paths are relative to
    #[arg(short = 'C', long, global = true, default_value = ".")]
    root: PathBuf,
    /// Configuration file (defaults to meta.toml in the snapshot root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort and rewrite a table in canonical form
    #[clap(visible_alias = "f")]
    Fmt {
        /// Record kind stored in the table
        kind: RecordKind,
        /// Table path relative to the snapshot root
        path: PathBuf,
        /// Fail instead of rewriting when the table is not canonical
        #[arg(long)]
        check: bool,
    },
    /// Print the records of a table as JSON
    #[clap(visible_alias = "i")]
    Inspect {
        kind: RecordKind,
        /// Table path relative to the snapshot root (defaults to the configured file)
        path: Option<PathBuf>,
        /// Split multi-component gains into one entry per component
        #[arg(long)]
        expand: bool,
    },
    /// Load every configured table and report overlapping gains
    Check,
    /// Generate record-set glue code from a schema
    #[clap(visible_alias = "g")]
    Generate {
        /// Schema file (defaults to the built-in schema)
        #[arg(long)]
        schema: Option<PathBuf>,
        /// Output file (defaults to standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Module path the generated code imports record types from
        #[arg(long, default_value = DEFAULT_TYPES_PATH)]
        types_path: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Fmt { kind, path, check } => {
            run_fmt(&cli.root, cli.config, FmtOptions { kind, path, check })
        }
        Commands::Inspect { kind, path, expand } => {
            run_inspect(&cli.root, cli.config, InspectOptions { kind, path, expand })
        }
        Commands::Check => run_check(&cli.root, cli.config),
        Commands::Generate { schema, output, types_path } => {
            generate::execute(&GenerateOptions { schema, output, types_path }).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn context(root: &Path, config: Option<PathBuf>) -> Result<AppContext<CsvTableStore>, AppError> {
    let config = load_meta_config(root, config.as_deref())?;
    Ok(AppContext::new(CsvTableStore::new(), config, root.to_path_buf()))
}

fn run_fmt(root: &Path, config: Option<PathBuf>, options: FmtOptions) -> Result<i32, AppError> {
    let ctx = context(root, config)?;
    let outcome = fmt::execute(&ctx, &options)?;
    if outcome.changed {
        println!(
            "✅ Formatted {} {} in {}",
            outcome.records,
            options.kind.name(),
            options.path.display()
        );
    } else {
        println!("✅ {} is already canonical", options.path.display());
    }
    Ok(0)
}

fn run_inspect(
    root: &Path,
    config: Option<PathBuf>,
    options: InspectOptions,
) -> Result<i32, AppError> {
    let ctx = context(root, config)?;
    println!("{}", inspect::execute(&ctx, &options)?);
    Ok(0)
}

fn run_check(root: &Path, config: Option<PathBuf>) -> Result<i32, AppError> {
    let ctx = context(root, config)?;
    let report = check::execute(&ctx)?;

    if report.is_clean() {
        println!("✅ {} gains and {} streams, no overlapping gains", report.gains, report.streams);
        return Ok(0);
    }

    println!("⚠️  Overlapping gains:");
    for overlap in &report.overlaps {
        println!(
            "  {} sublocation '{}': {} .. {} overlaps {} .. {}",
            overlap.first.id(),
            overlap.first.sublocation,
            overlap.first.span.start,
            overlap.first.span.end,
            overlap.second.span.start,
            overlap.second.span.end
        );
    }
    Ok(1)
}
