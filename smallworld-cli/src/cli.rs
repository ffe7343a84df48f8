//! Command-line interface orchestration for the smallworld pipeline.
//!
//! The CLI offers a `run` command that loads a Parquet adjacency matrix,
//! executes the propensity pipeline, and renders the resulting record as
//! a human-readable table or a JSON object.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use smallworld_core::{PropensityRecord, Swp, SwpBuilder, SwpError};
use smallworld_providers_dense::{AdjacencyProvider, AdjacencyProviderError};
use thiserror::Error;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "smallworld",
    about = "Measure the small-world propensity of weighted networks."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Execute the propensity pipeline against one network.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Treat the network as binary when symmetrising directed input.
    #[arg(long)]
    pub binary: bool,

    /// Fix the random seed so reference construction is reproducible.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format for the propensity record.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Data source configuration.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Input data sources supported by the pipeline.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Load a Parquet file containing a `FixedSizeList<Float64, n>` column
    /// with `n` rows.
    Parquet(ParquetArgs),
}

/// Parquet ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct ParquetArgs {
    /// Path to the Parquet file containing the adjacency matrix.
    pub path: PathBuf,

    /// Column containing `FixedSizeList<Float64, n>` rows.
    #[arg(long)]
    pub column: String,

    /// Override name for the network (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Record rendering formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    Human,
    /// Single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Adjacency ingestion failed.
    #[error(transparent)]
    Dense(#[from] AdjacencyProviderError),
    /// Core pipeline failed.
    #[error(transparent)]
    Core(#[from] SwpError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported for the measured network.
    pub network: String,
    /// The propensity record produced by the pipeline.
    pub record: PropensityRecord,
    /// Requested rendering format.
    pub format: OutputFormat,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when ingestion or the pipeline fails.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => run_command(run),
    }
}

fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let mut builder = SwpBuilder::new();
    if let Some(seed) = command.seed {
        builder = builder.with_seed(seed);
    }
    let swp = builder.build()?;

    match command.source {
        RunSource::Parquet(args) => run_parquet(&swp, args, command.binary, command.format),
    }
}

fn run_parquet(
    swp: &Swp,
    args: ParquetArgs,
    binary: bool,
    format: OutputFormat,
) -> Result<ExecutionSummary, CliError> {
    let ParquetArgs { path, column, name } = args;
    let network = derive_network_name(&path, name.as_deref());
    let provider = AdjacencyProvider::try_from_parquet_path(network.clone(), &path, &column)?;
    let record = swp.run(provider.matrix(), binary)?;
    Ok(ExecutionSummary {
        network,
        record,
        format,
    })
}

fn derive_network_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "network".to_owned())
}

/// Renders `summary` to `writer` in the requested format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Human => render_human(summary, writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &summary.record).map_err(io::Error::from)?;
            writeln!(writer)
        }
    }
}

fn render_human(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    let record = &summary.record;
    writeln!(writer, "network: {}", summary.network)?;
    let fields = [
        ("clustering", record.clustering),
        ("path length", record.path_length),
        ("delta clustering", record.delta_clustering),
        ("delta path length", record.delta_path_length),
        ("propensity", record.propensity),
        ("alpha", record.alpha),
        ("delta", record.delta),
        ("regular clustering", record.regular_clustering),
        ("random clustering", record.random_clustering),
        ("regular path length", record.regular_path_length),
        ("random path length", record.random_path_length),
    ];
    for (label, value) in fields {
        writeln!(writer, "  {label:<20} {value:.6}")?;
    }
    Ok(())
}
