mod report;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use serbench_codecs::{compressor_by_name, protobuf_codec, JsonCodec, JsonLayout};
use serbench_core::PacketSchema;
use serbench_core::{checked_count, Bench, RunReport, Shape, DEFAULT_MAX_RECORDS};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "serbench",
    about = "Compare text vs. binary serialization sizes before and after compression",
    version
)]
struct Cli {
    /// Log debug events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure every shape x record count pair
    Run {
        /// Record shapes, shapes-major in the output
        #[arg(long, value_delimiter = ',', default_value = "Simple,Complex,Large")]
        shapes: Vec<String>,
        /// Record counts per shape
        #[arg(long, value_delimiter = ',', default_value = "1,10,100,1000", allow_negative_numbers = true)]
        counts: Vec<i64>,
        /// Spread measurements over worker threads (output order is unchanged)
        #[arg(long)]
        parallel: bool,
        #[command(flatten)]
        pipeline: PipelineArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Measure a single shape and record count
    Measure {
        #[arg(short, long)]
        shape: String,
        #[arg(short, long, allow_negative_numbers = true)]
        count: i64,
        #[command(flatten)]
        pipeline: PipelineArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the protobuf schema used by the binary codec
    Schema,
}

#[derive(Args)]
struct PipelineArgs {
    /// Compressor: lz4 | lz4-block | zstd | gzip | none
    #[arg(short = 'z', long, default_value = "lz4")]
    compressor: String,
    /// Compression level (zstd and gzip only)
    #[arg(long)]
    level: Option<i32>,
    /// JSON whitespace layout
    #[arg(long, value_enum, default_value_t = LayoutArg::Spaced)]
    layout: LayoutArg,
    /// Upper bound on records per measurement
    #[arg(long, default_value_t = DEFAULT_MAX_RECORDS)]
    max_records: u32,
}

#[derive(Args)]
struct OutputArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Spaced,
    Compact,
}

impl From<LayoutArg> for JsonLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Spaced => JsonLayout::Spaced,
            LayoutArg::Compact => JsonLayout::Compact,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn build_bench(args: &PipelineArgs) -> anyhow::Result<Bench> {
    let compressor = compressor_by_name(&args.compressor, args.level)?;
    Ok(Bench::new(
        Box::new(JsonCodec::new(args.layout.into())),
        Box::new(protobuf_codec()),
        compressor,
    )
    .with_max_records(args.max_records))
}

fn parse_shapes(labels: &[String]) -> anyhow::Result<Vec<Shape>> {
    labels
        .iter()
        .map(|s| s.parse::<Shape>().map_err(anyhow::Error::from))
        .collect()
}

fn parse_counts(counts: &[i64], max_records: u32) -> anyhow::Result<Vec<u32>> {
    counts
        .iter()
        .map(|&c| checked_count(c, max_records).map_err(anyhow::Error::from))
        .collect()
}

fn emit(report: &RunReport, output: &OutputArgs) -> anyhow::Result<()> {
    let rendered = match output.format {
        Format::Table => report::render_table(report),
        Format::Csv => report::render_csv(report),
        Format::Json => report::render_json(report).context("serializing report")?,
    };
    match &output.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing report to {:?}", path))?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_matrix(
    shapes: &[String],
    counts: &[i64],
    parallel: bool,
    pipeline: &PipelineArgs,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let shapes = parse_shapes(shapes)?;
    let counts = parse_counts(counts, pipeline.max_records)?;
    let bench = build_bench(pipeline)?;

    let t0 = Instant::now();
    let report = if parallel {
        bench.run_parallel(&shapes, &counts)
    } else {
        bench.run(&shapes, &counts)
    }
    .context("benchmark run failed")?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "done");

    emit(&report, output)
}

fn run_measure(
    shape: &str,
    count: i64,
    pipeline: &PipelineArgs,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let shape: Shape = shape.parse()?;
    let count = checked_count(count, pipeline.max_records)?;
    let bench = build_bench(pipeline)?;
    let report = bench
        .run(&[shape], &[count])
        .with_context(|| format!("measuring {shape} x {count}"))?;
    emit(&report, output)
}

// ── Entry point ────────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Run {
            shapes,
            counts,
            parallel,
            pipeline,
            output,
        } => run_matrix(shapes, counts, *parallel, pipeline, output),
        Commands::Measure {
            shape,
            count,
            pipeline,
            output,
        } => run_measure(shape, *count, pipeline, output),
        Commands::Schema => {
            print!("{}", protobuf_codec().schema().declaration());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
