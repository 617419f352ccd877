use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rnaseq_samplesheet::sample_sheet::fastq_name::DEFAULT_SUFFIX;
use rnaseq_samplesheet::{BuildOptions, SampleSheet, SemanticNames};

/// Convert the paired read files in a directory to a samplesheet for the
/// nf-core/rnaseq pipeline.
/// Files are paired on the first three '_' separated parts of their names.
#[derive(Parser)]
#[clap(version = "1.0.0")]
struct Opts {
    /// Directory containing the RNA-seq read files
    data_dir: PathBuf,

    /// Where to write samplesheet.csv (must exist)
    out_dir: PathBuf,

    /// JSON object mapping the sample id (the part before the first '_')
    /// to the name used in the `sample` column
    #[clap(short = 'n', long)]
    semantic_names: Option<PathBuf>,

    /// Skip files that are missing their pair instead of failing
    #[clap(long)]
    skip_missing: bool,

    /// Read file suffix: everything after the first '.' of the filename
    #[clap(short, long, default_value = DEFAULT_SUFFIX)]
    suffix: String,

    /// Debug output
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts: Opts = Opts::parse();

    let filter = if opts.verbose {
        EnvFilter::new("rnaseq_samplesheet=debug,info")
    } else {
        EnvFilter::new("rnaseq_samplesheet=info,warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    println!("Reading in data...");
    let semantic_names = match &opts.semantic_names {
        Some(path) => Some(SemanticNames::from_path(path)?),
        None => None,
    };
    let build_opts = BuildOptions {
        suffix: opts.suffix.clone(),
        skip_missing: opts.skip_missing,
        semantic_names,
    };

    println!("Pairing filenames in {}...", opts.data_dir.display());
    let (sheet, report) = SampleSheet::from_dir(&opts.data_dir, &build_opts)?;

    println!("Snapshot of samplesheet:\n{}", sheet.snapshot(5));

    let out_path = sheet.write_csv(&opts.out_dir)?;

    println!(
        "{} pairs from {}/{} read files ({} skipped) - data written to '{}'",
        sheet.len(),
        report.candidates - report.skipped.len(),
        report.candidates,
        report.skipped.len(),
        out_path.display()
    );
    Ok(())
}
