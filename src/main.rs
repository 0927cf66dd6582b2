use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

use luhnsum::pipeline::{MorphologyConfig, Summarizer};
use luhnsum::reader::{InputReader, InputSource, ReaderConfig};
use luhnsum::report::{self, OutputFormat, ReportOptions, RunStats};

#[derive(Parser, Debug)]
#[command(name = "luhnsum")]
#[command(about = "Extractive summarizer ranking sentences by document-wide lemma frequency")]
#[command(version)]
struct Args {
    /// Text file to summarize (`-` or absent reads stdin)
    input: Option<PathBuf>,

    /// Fraction of statements to keep, between 0 and 1
    #[arg(long, short, default_value_t = 0.3)]
    rate: f64,

    /// TSV lemma dictionary for Latin-script words
    #[arg(long)]
    latin_dictionary: Option<PathBuf>,

    /// TSV lemma dictionary for Cyrillic-script words
    #[arg(long)]
    cyrillic_dictionary: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Number of frequency table rows to print (0 prints all)
    #[arg(long, default_value_t = 0)]
    top: usize,

    /// Omit the frequency table
    #[arg(long)]
    no_table: bool,

    /// Use memory-mapped I/O instead of async buffered reads
    #[arg(long)]
    use_mmap: bool,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Log level for the JSON log written to stderr
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: stdout carries the summary, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    if !(0.0..=1.0).contains(&args.rate) {
        anyhow::bail!("Rate must be between 0 and 1, got {}", args.rate);
    }

    let source = InputSource::from_arg(args.input.as_deref());
    if let InputSource::File(path) = &source {
        if !path.is_file() {
            anyhow::bail!("Input file does not exist: {}", path.display());
        }
    }

    let reader = InputReader::new(ReaderConfig {
        use_mmap: args.use_mmap,
        ..Default::default()
    });
    let (text, read_stats) = reader.read(&source).await?;

    let morphology = MorphologyConfig {
        latin_dictionary: args.latin_dictionary.clone(),
        cyrillic_dictionary: args.cyrillic_dictionary.clone(),
    };
    let rate = args.rate;
    let chars = read_stats.chars_read;

    // WHY: one complete pipeline run off the async runtime; the lookup lives only for this run
    let start = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || {
        let lookup = morphology.build_lookup()?;
        Summarizer::new(lookup)?.summarize(&text, rate)
    })
    .await
    .context("Summarization task panicked")?;
    let processing_time_ms = start.elapsed().as_millis() as u64;

    let summary = match outcome {
        Ok(summary) => summary,
        Err(e) => {
            error!("Summarization failed: {:#}", e);
            if let Some(path) = &args.stats_out {
                let stats = RunStats::failure(read_stats.source.clone(), chars, &e);
                report::write_run_stats(path, &stats).await?;
            }
            return Err(e);
        }
    };

    let options = ReportOptions {
        format: args.format,
        top: args.top,
        include_table: !args.no_table,
    };
    print!("{}", report::render(&summary, &options)?);
    if options.format == OutputFormat::Json {
        println!();
    }

    if let Some(path) = &args.stats_out {
        let stats = RunStats::success(
            read_stats.source.clone(),
            chars,
            &summary,
            read_stats.duration_ms,
            processing_time_ms,
        );
        report::write_run_stats(path, &stats).await?;
        info!("Wrote run stats to {}", path.display());
    }

    Ok(())
}
