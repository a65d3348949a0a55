use anyhow::Context;
use clap::Parser;
use emotescope::config::{self, AnalysisOpts};
use emotescope::diagnostics::TracingSink;
use emotescope::pipeline::Pipeline;
use emotescope::report::format_seconds;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emotescope", version, about = "Find the densest emote moments in a chat export")]
struct Cli {
    /// Chat export (JSON with a `comments` array)
    #[arg(default_value = config::DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Regex to count. May be repeated; defaults to LUL, KEKW and OMEGALUL.
    #[arg(long = "pattern", short = 'p')]
    patterns: Vec<String>,

    /// Number of densest buckets to print
    #[arg(long = "top", default_value_t = config::DEFAULT_TOP)]
    top: usize,

    /// Bucket width in seconds
    #[arg(long = "bucket-seconds", default_value_t = config::DEFAULT_BUCKET_SECONDS)]
    bucket_seconds: u32,

    /// Debug logging on stderr
    #[arg(long = "verbose", short = 'v', default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "emotescope=debug" } else { "emotescope=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let patterns = if cli.patterns.is_empty() { config::default_patterns() } else { cli.patterns };
    let opts = AnalysisOpts { bucket_seconds: cli.bucket_seconds, top: cli.top };
    let pipeline = Pipeline::new(&patterns, opts).context("invalid analysis settings")?;

    let mut sink = TracingSink;
    let Some(report) = pipeline
        .run_file(&cli.input, &mut sink)
        .with_context(|| format!("cannot analyze {}", cli.input.display()))?
    else {
        println!("Failed to load JSON data.");
        return Ok(());
    };

    let s = &report.stats;
    tracing::info!(
        comments = s.comments,
        messages = s.messages,
        counted = s.counted,
        skipped = s.skipped_timestamps,
        matches = s.total_matches,
        buckets = report.total_intervals,
        "analysis complete"
    );
    if let Some((first, last)) = report.window {
        tracing::info!(start = %first.to_rfc3339(), end = %last.to_rfc3339(), "observed window");
    } else {
        tracing::warn!("no message had a usable timestamp");
    }
    tracing::debug!(final_offset = %format_seconds(report.final_offset_seconds()), "last bucket");

    print!("{report}");
    Ok(())
}
