use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hastemap_core::{AnalysisRequest, DEFAULT_MOCKS_PATTERN, FileAnalysis, OsFiles, analyze};
use log::{debug, info};
use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "hastemap")]
#[command(about = "Per-file analysis for a haste module map", long_about = None)]
struct Cli {
    /// Files to analyze (the caller owns crawling; paths are explicit)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Project root used to compute root-relative paths
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Skip dependency extraction
    #[arg(long)]
    skip_deps: bool,

    /// Compute a SHA-1 content fingerprint per file
    #[arg(long)]
    sha1: bool,

    /// Regex marking mock files, tested against the root-relative path
    #[arg(long, default_value = DEFAULT_MOCKS_PATTERN)]
    mocks: String,
}

#[derive(Serialize)]
struct OutputLine<'a> {
    file: String,
    #[serde(flatten)]
    analysis: &'a FileAnalysis,
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    let root = cli.root.canonicalize()?;
    let mock_pattern = Regex::new(&cli.mocks)?;
    debug!("root={:?}, mocks={:?}, skip_deps={}", root, cli.mocks, cli.skip_deps);

    let start = Instant::now();
    let num_threads = rayon::current_num_threads();
    info!("Analyzing {} files (using {} threads)", cli.files.len(), num_threads);

    let results: Vec<(&PathBuf, Result<FileAnalysis>)> = cli
        .files
        .par_iter()
        .map(|file| {
            let req = AnalysisRequest {
                file_path: file,
                root_dir: &root,
                compute_dependencies: !cli.skip_deps,
                compute_sha1: cli.sha1,
                mock_pattern: Some(&mock_pattern),
                resolver: None,
            };
            (file, analyze(&OsFiles, &req))
        })
        .collect();

    let mut failures = 0usize;
    for (file, res) in &results {
        match res {
            Ok(analysis) => {
                let line = OutputLine { file: file.display().to_string(), analysis };
                writeln!(stdout, "{}", serde_json::to_string(&line)?)?;
            }
            Err(err) => {
                failures += 1;
                eprintln!("{} {}: {err:#}", "error".red().bold(), file.display());
            }
        }
    }

    let elapsed_ms = start.elapsed().as_millis();
    writeln!(
        stdout,
        "\n{} Finished in {}ms on {} files (using {} threads).",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan(),
        results.len().to_string().cyan(),
        num_threads.to_string().cyan()
    )?;
    stdout.flush()?;

    if failures > 0 {
        // Non-zero exit to fail CI
        std::process::exit(1);
    }
    Ok(())
}
