use anyhow::Result;
use clap::{Parser, Subcommand};
use summarize::{run, RunOptions};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

#[derive(Parser)]
#[command(name = "summarize")]
#[command(about = "Extractive tf-idf summaries over a growing article corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize articles from JSON/JSONL/TXT files or a directory
    Run {
        /// Input path (file or directory)
        #[arg(long)]
        input: String,
        /// Percentage of sentences to keep
        #[arg(long, default_value_t = 20.0)]
        percentage: f64,
        /// Output JSONL path, stdout when omitted
        #[arg(long)]
        output: Option<String>,
        /// Stem word tokens before counting
        #[arg(long, default_value_t = false)]
        stem: bool,
        /// Use IDF = ln(N/df) instead of the smoothed ln(1 + N/df)
        #[arg(long, default_value_t = false)]
        raw_idf: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, percentage, output, stem, raw_idf } => {
            let opts = RunOptions { percentage, stem, smoothed_idf: !raw_idf };
            match output {
                Some(path) => run(Path::new(&input), &opts, BufWriter::new(File::create(path)?))?,
                None => run(Path::new(&input), &opts, io::stdout().lock())?,
            };
            Ok(())
        }
    }
}
