use anyhow::anyhow;
use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use logtally::logging::init_logging;
use logtally::{Analyzer, AnalyzerConfig};

#[derive(Parser)]
#[command(name = "logtally")]
#[command(about = "Tally Django request logs by handler and level")]
#[command(version)]
struct Args {
    /// Log files to analyze
    #[arg(value_name = "LOG_FILE", required = true)]
    log_files: Vec<PathBuf>,

    /// Report to generate (e.g. handlers)
    #[arg(short = 'r', long = "report", value_name = "NAME")]
    report: String,

    /// Worker threads (default: one per CPU)
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    jobs: Option<usize>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,

    /// Buffer size for reading log files
    #[arg(
        long,
        default_value = "65536", // 64KB
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    buffer_size: usize,

    /// Debug mode - per-file statistics on stderr
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    init_logging(args.debug);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = AnalyzerConfig {
        jobs: args.jobs,
        buffer_size: args.buffer_size,
    };

    let analyzer = Analyzer::new(config)?;
    let report = analyzer.run(&args.report, &args.log_files)?;

    // Only open the destination once the report exists, so failures leave
    // nothing behind
    let mut output: Box<dyn Write> = if let Some(output_path) = &args.output_file {
        let file = File::create(output_path).map_err(|e| {
            anyhow!(
                "Failed to create output file '{}': {}",
                output_path.display(),
                e
            )
        })?;
        Box::new(io::BufWriter::new(file))
    } else {
        Box::new(io::BufWriter::new(io::stdout()))
    };

    if let Err(e) = output.write_all(report.as_bytes()).and_then(|_| output.flush()) {
        // Downstream closed the pipe (e.g. `| head`), nothing left to report
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(e.into());
        }
    }

    Ok(())
}
