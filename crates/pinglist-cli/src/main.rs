//! PingList CLI - probe a list of URLs and report their status

use clap::{Parser, ValueEnum};
use pinglist::{
    collect_endpoints, format_with, read_endpoints, BatchProber, HttpTransport, ProbeOptions,
    ProbeRecord, RenderFormat, TerminalProgress,
};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Console output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum ConsoleFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Bullet list
    #[default]
    List,
    /// Markdown table
    Md,
    /// Tab-separated values with a header row
    Table,
    /// Print nothing but an empty line
    None,
}

impl From<ConsoleFormat> for RenderFormat {
    fn from(format: ConsoleFormat) -> Self {
        match format {
            ConsoleFormat::Csv => RenderFormat::Csv,
            ConsoleFormat::List => RenderFormat::List,
            ConsoleFormat::Md => RenderFormat::Markdown,
            ConsoleFormat::Table => RenderFormat::Table,
            ConsoleFormat::None => RenderFormat::None,
        }
    }
}

/// Output file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum FileFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// Bullet list
    List,
    /// Markdown table
    Md,
    /// Tab-separated values with a header row
    Table,
}

impl From<FileFormat> for RenderFormat {
    fn from(format: FileFormat) -> Self {
        match format {
            FileFormat::Csv => RenderFormat::Csv,
            FileFormat::List => RenderFormat::List,
            FileFormat::Md => RenderFormat::Markdown,
            FileFormat::Table => RenderFormat::Table,
        }
    }
}

/// PingList - ping a list of URLs and show the results
#[derive(Parser, Debug)]
#[command(name = "pinglist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URLs to ping
    urls: Vec<String>,

    /// File containing one URL per line, pinged after positional URLs
    #[arg(short, long = "input")]
    input: Option<PathBuf>,

    /// File in which to write the results
    #[arg(short, long = "output-file")]
    output_file: Option<PathBuf>,

    /// Console output format
    #[arg(short, long, value_enum, default_value = "list")]
    format: ConsoleFormat,

    /// Output file format, ignored without --output-file
    #[arg(long, value_enum, default_value = "csv")]
    output_format: FileFormat,

    /// Delay before each request, in milliseconds
    #[arg(short, long, default_value_t = 0)]
    delay: u64,

    /// Per-request timeout, in milliseconds
    #[arg(long, default_value_t = 5000)]
    timeout: u64,

    /// Do not display progress, only the final results
    #[arg(long)]
    silent: bool,

    /// Custom User-Agent
    #[arg(long)]
    user_agent: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn probe_options(&self) -> ProbeOptions {
        ProbeOptions::new()
            .timeout(Duration::from_millis(self.timeout))
            .delay(Duration::from_millis(self.delay))
            .silent(self.silent)
    }
}

/// Failure while writing rendered results
#[derive(Debug)]
enum OutputError {
    /// The console stream rejected the write
    Console(io::Error),
    /// The output file could not be written
    File(PathBuf, io::Error),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let records = match probe(&cli).await {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let result = write_results(&cli, &records, &mut stdout.lock());
    match result {
        Ok(()) => {}
        // Exit silently on broken pipe
        Err(OutputError::Console(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            std::process::exit(0);
        }
        Err(OutputError::Console(e)) => {
            eprintln!("Error writing to stdout: {}", e);
            std::process::exit(1);
        }
        Err(OutputError::File(path, e)) => {
            eprintln!("Error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

/// Install a stderr subscriber honoring `RUST_LOG`
fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,pinglist=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Gather endpoints and probe them all
async fn probe(cli: &Cli) -> Result<Vec<ProbeRecord>, String> {
    let from_file = match cli.input {
        Some(ref path) => read_input_file(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?,
        None => Vec::new(),
    };
    let endpoints = collect_endpoints(cli.urls.as_slice(), from_file);
    tracing::debug!(count = endpoints.len(), "Collected endpoints");

    let transport =
        HttpTransport::with_user_agent(cli.user_agent.as_deref()).map_err(|e| e.to_string())?;
    let prober = BatchProber::new(transport, cli.probe_options());

    let mut progress = TerminalProgress::stderr();
    Ok(prober.probe_all(&endpoints, &mut progress).await)
}

fn read_input_file(path: &Path) -> io::Result<Vec<pinglist::Endpoint>> {
    let file = File::open(path)?;
    read_endpoints(BufReader::new(file))
}

/// Render `records` into `path`, terminated by a newline
fn write_output_file(path: &Path, format: RenderFormat, records: &[ProbeRecord]) -> io::Result<()> {
    let mut rendered = format_with(format, records);
    rendered.push('\n');
    fs::write(path, rendered)
}

/// Write the console render, then the output file if one is configured
///
/// The file is written even when the console write fails. A file error
/// takes precedence over a console error.
fn write_results<W: Write>(
    cli: &Cli,
    records: &[ProbeRecord],
    console: &mut W,
) -> Result<(), OutputError> {
    let rendered = format_with(cli.format.into(), records);
    let console_result = writeln!(console, "{}", rendered).and_then(|_| console.flush());

    if let Some(ref path) = cli.output_file {
        write_output_file(path, cli.output_format.into(), records)
            .map_err(|e| OutputError::File(path.clone(), e))?;
    }

    console_result.map_err(OutputError::Console)
}
