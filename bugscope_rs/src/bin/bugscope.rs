//! bugscope - structured reports from AI code analysis.
//!
//! ```bash
//! bugscope analyze src/app.py --mode debug --out report.html
//! bugscope render payload.json --format text --collapse "Debug Steps"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use bugscope::app::{self, OutputTarget};
use bugscope::config::{CliOptions, Config, DEFAULT_CONFIG_FILE, load_config, resolve_settings};
use bugscope::output::OutputFormat;
use bugscope_report::types::Mode;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "bugscope")]
#[command(about = "Structured, styled reports from AI code analysis")]
#[command(version)]
struct Cli {
    /// Config file (.toml, .yaml or .json); defaults to ./bugscope.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a source file to the analysis service and render the answer
    Analyze(AnalyzeArgs),
    /// Render a previously saved service payload (offline)
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Source file to analyze
    file: PathBuf,

    /// Language sent to the service (detected from the extension otherwise)
    #[arg(long)]
    language: Option<String>,

    /// Analysis service base URL
    #[arg(long, env = "BUGSCOPE_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Saved JSON payload
    payload: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Report template: analysis or debug
    #[arg(long)]
    mode: Option<Mode>,

    /// Output format: html, text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Start this section collapsed (key or title, repeatable)
    #[arg(long, value_name = "KEY")]
    collapse: Vec<String>,
}

impl CliOptions for Cli {
    fn endpoint(&self) -> Option<String> {
        match &self.command {
            Command::Analyze(args) => args.endpoint.clone(),
            Command::Render(_) => None,
        }
    }

    fn timeout_ms(&self) -> Option<u64> {
        match &self.command {
            Command::Analyze(args) => args.timeout_ms,
            Command::Render(_) => None,
        }
    }

    fn mode(&self) -> Option<Mode> {
        self.output().mode
    }

    fn language(&self) -> Option<String> {
        match &self.command {
            Command::Analyze(args) => args.language.clone(),
            Command::Render(_) => None,
        }
    }

    fn format(&self) -> Option<OutputFormat> {
        self.output().format
    }

    fn log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

impl Cli {
    fn output(&self) -> &OutputArgs {
        match &self.command {
            Command::Analyze(args) => &args.output,
            Command::Render(args) => &args.output,
        }
    }
}

fn config_for(explicit: Option<&Path>) -> Result<Option<Config>> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            load_config(path)
        }
        None => load_config(Path::new(DEFAULT_CONFIG_FILE)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config_for(cli.config.as_deref())?;
    let settings = resolve_settings(&cli, config.as_ref())?;

    // Logs go to stderr so stdout stays clean for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("bugscope v{}", env!("CARGO_PKG_VERSION"));
    debug!(?settings, "resolved settings");

    let output = cli.output();
    let target = OutputTarget {
        format: settings.format,
        out: output.out.clone(),
        collapse: output.collapse.clone(),
    };

    match &cli.command {
        Command::Analyze(args) => app::analyze_file(&args.file, &settings, &target).await,
        Command::Render(args) => app::render_saved(&args.payload, settings.mode, &target),
    }
}
