//! gprop CLI - Command-line interface for gprop
//!
//! Reads an undirected graph in list or matrix notation and reports its
//! structural properties. Errors exit with their numeric error code.

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use gprop_core::InputFormat;
use gprop_graph::ForestPolicy;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod report;

use commands::ExportFormat;
use config::Config;
use error::Result;

#[derive(Parser)]
#[command(name = "gprop")]
#[command(author = "gprop Contributors")]
#[command(version)]
#[command(about = "Structural properties of small undirected graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to .gprop/config.json, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct InputArgs {
    /// Input file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Input notation
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Args)]
struct OutputArgs {
    /// Output as JSON instead of formatted text
    #[arg(long, overrides_with = "no_json")]
    json: bool,

    /// Output formatted text even if the config asks for JSON
    #[arg(long, overrides_with = "json")]
    no_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report node/edge counts, degrees, connectivity, cycles and tree/forest verdicts
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// What counts as a forest
        #[arg(long, value_enum)]
        forest: Option<ForestArg>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List every simple cycle
    Cycles {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Export the graph as JSON or Graphviz DOT
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Export format
        #[arg(long, value_enum, default_value = "json")]
        to: ExportArg,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a default config file
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Auto,
    List,
    Matrix,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => InputFormat::Auto,
            FormatArg::List => InputFormat::List,
            FormatArg::Matrix => InputFormat::Matrix,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ForestArg {
    /// Acyclic and disconnected; a tree is not a forest
    Disconnected,
    /// Any acyclic graph
    Acyclic,
}

impl From<ForestArg> for ForestPolicy {
    fn from(arg: ForestArg) -> Self {
        match arg {
            ForestArg::Disconnected => ForestPolicy::Disconnected,
            ForestArg::Acyclic => ForestPolicy::Acyclic,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportArg {
    Json,
    Dot,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Json => ExportFormat::Json,
            ExportArg::Dot => ExportFormat::Dot,
        }
    }
}

impl InputArgs {
    fn format(&self, config: &Config) -> InputFormat {
        self.format.map(Into::into).unwrap_or(config.format)
    }
}

impl OutputArgs {
    /// The last of `--json`/`--no-json` wins; without either, the config decides.
    fn json(&self, config: &Config) -> bool {
        match (self.json, self.no_json) {
            (true, _) => true,
            (_, true) => false,
            _ => config.json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::try_from_env("GPROP_LOG").unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Init { path }) = &cli.command {
        return commands::init(path);
    }
    let config = Config::load(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Analyze {
        input: InputArgs {
            input: None,
            format: None,
        },
        forest: None,
        output: OutputArgs {
            json: false,
            no_json: false,
        },
    });

    match command {
        Commands::Analyze {
            input,
            forest,
            output,
        } => commands::analyze(
            input.input.as_deref(),
            input.format(&config),
            forest.map(Into::into).unwrap_or(config.forest),
            output.json(&config),
        ),
        Commands::Cycles { input, output } => commands::cycles(
            input.input.as_deref(),
            input.format(&config),
            output.json(&config),
        ),
        Commands::Export { input, to, output } => commands::export(
            input.input.as_deref(),
            input.format(&config),
            to.into(),
            output.as_deref(),
        ),
        Commands::Init { path } => commands::init(&path),
    }
}
