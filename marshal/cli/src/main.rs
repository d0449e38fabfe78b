//! Marshal CLI - inspect, render and send registered operations

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use marshal::transport::DEFAULT_TIMEOUT_SECS;
use marshal_cli::CliError;
use marshal_cli::commands::{self, RenderFormat};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "marshal")]
#[command(version, about = "Render schema-driven API requests", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered operations
    List {
        /// Only show operations of this service
        #[arg(long)]
        service: Option<String>,
    },

    /// Show the fields and rendering policy of an operation
    Describe {
        /// Operation name, bare (`CreateGroup`) or qualified (`CognitoIdentityProvider.CreateGroup`)
        operation: String,

        /// Print the operation table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render an operation input into a wire request
    Render {
        /// Operation name
        operation: String,

        /// JSON input mapping file ("-" reads stdin) [default: empty mapping]
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Region to attach to the request, overriding "@region"
        #[arg(long)]
        region: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Http)]
        format: Format,
    },

    /// Render an operation and send it to an endpoint
    Send {
        /// Operation name
        operation: String,

        /// Base URL of the service endpoint
        #[arg(long)]
        endpoint: String,

        /// JSON input mapping file ("-" reads stdin) [default: empty mapping]
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Region to attach to the request, overriding "@region"
        #[arg(long)]
        region: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Http,
    Json,
}

impl From<Format> for RenderFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Http => RenderFormat::Http,
            Format::Json => RenderFormat::Json,
        }
    }
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::List { service } => commands::list(&mut stdout, service.as_deref()),
        Commands::Describe { operation, json } => commands::describe(&mut stdout, &operation, json),
        Commands::Render {
            operation,
            input,
            region,
            format,
        } => {
            let mapping = commands::read_input(input.as_deref())?;
            commands::render(
                &mut stdout,
                &operation,
                &mapping,
                region.as_deref(),
                format.into(),
            )
        }
        Commands::Send {
            operation,
            endpoint,
            input,
            region,
            timeout,
        } => {
            let mapping = commands::read_input(input.as_deref())?;
            commands::send(
                &mut stdout,
                &operation,
                &mapping,
                region.as_deref(),
                &endpoint,
                Duration::from_secs(timeout),
            )
            .await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
