use anyhow::Result;
use clap::{Parser, Subcommand};
use hallo_cli::commands::log::{execute_log, LogOverrides};
use hallo_cli::commands::{init::execute_init, ready::execute_ready};
use hallo_cli::config::{Config, DEFAULT_CONFIG};
use hallo_logger::LogLevel;

#[derive(Parser)]
#[command(name = "hallo", version)]
#[command(about = "Leveled console logging and startup banners", long_about = None)]
struct Cli {
    /// Path to the config file (default: ./hallo.toml when present)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Diagnostics filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a log record
    Log {
        /// ready, info, warn or error
        level: LogLevel,
        /// Message text
        #[arg(required = true)]
        message: Vec<String>,
        /// Parse the message as JSON and dump it below the header
        #[arg(long)]
        json: bool,
        #[arg(long)]
        prefix: Option<String>,
        #[arg(long)]
        with_date: bool,
        #[arg(long)]
        no_color: bool,
    },
    /// Print the application ready banner
    Ready {
        /// Manifest with name and version (package.json or Cargo.toml)
        #[arg(long)]
        manifest: Option<String>,
        /// Banner option as key=value, repeatable
        #[arg(short = 'o', long = "option")]
        options: Vec<String>,
        #[arg(long)]
        no_color: bool,
    },
    /// Create a default config file
    Init {
        #[arg(long, default_value = DEFAULT_CONFIG)]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let start = chrono::Local::now();
    let cli = Cli::parse();

    let no_color = match &cli.command {
        Commands::Log { no_color, .. } | Commands::Ready { no_color, .. } => *no_color,
        Commands::Init { .. } => false,
    };
    hallo_logger::init_from_args(cli.log_level, cli.verbose, no_color)?;

    match cli.command {
        Commands::Log {
            level,
            message,
            json,
            prefix,
            with_date,
            no_color,
        } => {
            let config = Config::load_or_default(cli.config.as_deref())?;
            let overrides = LogOverrides {
                prefix,
                with_date,
                no_color,
            };
            execute_log(&config, level, &message, json, &overrides)
        }
        Commands::Ready {
            manifest,
            options,
            no_color,
        } => {
            let config = Config::load_or_default(cli.config.as_deref())?;
            execute_ready(&config, start, manifest, &options, no_color).await
        }
        Commands::Init { path } => execute_init(&path),
    }
}
