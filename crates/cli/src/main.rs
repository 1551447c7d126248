mod cmd;
mod logging;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokenparser_core::config::{ConfigLoader, ResolvedConfig};

#[derive(Debug, Parser)]
#[command(
    name = "tokenparser",
    version,
    about = "Resolve date tokens and generate dynamic test strings"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the JSON response instead of the bare value
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a date token such as [TODAY+1DAY] or [END-FEBRUARY-2024]
    Date(DateArgs),

    /// Resolve a range token such as [START-JANUARY-2024<->END-JANUARY-2024]
    Range(TokenArgs),

    /// Generate text from a dynamic string token such as [ALPHA-NUMERIC-8]
    String(TokenArgs),

    /// Report which token grammar accepts a token
    Check(TokenArgs),

    /// Validate configuration and print resolved settings
    Doctor,
}

#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Bracketed token, quoted for the shell
    pub token: String,
}

#[derive(Debug, Args)]
pub struct DateArgs {
    /// Bracketed token, quoted for the shell
    pub token: String,

    /// Resolve TODAY/TOMORROW/YESTERDAY against this UTC date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let json = cli.json;

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, json),
        Commands::Date(args) => {
            init(config);
            cmd::date::run(&args, json);
        }
        Commands::Range(args) => {
            init(config);
            cmd::range::run(&args.token, json);
        }
        Commands::String(args) => {
            init(config);
            cmd::string::run(&args.token, json);
        }
        Commands::Check(args) => {
            init(config);
            cmd::check::run(&args.token, json);
        }
    }

    logging::flush();
}

/// Load configuration and install logging for a token command.
fn init(config: Option<&Path>) {
    let cfg = load_config(config);
    logging::init(&cfg);
}

/// Load configuration or exit with status 2.
///
/// Logging is not installed yet, so failures go straight to stderr.
fn load_config(config: Option<&Path>) -> ResolvedConfig {
    match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(2);
        }
    }
}
