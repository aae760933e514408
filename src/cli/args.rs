use crate::constants::verbosity;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for jollof.
#[derive(Parser, Debug)]
#[command(name = "jollof", version, about = "CLI to scaffold Django + React projects", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new boilerplate project.
    Cook(CookArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CookArgs {
    /// Name of the project; prompted for when omitted.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Frontend framework choice (1 = Bootstrap, 2 = Material Design).
    #[arg(long, value_name = "CHOICE")]
    pub frontend: Option<String>,

    /// Social login provider choice (1 = Google, 2 = no social login).
    #[arg(long = "social-login", value_name = "CHOICE")]
    pub social_login: Option<String>,

    /// Directory containing the scaffold templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
