//! examtrack CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use examtrack_core::theme::Theme;

mod commands;
mod config;

use commands::configs::ConfigAction;
use commands::results::ResultAction;

#[derive(Parser)]
#[command(name = "examtrack", version, about = "Personal exam-score tracker")]
struct Cli {
    /// Directory for stored data (overrides config and EXAMTRACK_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and seed the data directory
    Init,

    /// Manage scoring configs
    Configs {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Record and manage exam results
    Results {
        #[command(subcommand)]
        action: ResultAction,
    },

    /// Show day summaries and the current streak
    Calendar {
        /// Show the results recorded on this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Replace all stored data with an exported JSON document
    Import {
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Export stored data as JSON
    Export {
        /// Export only the result list
        #[arg(long)]
        results_only: bool,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show or set the theme preference
    Theme {
        /// New theme: light or dark
        theme: Option<Theme>,
    },

    /// List suggested subject labels
    Subjects,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examtrack=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let open = || commands::Context::open(cli.data_dir.clone(), cli.config.as_deref());

    let result = match cli.command {
        Commands::Init => commands::init::execute(cli.data_dir.clone(), cli.config.as_deref()),
        Commands::Configs { action } => {
            open().and_then(|ctx| commands::configs::execute(ctx, action))
        }
        Commands::Results { action } => {
            open().and_then(|ctx| commands::results::execute(ctx, action))
        }
        Commands::Calendar { date, format } => {
            open().and_then(|ctx| commands::calendar::execute(ctx, date, format))
        }
        Commands::Import { file } => {
            open().and_then(|ctx| commands::transfer::import(ctx, file))
        }
        Commands::Export {
            results_only,
            output,
        } => open().and_then(|ctx| commands::transfer::export(ctx, results_only, output)),
        Commands::Theme { theme } => {
            open().and_then(|ctx| commands::theme::execute(ctx, theme))
        }
        Commands::Subjects => commands::results::list_subjects(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
