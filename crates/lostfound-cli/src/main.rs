use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use lostfound_cli::{OutputFormat, commands};
use lostfound_core::config::DEFAULT_DATA_FILE;
use lostfound_core::ledger::ReportRequest;
use lostfound_core::{LedgerConfig, ReporterIdentity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lostfound")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Report, search and claim found items in a lost-and-found ledger",
    long_about = "lostfound keeps a ledger of found items in a local JSON file. Report what you \
                  found to earn points, search the ledger, list unclaimed items and mark items \
                  as claimed when their owner turns up."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,

    /// Path to the ledger file
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "LOSTFOUND_DATA_FILE",
        default_value = DEFAULT_DATA_FILE
    )]
    data_file: PathBuf,

    /// Treat reporter names that differ only in case or surrounding spaces as the same person
    #[arg(long, global = true, env = "LOSTFOUND_NORMALIZE_REPORTERS")]
    normalize_reporters: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Report a found item and earn points
    Report {
        /// Item name (e.g. "iPhone 12")
        #[arg(long)]
        name: String,

        /// Category (e.g. Electronics, Clothing, Books, Other)
        #[arg(long)]
        category: String,

        /// Where the item was found
        #[arg(long)]
        location: String,

        /// Your name
        #[arg(long)]
        reporter: String,
    },

    /// Search items by name, category or location
    Search {
        /// Field to search (name, category, location)
        #[arg(short, long, default_value = "name")]
        by: String,

        /// Text to look for (case-insensitive)
        #[arg(value_name = "TERM")]
        term: String,
    },

    /// List unclaimed items, flagging those old enough for auction
    Unclaimed,

    /// Mark an item as claimed by its owner
    Claim {
        /// Item ID
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Show reporter points
    Points {
        /// Show only this reporter's total
        #[arg(value_name = "REPORTER")]
        reporter: Option<String>,
    },

    /// Summarize the ledger
    Summary,

    /// Generate shell completion scripts
    #[command(after_help = "SUPPORTED SHELLS:\n  bash, zsh, fish, powershell, elvish\n\n\
                            INSTALLATION:\n  \
                            bash: lostfound completion --shell bash >> ~/.bashrc\n  \
                            zsh:  lostfound completion --shell zsh > \"${fpath[1]}/_lostfound\"\n  \
                            fish: lostfound completion --shell fish > ~/.config/fish/completions/lostfound.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let identity = if cli.normalize_reporters {
        ReporterIdentity::Normalized
    } else {
        ReporterIdentity::Exact
    };
    let config = LedgerConfig::new()
        .with_data_file(&cli.data_file)
        .with_reporter_identity(identity);

    // Execute the command
    match cli.command {
        Commands::Report {
            name,
            category,
            location,
            reporter,
        } => commands::report::execute(
            &config,
            ReportRequest::new(name, category, location, reporter),
            cli.format,
        ),
        Commands::Search { by, term } => commands::search::execute(&config, &by, &term, cli.format),
        Commands::Unclaimed => commands::unclaimed::execute(&config, cli.format),
        Commands::Claim { id } => commands::claim::execute(&config, &id, cli.format),
        Commands::Points { reporter } => {
            commands::points::execute(&config, reporter.as_deref(), cli.format)
        }
        Commands::Summary => commands::summary::execute(&config, cli.format),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("lostfound=debug,lostfound_cli=debug,lostfound_core=debug")
    } else {
        EnvFilter::new("lostfound=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
