use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "autofocus-cli", version, about = "Auto-Focus CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether a domain would be blocked right now
    Decide {
        /// Domain to check (e.g. "youtube.com")
        domain: String,
        /// Record the block (stats + challenge progress) if it would block
        #[arg(long)]
        record: bool,
    },
    /// Blocklist and whitelist management
    Sites {
        #[command(subcommand)]
        action: commands::sites::SitesAction,
    },
    /// Blocking schedule management
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Usage statistics and productivity scores
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Record focus sessions
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// XP, levels, badges, and challenges
    Gamify {
        #[command(subcommand)]
        action: commands::gamify::GamifyAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Decide { domain, record } => commands::decide::run(&domain, record),
        Commands::Sites { action } => commands::sites::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Gamify { action } => commands::gamify::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
