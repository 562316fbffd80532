// ===== raidforge/src/main.rs =====
use clap::{Parser, Subcommand};
use raidforge::loader;
use raidforge::registry::GameRegistry;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod display;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/roster.json")]
    roster: String,

    /// Game data (classes/specs/buffs) JSON; embedded defaults otherwise.
    #[arg(global = true, long)]
    registry: Option<String>,

    #[arg(global = true, short, long)]
    locks: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Split(cmd::split::SplitArgs),
    Inspect(cmd::inspect::InspectArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("🚀 Initializing raidforge...");

    let registry = match &cli.registry {
        Some(path) => {
            info!("📂 Loading registry: {}", path);
            GameRegistry::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            })
        }
        None => GameRegistry::new_with_defaults(),
    };

    info!("📂 Loading roster: {}", cli.roster);
    let records = loader::load_roster(&cli.roster, &registry).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let locks = match &cli.locks {
        Some(path) if Path::new(path).exists() => loader::load_locks(path).unwrap_or_else(|e| {
            error!("❌ {}", e);
            process::exit(1);
        }),
        Some(path) => {
            warn!("⚠️ Locks file '{}' not found, ignoring", path);
            Vec::new()
        }
        None => Vec::new(),
    };

    match cli.command {
        Commands::Split(args) => cmd::split::run(args, &records, &locks, &registry),
        Commands::Inspect(args) => cmd::inspect::run(args, &records),
    }
}
