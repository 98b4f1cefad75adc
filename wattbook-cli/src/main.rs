use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod context;

use context::CliContext;

#[derive(Parser)]
#[command(name = "wattbook", about = "Energy assessment record store")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database path (defaults to the wattbook data dir)
    #[arg(long, global = true)]
    db: Option<std::path::PathBuf>,

    /// Identity recorded as the owner of mutating operations
    #[arg(
        long,
        global = true,
        env = "WATTBOOK_AUDITOR",
        default_value = "anonymous"
    )]
    auditor: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new assessment
    Create(commands::create::CreateArgs),
    /// Show one assessment
    Show(commands::show::ShowArgs),
    /// List all assessments
    List(commands::list::ListArgs),
    /// Update fields on an assessment
    Update(commands::update::UpdateArgs),
    /// Delete an assessment
    Delete(commands::delete::DeleteArgs),
    /// Manage usage readings
    Usage(commands::usage::UsageArgs),
    /// List assessments at or above an efficiency threshold
    Top(commands::top::TopArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ctx = CliContext::open(cli.db, cli.auditor)?;

    match cli.command {
        Commands::Create(args) => commands::create::run(&ctx, args),
        Commands::Show(args) => commands::show::run(&ctx, args),
        Commands::List(args) => commands::list::run(&ctx, args),
        Commands::Update(args) => commands::update::run(&ctx, args),
        Commands::Delete(args) => commands::delete::run(&ctx, args),
        Commands::Usage(args) => commands::usage::run(&ctx, args),
        Commands::Top(args) => commands::top::run(&ctx, args),
    }
}
