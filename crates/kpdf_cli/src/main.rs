// kpdf_cli/src/main.rs
use clap::{Parser, Subcommand};

use kpdf_cli::commands;
use kpdf_service::config::Config;
use kpdf_service::CatalogService;

#[derive(Parser)]
#[command(name = "kpdf")]
#[command(about = "Operator toolbox for the K-PDF catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and seed empty collections
    Init,

    /// Check a document payload (JSON file) against the catalog rules
    Validate(commands::validate::ValidateArgs),

    /// Add a document to the catalog
    AddDoc(commands::add_doc::AddDocArgs),

    /// List catalog documents, optionally filtered
    List(commands::list::ListArgs),

    /// Show every visitor request, newest first
    Requests,

    /// Move a request to working, uploaded or rejected
    SetStatus(commands::set_status::SetStatusArgs),

    /// Delete a document from the catalog
    RemoveDoc(commands::remove_doc::RemoveDocArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Parse arguments
    let cli = Cli::parse();

    // 2. Open the catalog (KPDF_DATA_DIR, no credentials needed)
    let data_dir = Config::data_dir_from_env();
    let service = CatalogService::open(&data_dir);
    if !matches!(cli.command, Commands::Validate(_)) {
        service.ensure_storage().await?;
    }

    // 3. Route to the correct command
    match cli.command {
        Commands::Init => commands::init::execute(&service, &data_dir).await?,
        Commands::Validate(args) => {
            // Note: Validate doesn't touch the store, keeping it pure logic.
            commands::validate::execute(args)?;
        }
        Commands::AddDoc(args) => commands::add_doc::execute(&service, args).await?,
        Commands::List(args) => commands::list::execute(&service, args).await?,
        Commands::Requests => commands::requests::execute(&service).await?,
        Commands::SetStatus(args) => commands::set_status::execute(&service, args).await?,
        Commands::RemoveDoc(args) => commands::remove_doc::execute(&service, args).await?,
    }

    Ok(())
}
