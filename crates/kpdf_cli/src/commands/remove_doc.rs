use anyhow::Result;
use clap::Args;
use kpdf_service::CatalogService;

#[derive(Debug, Args)]
pub struct RemoveDocArgs {
    /// Document id
    #[arg(long)]
    pub id: String,
}

pub async fn execute(service: &CatalogService, args: RemoveDocArgs) -> Result<()> {
    let removed = service.delete_document(&args.id).await?;
    println!("🗑️  Removed {} ({})", removed.id, removed.main_title);
    Ok(())
}
