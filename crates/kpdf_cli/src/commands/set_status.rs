use anyhow::Result;
use clap::Args;
use kpdf_service::CatalogService;

#[derive(Debug, Args)]
pub struct SetStatusArgs {
    /// Request id
    #[arg(long)]
    pub id: String,

    /// working, uploaded or rejected
    #[arg(long)]
    pub status: String,
}

pub async fn execute(service: &CatalogService, args: SetStatusArgs) -> Result<()> {
    let req = service.update_request_status(&args.id, &args.status).await?;
    println!("✅ Request {} is now {}", req.id, req.status);
    Ok(())
}
