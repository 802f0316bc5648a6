use std::path::Path;

use anyhow::{Context, Result};
use kpdf_service::CatalogService;

pub async fn execute(service: &CatalogService, data_dir: &Path) -> Result<()> {
    println!("🚀 Initializing catalog storage...");
    println!("   Data dir: {}", data_dir.display());

    service
        .ensure_storage()
        .await
        .with_context(|| format!("cannot seed {}", data_dir.display()))?;

    let docs = service.documents_report().await?;
    let requests = service.list_requests().await?;

    println!("✅ Storage ready.");
    println!("   Documents: {} ({})", docs.count, docs.info.location);
    println!("   Requests:  {}", requests.len());
    Ok(())
}
