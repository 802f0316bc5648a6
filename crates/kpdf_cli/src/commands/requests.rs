use anyhow::Result;
use kpdf_service::CatalogService;

pub async fn execute(service: &CatalogService) -> Result<()> {
    let requests = service.list_requests().await?;

    println!("📬 {} request(s)", requests.len());
    for req in requests {
        println!("{}  [{}]  {}", req.id, req.status, req.requested_title);
        println!("   from {} at {}", req.ip_address, req.created_at.to_rfc3339());
        if !req.comments.is_empty() {
            println!("   {}", req.comments);
        }
    }
    Ok(())
}
