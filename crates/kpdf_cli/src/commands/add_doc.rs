use anyhow::{bail, Result};
use clap::Args;
use kpdf_core::models::document::DocumentPayload;
use kpdf_service::{CatalogService, Error};

#[derive(Debug, Args)]
pub struct AddDocArgs {
    /// Curriculum (e.g. "고등 교육과정")
    #[arg(long)]
    pub l1: String,

    /// Subject (e.g. "수학")
    #[arg(long)]
    pub l2: String,

    /// Grade, must match the curriculum (e.g. "고2")
    #[arg(long)]
    pub l3: String,

    /// Material type (e.g. "문제집")
    #[arg(long)]
    pub l4: String,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub subtitle: Option<String>,

    #[arg(long)]
    pub publisher: Option<String>,

    /// Link to the .pdf or .hwp file
    #[arg(long)]
    pub url: String,
}

impl From<AddDocArgs> for DocumentPayload {
    fn from(args: AddDocArgs) -> Self {
        DocumentPayload {
            category_l1: Some(args.l1),
            category_l2: Some(args.l2),
            category_l3: Some(args.l3),
            category_l4: Some(args.l4),
            publisher: args.publisher,
            main_title: Some(args.title),
            subtitle: args.subtitle,
            pdf_url: Some(args.url),
        }
    }
}

pub async fn execute(service: &CatalogService, args: AddDocArgs) -> Result<()> {
    println!("📎 Adding document via Service Layer...");

    match service.create_document(args.into()).await {
        Ok(doc) => {
            println!("✅ Document added. ID: {}", doc.id);
            Ok(())
        }
        Err(Error::Validation(errors)) => {
            for message in &errors {
                eprintln!("🛑 {}", message);
            }
            bail!("document rejected ({} errors)", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}
