use anyhow::Result;
use clap::Args;
use kpdf_core::filter::DocumentFilter;
use kpdf_service::CatalogService;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub l1: Option<String>,
    #[arg(long)]
    pub l2: Option<String>,
    #[arg(long)]
    pub l3: Option<String>,
    #[arg(long)]
    pub l4: Option<String>,

    /// Case-insensitive text searched in titles and subtitles
    #[arg(long)]
    pub q: Option<String>,
}

impl From<ListArgs> for DocumentFilter {
    fn from(args: ListArgs) -> Self {
        DocumentFilter {
            l1: args.l1,
            l2: args.l2,
            l3: args.l3,
            l4: args.l4,
            q: args.q,
        }
    }
}

pub async fn execute(service: &CatalogService, args: ListArgs) -> Result<()> {
    let docs = service.list_documents(&args.into()).await?;

    println!("📚 {} document(s)", docs.len());
    for doc in docs {
        println!(
            "{}  [{} / {} / {} / {}]  {}",
            doc.id, doc.category_l1, doc.category_l2, doc.category_l3, doc.category_l4, doc.main_title
        );
        if !doc.subtitle.is_empty() {
            println!("   {}", doc.subtitle);
        }
        println!("   {}", doc.pdf_url);
    }
    Ok(())
}
