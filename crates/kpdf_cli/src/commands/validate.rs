use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use kpdf_core::get_standard_validator;
use kpdf_core::models::document::DocumentPayload;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to a JSON document payload (same shape as POST /api/pdfs)
    #[arg(short, long)]
    pub file: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    println!("🔍 Validating: {:?}", args.file);

    // 1. Load File
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    // 2. Parse (Structural Check)
    let payload: DocumentPayload = match serde_json::from_str(&raw) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("❌ FATAL: not a JSON object");
            eprintln!("Error: {}", e);
            return Ok(());
        }
    };

    println!("✅ Structure OK. Running catalog rules...");

    // 3. Run the Validation Engine
    let errors = get_standard_validator().run(&payload);

    // 4. Report Results
    if errors.is_empty() {
        println!("🎉 VALIDATION PASSED!");
    } else {
        println!("⚠️  VALIDATION FAILED: Found {} errors.", errors.len());
        println!("{:-<50}", "-");
        for err in errors {
            println!("🛑 [{}] {}", err.code, err.field);
            println!("   Msg: {}", err.message);
            println!("{:-<50}", "-");
        }
    }

    Ok(())
}
