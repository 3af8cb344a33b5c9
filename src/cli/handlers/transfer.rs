use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::CommandContext;
use super::utils::tolerate_quota;

pub async fn handle_export(ctx: &CommandContext, output: String) -> Result<()> {
    let path = ctx
        .store
        .export_to_dir(Path::new(&output))
        .await
        .with_context(|| format!("Failed to export to {}", output))?;
    println!(
        "{} {} plant(s) to {}",
        "Exported".green(),
        ctx.store.plants().len(),
        path.display()
    );
    Ok(())
}

pub async fn handle_import(ctx: &mut CommandContext, file: String) -> Result<()> {
    let before = ctx.store.plants().len();
    let result = ctx.store.import_file(Path::new(&file)).await;
    let count = tolerate_quota(result, || ctx.store.plants().len() - before)?;
    println!("{} {} plant(s) from {}", "Imported".green(), count, file);
    Ok(())
}
