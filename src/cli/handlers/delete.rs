use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{confirm, tolerate_quota};

pub fn handle_delete(ctx: &mut CommandContext, id: String, force: bool, json: bool) -> Result<()> {
    let Some(plant) = ctx.store.get(&id) else {
        anyhow::bail!("Plant not found: {}", id);
    };

    if !force && !json && !confirm(&format!("Delete {} ({}) permanently?", id.cyan(), plant.name))? {
        println!("Cancelled.");
        return Ok(());
    }

    tolerate_quota(ctx.store.delete(&id), || true)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "action": "deleted",
                "id": id
            }))?
        );
    } else {
        println!("{} {}", "Deleted".red(), id.cyan());
    }
    Ok(())
}
