use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{confirm, tolerate_quota};

/// Deletes every plant matching `query`, or the listed ids.
pub fn handle_bulk_delete(
    ctx: &mut CommandContext,
    query: Option<String>,
    ids: Vec<String>,
    force: bool,
    json: bool,
) -> Result<()> {
    ctx.store.clear_selection();
    match query {
        Some(ref query) => {
            ctx.store.set_search_query(query);
            ctx.store.select_all();
        }
        None => {
            for id in &ids {
                if ctx.store.get(id).is_none() {
                    eprintln!("{} {}: not found", "Skipped".yellow(), id.cyan());
                    continue;
                }
                if !ctx.store.is_selected(id) {
                    ctx.store.toggle_selection(id);
                }
            }
        }
    }

    let selected: Vec<String> = ctx.store.selected().iter().map(|p| p.id.clone()).collect();
    if selected.is_empty() {
        if json {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "deleted": [] }))?);
        } else {
            println!("No plants selected.");
        }
        return Ok(());
    }

    if !force && !json && !confirm(&format!("Delete {} plant(s) permanently?", selected.len()))? {
        ctx.store.clear_selection();
        println!("Cancelled.");
        return Ok(());
    }

    let removed = tolerate_quota(ctx.store.delete_selected(), || selected.len())?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "deleted": selected,
                "count": removed
            }))?
        );
    } else {
        for id in &selected {
            println!("{} {}", "Deleted".red(), id.cyan());
        }
        println!("{} plant(s) deleted", removed);
    }
    Ok(())
}
