use crate::cli::HealthArg;
use crate::model::HealthStatus;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_next_care, tolerate_quota};

fn print_result(ctx: &CommandContext, id: &str, found: bool, json: bool, verb: &str) -> Result<()> {
    let Some(plant) = ctx.store.get(id).filter(|_| found) else {
        anyhow::bail!("Plant not found: {}", id);
    };
    if json {
        println!("{}", serde_json::to_string_pretty(plant)?);
    } else {
        println!(
            "{} {} {} (next care: {})",
            verb.green(),
            plant.id.cyan(),
            plant.name,
            format_next_care(plant, ctx.store.today())
        );
    }
    Ok(())
}

/// Without a care type this only marks the plant as cared for today.
pub fn handle_care(
    ctx: &mut CommandContext,
    id: String,
    care_type: Option<String>,
    notes: String,
    json: bool,
) -> Result<()> {
    let result = match care_type {
        Some(ref care_type) => ctx.store.add_care_record(&id, care_type, &notes),
        None => ctx.store.record_care(&id),
    };
    let found = tolerate_quota(result, || true)?;
    print_result(ctx, &id, found, json, "Cared for")
}

pub fn handle_health(ctx: &mut CommandContext, id: String, status: HealthArg, json: bool) -> Result<()> {
    let status: HealthStatus = status.into();
    let found = tolerate_quota(ctx.store.update_health(&id, status), || true)?;
    print_result(ctx, &id, found, json, &format!("Marked {}", status))
}

pub fn handle_milestone(
    ctx: &mut CommandContext,
    id: String,
    description: String,
    json: bool,
) -> Result<()> {
    let found = tolerate_quota(ctx.store.add_milestone(&id, &description), || true)?;
    print_result(ctx, &id, found, json, "Milestone added to")
}
