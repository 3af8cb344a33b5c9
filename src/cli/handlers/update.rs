use crate::cli::{HealthArg, ScheduleArg};
use crate::model::PlantPatch;
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;

use super::CommandContext;
use super::utils::tolerate_quota;

/// Parameters for update operation
pub struct UpdateParams {
    pub name: Option<String>,
    pub plant_type: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub planted: Option<NaiveDate>,
    pub schedule: Option<ScheduleArg>,
    pub health: Option<HealthArg>,
    pub last_care: Option<NaiveDate>,
    pub photo: Option<String>,
    pub json: bool,
}

pub fn handle_update(ctx: &mut CommandContext, id: String, params: UpdateParams) -> Result<()> {
    let patch = PlantPatch {
        name: params.name,
        plant_type: params.plant_type,
        location: params.location,
        notes: params.notes,
        date_planted: params.planted,
        care_schedule: params.schedule.map(Into::into),
        last_care_date: params.last_care,
        health_status: params.health.map(Into::into),
        photo: params.photo,
    };

    if patch.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one field to change.");
    }

    let found = tolerate_quota(ctx.store.update(&id, patch), || true)?;
    let Some(plant) = ctx.store.get(&id).filter(|_| found) else {
        anyhow::bail!("Plant not found: {}", id);
    };

    if params.json {
        println!("{}", serde_json::to_string_pretty(plant)?);
    } else {
        println!("{} {} {}", "Updated".green(), plant.id.cyan(), plant.name);
    }
    Ok(())
}
