use crate::cli::ScheduleArg;
use crate::model::NewPlant;
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;

use super::CommandContext;
use super::utils::tolerate_quota;

/// Parameters for adding a plant
pub struct CreateParams {
    pub name: String,
    pub plant_type: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub planted: Option<NaiveDate>,
    pub schedule: ScheduleArg,
    pub photo: Option<String>,
    pub json: bool,
}

pub fn handle_create(ctx: &mut CommandContext, params: CreateParams) -> Result<()> {
    let planted = params.planted.unwrap_or_else(|| ctx.store.today());
    let mut new_plant =
        NewPlant::new(params.name, params.plant_type, planted).with_schedule(params.schedule.into());
    if let Some(location) = params.location {
        new_plant = new_plant.with_location(location);
    }
    if let Some(notes) = params.notes {
        new_plant = new_plant.with_notes(notes);
    }
    if let Some(photo) = params.photo {
        new_plant = new_plant.with_photo(photo);
    }

    let result = ctx.store.add(new_plant);
    let store = &ctx.store;
    let id = tolerate_quota(result, || {
        store
            .plants()
            .last()
            .map(|p| p.id.clone())
            .unwrap_or_default()
    })?;

    let Some(plant) = ctx.store.get(&id) else {
        anyhow::bail!("Plant {} was not stored", id);
    };
    if params.json {
        println!("{}", serde_json::to_string_pretty(plant)?);
    } else {
        println!("{} {} {}", "Added".green(), plant.id.cyan(), plant.name);
    }
    Ok(())
}
