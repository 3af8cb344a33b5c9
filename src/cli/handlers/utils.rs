use crate::care::{self, NextCare};
use crate::catalog;
use crate::error::GardenError;
use crate::model::{HealthStatus, Plant};
use crate::storage::markdown::EXPORTED_CARE_ENTRIES;
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, Write};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ask a yes/no question on stdin; anything but `y` is a no
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// A full store still saves the change, just without photos. Warn and carry on.
pub fn tolerate_quota<T>(
    result: crate::error::Result<T>,
    saved: impl FnOnce() -> T,
) -> Result<T> {
    match result {
        Err(GardenError::StorageQuotaExceeded { dropped_photos }) => {
            eprintln!(
                "{} storage is full, saved without {} photo(s)",
                "Warning:".yellow(),
                dropped_photos
            );
            Ok(saved())
        }
        other => Ok(other?),
    }
}

/// Format health status with color coding
pub fn format_health(status: HealthStatus) -> colored::ColoredString {
    match status {
        HealthStatus::Healthy => "healthy".green(),
        HealthStatus::NeedsAttention => "needs-attention".yellow(),
        HealthStatus::Sick => "sick".red(),
    }
}

pub fn format_next_care(plant: &Plant, today: NaiveDate) -> colored::ColoredString {
    match care::next_care(plant, today) {
        NextCare::NeverCared => NextCare::NEVER_CARED_MESSAGE.dimmed(),
        NextCare::Scheduled {
            date,
            is_overdue: true,
            ..
        } => format!("{} (Overdue)", date.format(DATE_FORMAT)).red().bold(),
        NextCare::Scheduled {
            date, days_until, ..
        } => format!("{} (in {} days)", date.format(DATE_FORMAT), days_until).normal(),
    }
}

/// Print a single plant with details
pub fn print_plant(plant: &Plant, today: NaiveDate) {
    println!("{} {}", plant.id.cyan().bold(), plant.name.bold());
    println!("Type:      {}", plant.plant_type.blue());
    println!(
        "Age:       {} (planted {})",
        care::age(plant.date_planted, today),
        plant.date_planted.format(DATE_FORMAT)
    );
    println!("Health:    {}", format_health(plant.health_status));
    if let Some(ref location) = plant.location {
        println!("Location:  {}", location.magenta());
    }
    println!("Schedule:  {}", plant.care_schedule);
    if let Some(last_care) = plant.last_care_date {
        println!("Last care: {}", last_care.format(DATE_FORMAT));
    }
    println!("Next care: {}", format_next_care(plant, today));
    match plant.photo {
        Some(_) => println!("Photo:     {}", "attached".dimmed()),
        None => println!(
            "Image:     {}",
            catalog::reference_image(&plant.plant_type).dimmed()
        ),
    }

    if let Some(ref notes) = plant.notes {
        println!();
        println!("{}", notes);
    }

    if !plant.growth_milestones.is_empty() {
        println!();
        println!("{}", "Growth timeline".bold());
        for milestone in &plant.growth_milestones {
            println!(
                "  {} {}",
                milestone.date.format(DATE_FORMAT).to_string().dimmed(),
                milestone.description
            );
        }
    }

    if !plant.care_history.is_empty() {
        println!();
        println!("{}", "Care history".bold());
        for record in plant.recent_care(EXPORTED_CARE_ENTRIES) {
            let notes = if record.notes.is_empty() {
                String::new()
            } else {
                format!(" - {}", record.notes)
            };
            println!(
                "  {} {}{}",
                record.date.format(DATE_FORMAT).to_string().dimmed(),
                record.care_type,
                notes
            );
        }
    }
}

/// Print a list of plants (compact format)
pub fn print_plant_list(plants: &[&Plant], today: NaiveDate) {
    if plants.is_empty() {
        println!("No plants found.");
        return;
    }

    for plant in plants {
        let marker = if care::needs_attention(plant, today) {
            "!".red().bold()
        } else {
            " ".normal()
        };
        println!(
            "{} {} {} [{}] {}",
            marker,
            plant.id.cyan(),
            format_health(plant.health_status),
            plant.plant_type.blue(),
            plant.name
        );
    }
}
