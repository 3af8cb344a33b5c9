use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_weather(ctx: &mut CommandContext, location: Option<String>, json: bool) -> Result<()> {
    let location = location.unwrap_or_else(|| ctx.config.weather.location.clone());
    let Some(weather) = ctx.store.refresh_weather(&location).cloned() else {
        anyhow::bail!("Weather is unavailable for {}", location);
    };
    let adjustments = ctx.store.care_adjustments();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "weather": weather,
                "adjustments": adjustments,
            }))?
        );
        return Ok(());
    }

    println!("{}", weather.location_name.bold());
    println!("Temperature: {:.0}°C", weather.temperature);
    println!("Humidity:    {:.0}%", weather.humidity);
    println!("Conditions:  {}", weather.condition);
    if adjustments.is_empty() {
        println!("{}", "No care adjustments needed.".green());
    } else {
        println!();
        for adjustment in adjustments {
            println!("{}", adjustment);
        }
    }
    Ok(())
}

pub fn handle_tips(ctx: &CommandContext) -> Result<()> {
    let season = ctx.store.season();
    println!("{} {}", "Tips for".bold(), season.to_string().bold());
    for tip in season.recommendations() {
        println!("  • {}", tip);
    }
    Ok(())
}
