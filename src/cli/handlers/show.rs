use anyhow::Result;

use super::CommandContext;
use super::utils::print_plant;

pub fn handle_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    let Some(plant) = ctx.store.get(&id) else {
        anyhow::bail!("Plant not found: {}", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(plant)?);
    } else {
        print_plant(plant, ctx.store.today());
    }
    Ok(())
}
