use crate::care;
use crate::cli::SortArg;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_plant_list;

/// Parameters for list operation
pub struct ListParams {
    pub sort: SortArg,
    pub query: Option<String>,
    pub attention: bool,
    pub json: bool,
}

pub fn handle_list(ctx: &mut CommandContext, params: ListParams) -> Result<()> {
    if let Some(ref query) = params.query {
        ctx.store.set_search_query(query);
    }

    let today = ctx.store.today();
    let mut plants = ctx.store.sorted(params.sort.into());
    if params.attention {
        plants.retain(|p| care::needs_attention(p, today));
    }

    if params.json {
        println!("{}", serde_json::to_string_pretty(&plants)?);
    } else {
        print_plant_list(&plants, today);
    }
    Ok(())
}
