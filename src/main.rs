use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use garden::cli::handlers::{self, CommandContext, CreateParams, ListParams, UpdateParams};
use garden::cli::{Cli, Commands};
use garden::config::GardenConfig;
use garden::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Init { path } => {
            logging::init(cli.verbose, None);
            return handlers::handle_init(path);
        }
        Commands::Suggest { query, json } => {
            logging::init(cli.verbose, None);
            return handlers::handle_suggest(query, json);
        }
        command => command,
    };

    let (config, root) = load_config()?;
    logging::init(cli.verbose, config.log_path(&root));
    tracing::debug!(root = %root.display(), "Loaded configuration");

    let mut ctx = CommandContext::new(config, root);

    match command {
        Commands::Add {
            name,
            plant_type,
            location,
            notes,
            planted,
            schedule,
            photo,
            json,
        } => handlers::handle_create(
            &mut ctx,
            CreateParams {
                name,
                plant_type,
                location,
                notes,
                planted,
                schedule,
                photo,
                json,
            },
        ),
        Commands::Show { id, json } => handlers::handle_show(&ctx, id, json),
        Commands::List {
            sort,
            query,
            attention,
            json,
        } => handlers::handle_list(
            &mut ctx,
            ListParams {
                sort,
                query,
                attention,
                json,
            },
        ),
        Commands::Update {
            id,
            name,
            plant_type,
            location,
            notes,
            planted,
            schedule,
            health,
            last_care,
            photo,
            json,
        } => handlers::handle_update(
            &mut ctx,
            id,
            UpdateParams {
                name,
                plant_type,
                location,
                notes,
                planted,
                schedule,
                health,
                last_care,
                photo,
                json,
            },
        ),
        Commands::Delete { id, force, json } => handlers::handle_delete(&mut ctx, id, force, json),
        Commands::Care {
            id,
            care_type,
            notes,
            json,
        } => handlers::handle_care(&mut ctx, id, care_type, notes, json),
        Commands::Health { id, status, json } => handlers::handle_health(&mut ctx, id, status, json),
        Commands::Milestone {
            id,
            description,
            json,
        } => handlers::handle_milestone(&mut ctx, id, description, json),
        Commands::BulkDelete {
            query,
            ids,
            force,
            json,
        } => handlers::handle_bulk_delete(&mut ctx, query, ids, force, json),
        Commands::Export { output } => handlers::handle_export(&ctx, output).await,
        Commands::Import { file } => handlers::handle_import(&mut ctx, file).await,
        Commands::Weather { location, json } => handlers::handle_weather(&mut ctx, location, json),
        Commands::Tips => handlers::handle_tips(&ctx),
        Commands::Init { .. } | Commands::Suggest { .. } => Ok(()),
    }
}

fn load_config() -> Result<(GardenConfig, PathBuf)> {
    let cwd = std::env::current_dir()?;
    GardenConfig::load(&cwd).context("Failed to load garden configuration")
}
