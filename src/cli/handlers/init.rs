use crate::config::{CONFIG_FILE_NAME, GardenConfig, GardenSettings};
use crate::error::GardenError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(path: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(GardenError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = GardenConfig {
        garden: GardenSettings {
            path,
            ..Default::default()
        },
        weather: Default::default(),
    };

    let data_path = config.data_path(&cwd);
    std::fs::create_dir_all(&data_path)?;

    config.save(&config_path)?;

    println!("{} garden in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
