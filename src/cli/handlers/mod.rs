mod bulk;
mod care;
mod create;
mod delete;
mod init;
mod list;
mod show;
mod suggest;
mod transfer;
mod update;
mod utils;
mod weather;

pub use bulk::handle_bulk_delete;
pub use care::{handle_care, handle_health, handle_milestone};
pub use create::{CreateParams, handle_create};
pub use delete::handle_delete;
pub use init::handle_init;
pub use list::{ListParams, handle_list};
pub use show::handle_show;
pub use suggest::handle_suggest;
pub use transfer::{handle_export, handle_import};
pub use update::{UpdateParams, handle_update};
pub use weather::{handle_tips, handle_weather};

use crate::config::GardenConfig;
use crate::storage::PlantStore;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GardenConfig,
    pub root: PathBuf,
    pub store: PlantStore,
}

impl CommandContext {
    /// Opens the project's store and loads the collection.
    pub fn new(config: GardenConfig, root: PathBuf) -> Self {
        let mut store = PlantStore::from_config(&config, &root);
        store.load();
        Self {
            config,
            root,
            store,
        }
    }
}
