//! Data models for the garden.
//!
//! - [`Plant`]: one tracked plant and its accumulated history
//! - [`NewPlant`] / [`PlantPatch`]: inputs for adding and updating plants
//! - [`CareSchedule`]: recurring care interval (daily, weekly, biweekly, monthly)
//! - [`HealthStatus`]: healthy, needs-attention, sick

mod plant;
mod types;

pub use plant::{CareRecord, GrowthMilestone, NewPlant, Plant, PlantPatch};
pub use types::{CareSchedule, HealthStatus};
