use crate::error::{GardenError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CareSchedule {
    Daily,
    #[default]
    Weekly,
    Biweekly,
    Monthly,
}

impl CareSchedule {
    /// Days between two care actions.
    pub fn interval_days(self) -> i64 {
        match self {
            CareSchedule::Daily => 1,
            CareSchedule::Weekly => 7,
            CareSchedule::Biweekly => 14,
            CareSchedule::Monthly => 30,
        }
    }
}

impl fmt::Display for CareSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareSchedule::Daily => write!(f, "daily"),
            CareSchedule::Weekly => write!(f, "weekly"),
            CareSchedule::Biweekly => write!(f, "biweekly"),
            CareSchedule::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for CareSchedule {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daily" => Ok(CareSchedule::Daily),
            "weekly" => Ok(CareSchedule::Weekly),
            "biweekly" => Ok(CareSchedule::Biweekly),
            "monthly" => Ok(CareSchedule::Monthly),
            _ => Err(GardenError::Validation(format!(
                "Invalid care schedule: {}",
                s
            ))),
        }
    }
}

/// Stored data from older versions may carry schedules we no longer know; those read as weekly.
pub(crate) fn lenient_schedule<'de, D>(deserializer: D) -> std::result::Result<CareSchedule, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.parse::<CareSchedule>().ok())
        .unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    #[default]
    Healthy,
    NeedsAttention,
    Sick,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::NeedsAttention => write!(f, "needs-attention"),
            HealthStatus::Sick => write!(f, "sick"),
        }
    }
}

impl FromStr for HealthStatus {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "healthy" => Ok(HealthStatus::Healthy),
            "needs-attention" => Ok(HealthStatus::NeedsAttention),
            "sick" => Ok(HealthStatus::Sick),
            _ => Err(GardenError::Validation(format!(
                "Invalid health status: {}",
                s
            ))),
        }
    }
}
