use super::types::{CareSchedule, HealthStatus, lenient_schedule};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthMilestone {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRecord {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub care_type: String,
    #[serde(default)]
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,

    #[serde(rename = "type")]
    pub plant_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub date_planted: NaiveDate,

    #[serde(default, deserialize_with = "lenient_schedule")]
    pub care_schedule: CareSchedule,

    #[serde(default)]
    pub last_care_date: Option<NaiveDate>,

    #[serde(default)]
    pub health_status: HealthStatus,

    #[serde(default)]
    pub growth_milestones: Vec<GrowthMilestone>,

    #[serde(default)]
    pub care_history: Vec<CareRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Plant {
    pub fn new(id: String, name: String, plant_type: String, date_planted: NaiveDate) -> Self {
        Self {
            id,
            name,
            plant_type,
            location: None,
            notes: None,
            date_planted,
            care_schedule: CareSchedule::default(),
            last_care_date: None,
            health_status: HealthStatus::default(),
            growth_milestones: Vec::new(),
            care_history: Vec::new(),
            photo: None,
        }
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_schedule(mut self, schedule: CareSchedule) -> Self {
        self.care_schedule = schedule;
        self
    }

    pub fn with_health(mut self, status: HealthStatus) -> Self {
        self.health_status = status;
        self
    }

    pub fn with_photo(mut self, photo: Option<String>) -> Self {
        self.photo = photo;
        self
    }

    pub fn location_or_empty(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// The most recent care entries, oldest first, at most `n` of them.
    pub fn recent_care(&self, n: usize) -> &[CareRecord] {
        let start = self.care_history.len().saturating_sub(n);
        &self.care_history[start..]
    }
}

/// Input for adding a plant. Identity and history fields are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlant {
    pub name: String,
    pub plant_type: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub date_planted: NaiveDate,
    pub care_schedule: CareSchedule,
    pub photo: Option<String>,
}

impl NewPlant {
    pub fn new(name: impl Into<String>, plant_type: impl Into<String>, date_planted: NaiveDate) -> Self {
        Self {
            name: name.into(),
            plant_type: plant_type.into(),
            location: None,
            notes: None,
            date_planted,
            care_schedule: CareSchedule::default(),
            photo: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_schedule(mut self, schedule: CareSchedule) -> Self {
        self.care_schedule = schedule;
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Strips surrounding whitespace from the name and type.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.plant_type = self.plant_type.trim().to_string();
        self
    }

    pub fn into_plant(self, id: String) -> Plant {
        Plant::new(id, self.name, self.plant_type, self.date_planted)
            .with_location(self.location)
            .with_notes(self.notes)
            .with_schedule(self.care_schedule)
            .with_photo(self.photo)
    }
}

/// Shallow-merge update. `None` keeps the current value; an empty string clears
/// `location`, `notes` or `photo`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantPatch {
    pub name: Option<String>,
    pub plant_type: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub date_planted: Option<NaiveDate>,
    pub care_schedule: Option<CareSchedule>,
    pub last_care_date: Option<NaiveDate>,
    pub health_status: Option<HealthStatus>,
    pub photo: Option<String>,
}

impl PlantPatch {
    pub fn is_empty(&self) -> bool {
        *self == PlantPatch::default()
    }

    /// Strips surrounding whitespace from a new name or type.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.map(|name| name.trim().to_string());
        self.plant_type = self.plant_type.map(|plant_type| plant_type.trim().to_string());
        self
    }

    pub fn apply(self, plant: &mut Plant) {
        if let Some(name) = self.name {
            plant.name = name;
        }
        if let Some(plant_type) = self.plant_type {
            plant.plant_type = plant_type;
        }
        if let Some(location) = self.location {
            plant.location = non_empty(location);
        }
        if let Some(notes) = self.notes {
            plant.notes = non_empty(notes);
        }
        if let Some(date) = self.date_planted {
            plant.date_planted = date;
        }
        if let Some(schedule) = self.care_schedule {
            plant.care_schedule = schedule;
        }
        if let Some(date) = self.last_care_date {
            plant.last_care_date = Some(date);
        }
        if let Some(status) = self.health_status {
            plant.health_status = status;
        }
        if let Some(photo) = self.photo {
            plant.photo = non_empty(photo);
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plant_json_uses_camel_case_keys() {
        let plant = Plant::new(
            "plant-1".to_string(),
            "Tom".to_string(),
            "Tomato".to_string(),
            date(2024, 4, 1),
        );
        let json = serde_json::to_value(&plant).unwrap();
        assert_eq!(json["datePlanted"], "2024-04-01");
        assert_eq!(json["type"], "Tomato");
        assert_eq!(json["careSchedule"], "weekly");
        assert_eq!(json["healthStatus"], "healthy");
        assert!(json["lastCareDate"].is_null());
        assert!(json.get("photo").is_none());
    }

    #[test]
    fn test_unknown_schedule_reads_as_weekly() {
        let json = r#"{"id":"p","name":"Fern","type":"Boston Fern","datePlanted":"2023-01-01","careSchedule":"hourly"}"#;
        let plant: Plant = serde_json::from_str(json).unwrap();
        assert_eq!(plant.care_schedule, CareSchedule::Weekly);
        assert_eq!(plant.health_status, HealthStatus::Healthy);
        assert!(plant.growth_milestones.is_empty());
    }

    #[test]
    fn test_patch_merges_only_provided_fields() {
        let mut plant = Plant::new(
            "plant-1".to_string(),
            "Tom".to_string(),
            "Tomato".to_string(),
            date(2024, 4, 1),
        )
        .with_location(Some("Bed 1".to_string()))
        .with_notes(Some("Staked".to_string()));

        PlantPatch {
            name: Some("Big Tom".to_string()),
            notes: Some(String::new()),
            ..Default::default()
        }
        .apply(&mut plant);

        assert_eq!(plant.name, "Big Tom");
        assert_eq!(plant.plant_type, "Tomato");
        assert_eq!(plant.location.as_deref(), Some("Bed 1"));
        assert_eq!(plant.notes, None);
        assert_eq!(plant.id, "plant-1");
    }

    #[test]
    fn test_recent_care_keeps_tail_in_order() {
        let mut plant = Plant::new(
            "plant-1".to_string(),
            "Tom".to_string(),
            "Tomato".to_string(),
            date(2024, 4, 1),
        );
        for i in 0..7 {
            plant.care_history.push(CareRecord {
                id: format!("c{}", i),
                date: date(2024, 5, 1 + i),
                care_type: "watering".to_string(),
                notes: String::new(),
                timestamp: Utc::now(),
            });
        }
        let recent = plant.recent_care(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].id, "c2");
        assert_eq!(recent[4].id, "c6");
    }
}
