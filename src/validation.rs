//! Input validation for plant data.

use crate::error::{GardenError, Result};
use crate::model::{NewPlant, PlantPatch};

/// Maximum allowed length for a plant name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum allowed length for a plant type.
pub const MAX_TYPE_LENGTH: usize = 100;

/// Maximum allowed length for location and notes.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Validates a plant name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GardenError::Validation("Name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(GardenError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if name.contains('\n') {
        return Err(GardenError::Validation(
            "Name cannot span multiple lines".to_string(),
        ));
    }
    Ok(())
}

/// Validates a plant type.
pub fn validate_type(plant_type: &str) -> Result<()> {
    if plant_type.trim().is_empty() {
        return Err(GardenError::Validation("Type cannot be empty".to_string()));
    }
    if plant_type.len() > MAX_TYPE_LENGTH {
        return Err(GardenError::Validation(format!(
            "Type exceeds maximum length of {} characters",
            MAX_TYPE_LENGTH
        )));
    }
    if plant_type.contains('\n') {
        return Err(GardenError::Validation(
            "Type cannot span multiple lines".to_string(),
        ));
    }
    Ok(())
}

/// Validates optional free text such as location or notes.
pub fn validate_text(field: &str, value: Option<&str>) -> Result<()> {
    if value.is_some_and(|v| v.len() > MAX_TEXT_LENGTH) {
        return Err(GardenError::Validation(format!(
            "{} exceeds maximum length of {} characters",
            field, MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_new_plant(plant: &NewPlant) -> Result<()> {
    validate_name(&plant.name)?;
    validate_type(&plant.plant_type)?;
    validate_text("Location", plant.location.as_deref())?;
    validate_text("Notes", plant.notes.as_deref())?;
    Ok(())
}

pub fn validate_patch(patch: &PlantPatch) -> Result<()> {
    if let Some(ref name) = patch.name {
        validate_name(name)?;
    }
    if let Some(ref plant_type) = patch.plant_type {
        validate_type(plant_type)?;
    }
    validate_text("Location", patch.location.as_deref())?;
    validate_text("Notes", patch.notes.as_deref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_name_empty() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Cherry Tomato #2").is_ok());
    }

    #[test]
    fn test_validate_name_too_long() {
        let long_name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name(&long_name).is_err());
    }

    #[test]
    fn test_validate_name_single_line() {
        assert!(validate_name("Tom\n- **Type:** Rose").is_err());
    }

    #[test]
    fn test_validate_type_single_line() {
        assert!(validate_type("Climbing\nRose").is_err());
        assert!(validate_type("Climbing Rose").is_ok());
    }

    #[test]
    fn test_validate_new_plant_requires_type() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(validate_new_plant(&NewPlant::new("Tom", "", date)).is_err());
        assert!(validate_new_plant(&NewPlant::new("Tom", "Tomato", date)).is_ok());
    }

    #[test]
    fn test_validate_patch_allows_empty_patch() {
        assert!(validate_patch(&PlantPatch::default()).is_ok());
        let patch = PlantPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_patch(&patch).is_err());
    }
}
