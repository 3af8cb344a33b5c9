//! Weather snapshots and the care hints derived from them.
//!
//! The provider is a seam: [`MockWeatherProvider`] returns fixed mild weather and
//! is what the CLI uses. Nothing here is normative for care scheduling.

use crate::error::Result;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    pub condition: String,
    pub location_name: String,
}

pub trait WeatherProvider {
    /// `location` is a place name or `"auto"`.
    fn current(&self, location: &str) -> Result<WeatherSnapshot>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockWeatherProvider;

impl WeatherProvider for MockWeatherProvider {
    fn current(&self, location: &str) -> Result<WeatherSnapshot> {
        let location_name = if location == "auto" {
            "Your Location".to_string()
        } else {
            location.to_string()
        };
        Ok(WeatherSnapshot {
            temperature: 22.0,
            humidity: 65.0,
            condition: "Clear".to_string(),
            location_name,
        })
    }
}

pub fn care_adjustments(weather: &WeatherSnapshot) -> Vec<&'static str> {
    let mut adjustments = Vec::new();
    let condition = weather.condition.to_lowercase();

    if weather.temperature > 30.0 {
        adjustments.push("🌡️ High temperature: Increase watering frequency and provide shade");
    }
    if weather.temperature < 5.0 {
        adjustments.push("❄️ Low temperature: Protect tender plants and reduce watering");
    }
    if condition.contains("rain") {
        adjustments.push("🌧️ Rainy weather: Reduce watering schedule and check for fungal issues");
    }
    if weather.humidity < 30.0 {
        adjustments.push("🏜️ Low humidity: Increase misting for houseplants and check soil moisture");
    }

    adjustments
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Northern-hemisphere meteorological seasons; `month` is 1-based.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Season::Spring => &[
                "Start seeds indoors for warm-season crops",
                "Begin hardening off seedlings",
                "Prepare garden beds with compost",
                "Plant cool-season vegetables",
                "Prune roses and fruit trees",
            ],
            Season::Summer => &[
                "Water deeply and regularly",
                "Mulch around plants to retain moisture",
                "Harvest vegetables regularly",
                "Deadhead flowers to encourage blooming",
                "Watch for pests and diseases",
            ],
            Season::Fall => &[
                "Plant spring-blooming bulbs",
                "Harvest and preserve crops",
                "Clean up garden debris",
                "Plant cover crops",
                "Prepare tender plants for winter",
            ],
            Season::Winter => &[
                "Plan next year's garden",
                "Order seeds and plants",
                "Maintain houseplants",
                "Protect outdoor plants from frost",
                "Service and clean garden tools",
            ],
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Fall => write!(f, "fall"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(temperature: f64, humidity: f64, condition: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature,
            humidity,
            condition: condition.to_string(),
            location_name: "Here".to_string(),
        }
    }

    #[test]
    fn test_mock_provider() {
        let weather = MockWeatherProvider.current("auto").unwrap();
        assert_eq!(weather.location_name, "Your Location");
        assert_eq!(weather.temperature, 22.0);

        let weather = MockWeatherProvider.current("Lisbon").unwrap();
        assert_eq!(weather.location_name, "Lisbon");
    }

    #[test]
    fn test_mild_weather_needs_no_adjustment() {
        assert!(care_adjustments(&snapshot(22.0, 65.0, "Clear")).is_empty());
    }

    #[test]
    fn test_adjustments_stack() {
        let hints = care_adjustments(&snapshot(33.0, 20.0, "Light Rain"));
        assert_eq!(hints.len(), 3);
        assert!(hints[0].contains("High temperature"));
        assert!(hints[1].contains("Rainy weather"));
        assert!(hints[2].contains("Low humidity"));

        let hints = care_adjustments(&snapshot(2.0, 80.0, "Snow"));
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("Low temperature"));
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(11), Season::Fall);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::Fall.recommendations().len(), 5);
    }
}
