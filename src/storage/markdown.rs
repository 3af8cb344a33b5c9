//! Markdown export and import.
//!
//! ## Format
//!
//! ```markdown
//! # 🌿 Garden Export - 2024-06-15
//!
//! ## Cherry Tom
//!
//! - **Type:** Cherry Tomato
//! - **Age:** 2 months
//! - **Planted:** 2024-04-10
//! - **Health Status:** healthy
//! - **Location:** Bed 2
//! - **Care Schedule:** daily
//! - **Last Care:** 2024-06-14
//! - **Next Care:** 2024-06-15 (in 0 days)
//!
//! ### Care History
//!
//! - **2024-06-14:** watering - morning
//!
//! ---
//! ```
//!
//! Import is split in two: [`lex_sections`] turns text into [`RawSection`]s of
//! label/value pairs, and [`parse_import`] validates those into [`ImportedPlant`]s.

use crate::care::{self, NextCare};
use crate::error::{GardenError, Result};
use crate::model::{CareSchedule, HealthStatus, Plant};
use chrono::{DateTime, NaiveDate};

const SECTION_MARKER: &str = "## ";
const BYTE_ORDER_MARK: char = '\u{feff}';
const SECTION_RULE: &str = "---";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of care history entries included per plant in an export.
pub const EXPORTED_CARE_ENTRIES: usize = 5;

const LABEL_TYPE: &str = "Type";
const LABEL_PLANTED: &str = "Planted";
const LABEL_LOCATION: &str = "Location";
const LABEL_NOTES: &str = "Notes";
const LABEL_SCHEDULE: &str = "Care Schedule";
const LABEL_HEALTH: &str = "Health Status";

/// Date formats accepted for `Planted:` on import, tried in order.
const IMPORT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

pub fn export_filename(today: NaiveDate) -> String {
    format!("garden-export-{}.md", today.format(DATE_FORMAT))
}

pub fn render_export(plants: &[Plant], today: NaiveDate) -> String {
    let mut output = format!("# 🌿 Garden Export - {}\n\n", today.format(DATE_FORMAT));
    for plant in plants {
        render_plant(plant, today, &mut output);
    }
    output
}

fn push_field(output: &mut String, label: &str, value: impl std::fmt::Display) {
    output.push_str(&format!("- **{}:** {}\n", label, value));
}

fn render_plant(plant: &Plant, today: NaiveDate, output: &mut String) {
    output.push_str(&format!("{}{}\n\n", SECTION_MARKER, plant.name));

    push_field(output, LABEL_TYPE, &plant.plant_type);
    push_field(output, "Age", care::age(plant.date_planted, today));
    push_field(output, LABEL_PLANTED, plant.date_planted.format(DATE_FORMAT));
    push_field(output, LABEL_HEALTH, plant.health_status);

    if let Some(ref location) = plant.location {
        push_field(output, LABEL_LOCATION, location);
    }
    if let Some(ref notes) = plant.notes {
        push_field(output, LABEL_NOTES, notes);
    }

    push_field(output, LABEL_SCHEDULE, plant.care_schedule);
    if let Some(last_care) = plant.last_care_date {
        push_field(output, "Last Care", last_care.format(DATE_FORMAT));
    }

    match care::next_care(plant, today) {
        NextCare::Scheduled {
            date,
            is_overdue,
            days_until,
        } => {
            let status = if is_overdue {
                "Overdue".to_string()
            } else {
                format!("in {} days", days_until)
            };
            push_field(
                output,
                "Next Care",
                format!("{} ({})", date.format(DATE_FORMAT), status),
            );
        }
        NextCare::NeverCared => push_field(output, "Next Care", NextCare::NEVER_CARED_MESSAGE),
    }

    if !plant.growth_milestones.is_empty() {
        output.push_str("\n### Growth Timeline\n\n");
        for milestone in &plant.growth_milestones {
            push_field(
                output,
                &milestone.date.format(DATE_FORMAT).to_string(),
                &milestone.description,
            );
        }
    }

    if !plant.care_history.is_empty() {
        output.push_str("\n### Care History\n\n");
        for record in plant.recent_care(EXPORTED_CARE_ENTRIES) {
            let mut entry = record.care_type.clone();
            if !record.notes.is_empty() {
                entry.push_str(" - ");
                entry.push_str(&record.notes);
            }
            push_field(output, &record.date.format(DATE_FORMAT).to_string(), entry);
        }
    }

    output.push('\n');
    output.push_str(SECTION_RULE);
    output.push_str("\n\n");
}

/// One `## ` section of an import, before validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSection {
    /// 1-based position in the document.
    pub index: usize,
    /// First non-blank line of the section.
    pub name: Option<String>,
    /// `**Label:** value` pairs in document order.
    pub fields: Vec<(String, String)>,
}

impl RawSection {
    /// Value of the last occurrence of `label`.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Extracts `(label, value)` from a line containing `**Label:** value`.
fn bold_label(line: &str) -> Option<(String, String)> {
    let start = line.find("**")?;
    let rest = &line[start + 2..];
    let end = rest.find(":**")?;
    let label = rest[..end].trim();
    if label.is_empty() {
        return None;
    }
    let value = rest[end + 3..].trim();
    Some((label.to_string(), value.to_string()))
}

fn finish_section(index: usize, lines: &[&str]) -> RawSection {
    let mut non_blank = lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty());
    let name = non_blank.next().map(str::to_string);
    let fields = non_blank.filter_map(bold_label).collect();
    RawSection {
        index,
        name,
        fields,
    }
}

/// Splits a document into level-2 sections. Text before the first heading is discarded.
pub fn lex_sections(content: &str) -> Vec<RawSection> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut sections = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in content.lines() {
        if let Some(heading) = line.trim_start().strip_prefix(SECTION_MARKER) {
            if let Some(lines) = current.take() {
                sections.push(finish_section(sections.len() + 1, &lines));
            }
            current = Some(vec![heading]);
        } else if let Some(ref mut lines) = current {
            lines.push(line);
        }
    }
    if let Some(lines) = current {
        sections.push(finish_section(sections.len() + 1, &lines));
    }

    sections
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    IMPORT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// A validated section, ready to become a [`Plant`].
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedPlant {
    pub name: String,
    pub plant_type: String,
    pub date_planted: NaiveDate,
    pub care_schedule: CareSchedule,
    pub health_status: HealthStatus,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl ImportedPlant {
    pub fn into_plant(self, id: String) -> Plant {
        Plant::new(id, self.name, self.plant_type, self.date_planted)
            .with_location(self.location)
            .with_notes(self.notes)
            .with_schedule(self.care_schedule)
            .with_health(self.health_status)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn validate_section(section: &RawSection) -> Option<ImportedPlant> {
    let Some(name) = section.name.clone() else {
        tracing::warn!(section = section.index, "Skipping section: no plant name found");
        return None;
    };

    let Some(plant_type) = non_empty(section.field(LABEL_TYPE)) else {
        tracing::warn!(name = %name, "Skipping plant: missing plant type");
        return None;
    };

    let date_planted = match section.field(LABEL_PLANTED) {
        Some(raw) => {
            let parsed = parse_date(raw);
            if parsed.is_none() {
                tracing::warn!(name = %name, value = %raw, "Unparseable planted date");
            }
            parsed
        }
        None => None,
    };
    let Some(date_planted) = date_planted else {
        tracing::warn!(name = %name, "Skipping plant: missing or invalid planted date");
        return None;
    };

    let care_schedule = section
        .field(LABEL_SCHEDULE)
        .and_then(|v| v.parse::<CareSchedule>().ok())
        .unwrap_or_default();
    let health_status = section
        .field(LABEL_HEALTH)
        .and_then(|v| v.parse::<HealthStatus>().ok())
        .unwrap_or_default();

    Some(ImportedPlant {
        name,
        plant_type,
        date_planted,
        care_schedule,
        health_status,
        location: non_empty(section.field(LABEL_LOCATION)),
        notes: non_empty(section.field(LABEL_NOTES)),
    })
}

/// Parses an export back into plant drafts.
///
/// Fails with `InvalidImportFormat` for empty input or when no `## ` section
/// exists, and with `NoValidRecords` when every section was rejected.
pub fn parse_import(content: &str) -> Result<Vec<ImportedPlant>> {
    if content.is_empty() {
        return Err(GardenError::InvalidImportFormat(
            "Invalid file content. Please provide a valid markdown file.".to_string(),
        ));
    }

    let sections = lex_sections(content);
    if sections.is_empty() {
        return Err(GardenError::InvalidImportFormat(
            "No plants found in the file. Please check the markdown format.".to_string(),
        ));
    }

    let plants: Vec<ImportedPlant> = sections.iter().filter_map(validate_section).collect();
    if plants.is_empty() {
        return Err(GardenError::NoValidRecords);
    }

    tracing::debug!(
        sections = sections.len(),
        accepted = plants.len(),
        "Parsed markdown import"
    );
    Ok(plants)
}
