use crate::care;
use crate::model::Plant;
use chrono::NaiveDate;
use regex::Regex;
use std::cmp::Ordering;

/// Search query with optional field-specific and regex support
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Matches everything
    All,
    /// Simple substring search (case-insensitive)
    Simple(String),
    /// Regex search
    Regex(Regex),
    /// Field-specific search
    Field {
        field: SearchField,
        pattern: Box<SearchQuery>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Type,
    Location,
    Notes,
}

impl SearchField {
    fn value(self, plant: &Plant) -> &str {
        match self {
            SearchField::Name => plant.name.as_str(),
            SearchField::Type => plant.plant_type.as_str(),
            SearchField::Location => plant.location.as_deref().unwrap_or(""),
            SearchField::Notes => plant.notes.as_deref().unwrap_or(""),
        }
    }

    const ALL: [SearchField; 4] = [
        SearchField::Name,
        SearchField::Type,
        SearchField::Location,
        SearchField::Notes,
    ];
}

impl SearchQuery {
    /// Parse a search query string
    /// Supports:
    /// - Empty: matches every plant
    /// - Simple: "basil" -> searches name, type, location and notes
    /// - Field-specific: "location:bed" -> searches location only
    /// - Regex: "regex:^cherry" -> regex search (case-insensitive)
    /// - Combined: "name:regex:tom.*" -> regex in name field
    pub fn parse(query: &str) -> Result<Self, String> {
        if query.is_empty() {
            return Ok(SearchQuery::All);
        }

        if let Some((field_str, pattern)) = query.split_once(':') {
            if let Ok(field) = field_str.parse::<SearchField>() {
                let sub_query = Self::parse(pattern)?;
                return Ok(SearchQuery::Field {
                    field,
                    pattern: Box::new(sub_query),
                });
            }

            if field_str == "regex" {
                let regex = Regex::new(&format!("(?i){}", pattern))
                    .map_err(|e| format!("Invalid regex: {}", e))?;
                return Ok(SearchQuery::Regex(regex));
            }
        }

        Ok(SearchQuery::Simple(query.to_string()))
    }

    fn matches_text(&self, text: &str) -> bool {
        match self {
            SearchQuery::All => true,
            SearchQuery::Simple(pattern) => text.to_lowercase().contains(&pattern.to_lowercase()),
            SearchQuery::Regex(regex) => regex.is_match(text),
            SearchQuery::Field { .. } => false,
        }
    }

    pub fn matches(&self, plant: &Plant) -> bool {
        match self {
            SearchQuery::Field { field, pattern } => pattern.matches_text(field.value(plant)),
            _ => SearchField::ALL
                .iter()
                .any(|field| self.matches_text(field.value(plant))),
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "type" => Ok(SearchField::Type),
            "location" => Ok(SearchField::Location),
            "notes" | "note" => Ok(SearchField::Notes),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

/// Case-insensitive substring filter over name, type, location and notes.
/// An empty query returns every plant.
pub fn filter<'a>(plants: &'a [Plant], query: &str) -> Vec<&'a Plant> {
    let query = SearchQuery::parse(query).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Falling back to substring search");
        SearchQuery::Simple(query.to_string())
    });
    plants.iter().filter(|p| query.matches(p)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    /// Oldest planted first
    Age,
    /// Plants needing attention first, then by name
    Attention,
    /// Newest planted first
    Date,
}

/// Orders names ignoring case first, so "apple" sorts before "Banana".
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Returns a sorted view; the input slice is left untouched.
pub fn sort_plants<'a>(plants: &[&'a Plant], key: SortKey, today: NaiveDate) -> Vec<&'a Plant> {
    let mut sorted = plants.to_vec();
    match key {
        SortKey::Name => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::Age => sorted.sort_by(|a, b| a.date_planted.cmp(&b.date_planted)),
        SortKey::Date => sorted.sort_by(|a, b| b.date_planted.cmp(&a.date_planted)),
        SortKey::Attention => sorted.sort_by(|a, b| {
            let a_needs = care::needs_attention(a, today);
            let b_needs = care::needs_attention(b, today);
            match (a_needs, b_needs) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => compare_names(&a.name, &b.name),
            }
        }),
    }
    sorted
}
