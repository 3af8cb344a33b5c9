use crate::model::{CareSchedule, HealthStatus};
use crate::search::SortKey;
use crate::storage::markdown::parse_date;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "garden")]
#[command(
    author,
    version,
    about = "Keep track of your plants, their care schedules and their history"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new garden in the current directory
    Init {
        /// Data directory, relative to the project root
        #[arg(long, default_value = ".garden")]
        path: String,
    },

    /// Add a plant
    #[command(visible_alias = "new")]
    Add {
        /// Name of the plant
        name: String,

        /// Plant type, e.g. "Cherry Tomato"
        #[arg(short = 't', long = "type")]
        plant_type: String,

        /// Where the plant lives
        #[arg(short, long)]
        location: Option<String>,

        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Date planted (defaults to today)
        #[arg(short, long, value_parser = parse_date_arg)]
        planted: Option<NaiveDate>,

        /// How often the plant needs care
        #[arg(short, long, value_enum, default_value = "weekly")]
        schedule: ScheduleArg,

        /// Photo as a URL or data URI
        #[arg(long)]
        photo: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a plant's details
    Show {
        /// Plant ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List plants
    #[command(visible_alias = "ls")]
    List {
        /// Sort order
        #[arg(short, long, value_enum, default_value = "name")]
        sort: SortArg,

        /// Filter by text; supports name:, type:, location:, notes: and regex:
        #[arg(short, long)]
        query: Option<String>,

        /// Only plants whose care is overdue
        #[arg(long)]
        attention: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update a plant's properties
    Update {
        /// Plant ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New plant type
        #[arg(short = 't', long = "type")]
        plant_type: Option<String>,

        /// New location (use empty string to clear)
        #[arg(short, long)]
        location: Option<String>,

        /// New notes (use empty string to clear)
        #[arg(short, long)]
        notes: Option<String>,

        /// New planted date
        #[arg(short, long, value_parser = parse_date_arg)]
        planted: Option<NaiveDate>,

        /// New care schedule
        #[arg(short, long, value_enum)]
        schedule: Option<ScheduleArg>,

        /// New health status
        #[arg(long, value_enum)]
        health: Option<HealthArg>,

        /// Date of the last care
        #[arg(long, value_parser = parse_date_arg)]
        last_care: Option<NaiveDate>,

        /// New photo (use empty string to clear)
        #[arg(long)]
        photo: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a plant permanently
    Delete {
        /// Plant ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record care for a plant
    Care {
        /// Plant ID
        id: String,

        /// Kind of care, e.g. watering; adds a care history entry
        #[arg(short = 't', long = "type")]
        care_type: Option<String>,

        /// Notes for the care history entry
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a plant's health status
    Health {
        /// Plant ID
        id: String,

        /// New health status
        #[arg(value_enum)]
        status: HealthArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a growth milestone dated today
    Milestone {
        /// Plant ID
        id: String,

        /// What happened
        description: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete several plants at once
    #[command(name = "bulk-delete")]
    BulkDelete {
        /// Delete every plant matching this query
        #[arg(short, long, conflicts_with = "ids")]
        query: Option<String>,

        /// Plant IDs to delete
        #[arg(required_unless_present = "query")]
        ids: Vec<String>,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export all plants to a markdown file
    Export {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: String,
    },

    /// Import plants from a markdown export
    Import {
        /// Markdown file to read
        file: String,
    },

    /// Show current weather and care adjustments
    Weather {
        /// Location name (overrides config)
        #[arg(short, long)]
        location: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Seasonal gardening tips
    Tips,

    /// Suggest plant names for autocomplete
    Suggest {
        /// Partial plant name
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("Invalid date: {}", value))
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScheduleArg {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

impl From<ScheduleArg> for CareSchedule {
    fn from(arg: ScheduleArg) -> Self {
        match arg {
            ScheduleArg::Daily => CareSchedule::Daily,
            ScheduleArg::Weekly => CareSchedule::Weekly,
            ScheduleArg::Biweekly => CareSchedule::Biweekly,
            ScheduleArg::Monthly => CareSchedule::Monthly,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HealthArg {
    Healthy,
    NeedsAttention,
    Sick,
}

impl From<HealthArg> for HealthStatus {
    fn from(arg: HealthArg) -> Self {
        match arg {
            HealthArg::Healthy => HealthStatus::Healthy,
            HealthArg::NeedsAttention => HealthStatus::NeedsAttention,
            HealthArg::Sick => HealthStatus::Sick,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Name,
    Age,
    Attention,
    Date,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Age => SortKey::Age,
            SortArg::Attention => SortKey::Attention,
            SortArg::Date => SortKey::Date,
        }
    }
}
