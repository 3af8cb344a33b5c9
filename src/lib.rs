//! # Garden - a plant tracker for the command line
//!
//! Garden keeps a list of plants with their care schedules, health and history,
//! and tells you which ones are due for attention. The collection is stored as
//! JSON in a `.garden/` directory and can be exported to, and re-imported from,
//! a readable markdown document.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a new garden
//! garden init
//!
//! # Add a plant
//! garden add "Cherry Tom" -t "Cherry Tomato" --location "Bed 2" --schedule daily
//!
//! # Record that you watered it
//! garden care <id> --type watering
//!
//! # See what needs attention
//! garden list --sort attention
//! ```
//!
//! ## Modules
//!
//! - [`care`]: Plant age and care scheduling
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Plant, CareSchedule, HealthStatus, etc.)
//! - [`storage`]: The plant store, persistence and the markdown format
//! - [`validation`]: Input validation utilities

/// Plant age, next care date and overdue detection.
pub mod care;

/// Common plant names and stock images.
pub mod catalog;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.garden.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `GardenError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for plants.
///
/// Includes `Plant`, `CareSchedule`, `HealthStatus` and the history entries.
pub mod model;

pub mod search;

/// Plant store and persistence.
pub mod storage;

/// Input validation utilities.
///
/// Validates names, types and free text before they reach the store.
pub mod validation;

pub mod weather;
